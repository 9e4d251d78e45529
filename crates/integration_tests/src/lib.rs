// integration_tests crate
// Purpose: black-box style integration tests across published plugin APIs.
// Everything runs headless: MinimalPlugins + InputPlugin, rendering compiled
// with the `headless` feature (marker visuals, no GPU).

use bevy::prelude::*;

pub fn build_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    // InputPlugin -> provides Touches used by the cursor tracking system
    app.add_plugins(bevy::input::InputPlugin);
    app
}

/// Full plugin stack around a chosen status code.
pub fn build_full_stack(code: u32) -> App {
    let mut app = build_minimal_app();
    app.insert_resource(sb_core::AnimConfigRes::default());
    app.insert_resource(sb_core::StatusCode(code));
    app.add_plugins(sb_core::CorePlugin);
    app.add_plugins(sb_physics::PhysicsPlugin);
    app.add_plugins(sb_rendering::RenderingPlugin);
    app.add_plugins(sb_session::SessionPlugin);
    app
}
