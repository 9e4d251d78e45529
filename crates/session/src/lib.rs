// Session crate: owns the animation lifecycle for one running app — field
// bounds, ball spawning/rebuild, pointer tracking and the optional auto-close.

use bevy::prelude::*;
use bevy::window::WindowResized;
use sb_core::PrePhysicsSet;

mod auto_close;
mod cursor;
mod spawn;

pub use cursor::track_cursor;
pub use spawn::{despawn_ball_field, handle_window_resize, rebuild_ball_field, setup_field_bounds};

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        // No-op when DefaultPlugins already registered the event (headless
        // tests run without a window plugin).
        app.add_event::<WindowResized>();
        app.init_resource::<sb_core::StatusCode>();
        app.add_systems(Startup, (setup_field_bounds, auto_close::setup_auto_close));
        app.add_systems(
            Update,
            (
                (handle_window_resize, rebuild_ball_field).chain(),
                track_cursor,
            )
                .in_set(PrePhysicsSet),
        );
        app.add_systems(Update, auto_close::check_auto_close);
    }
}
