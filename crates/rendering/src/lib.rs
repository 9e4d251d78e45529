// Rendering crate: camera, clear color, palette, circle visuals and the
// field-to-world transform sync.

use bevy::prelude::*;
use sb_core::{AnimConfigRes, PostPhysicsAdjustSet};

mod palette;
pub use palette::{AnimPalette, Palette, FALLBACK_COLORS};

mod circles;
pub use circles::CirclesPlugin;

mod sync;
pub use sync::sync_ball_transforms;

pub struct RenderingPlugin;

#[derive(Component)]
pub struct FieldCamera;

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, FieldCamera));
}

/// Replace the default palette with the configured one (bad entries keep
/// their per-slot fallback).
fn resolve_palette(cfg: Option<Res<AnimConfigRes>>, mut palette: ResMut<AnimPalette>) {
    if let Some(cfg) = cfg {
        *palette = AnimPalette::from_hex(&cfg.0.palette.colors);
    }
}

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimPalette>()
            .add_plugins(CirclesPlugin)
            .add_systems(Startup, (setup_camera, resolve_palette))
            .add_systems(
                Update,
                sync_ball_transforms.in_set(PostPhysicsAdjustSet),
            )
            .insert_resource(ClearColor(Palette::BG));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::{Ball, BallColorIndex, BallRadius, CorePlugin};

    #[test]
    fn plugin_spawns_camera() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(CorePlugin);
        app.add_plugins(RenderingPlugin);
        app.update();

        let world = app.world_mut();
        let mut q_cam = world.query::<&FieldCamera>();
        assert_eq!(q_cam.iter(world).count(), 1, "expected exactly one FieldCamera");
    }

    #[test]
    fn plugin_resolves_palette_and_clear_color() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(CorePlugin);
        app.add_plugins(RenderingPlugin);
        assert!(app.world().get_resource::<AnimPalette>().is_some());
        assert_eq!(
            app.world().resource::<ClearColor>().0,
            Palette::BG
        );
    }

    #[test]
    fn palette_resolves_from_config() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(CorePlugin);
        let mut cfg = sb_config::AnimConfig::default();
        cfg.palette.colors[0] = "#ffffff".into();
        app.insert_resource(AnimConfigRes(cfg));
        app.add_plugins(RenderingPlugin);
        app.update();
        let palette = app.world().resource::<AnimPalette>();
        assert_eq!(palette.0[0], Color::from(Srgba::hex("#ffffff").unwrap()));
        assert_eq!(palette.0[1], Color::from(Srgba::hex("#f59e0b").unwrap()));
    }

    #[test]
    fn rendering_plugin_spawns_circle_for_ball() {
        use sb_core::BallCircleVisual;
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(CorePlugin);
        app.add_plugins(RenderingPlugin);
        // Spawn a ball AFTER plugins so Added<Ball> triggers circle spawn
        app.world_mut().spawn((Ball, BallRadius(3.0), BallColorIndex(1)));
        app.update();

        let world = app.world_mut();
        let mut q = world.query::<&BallCircleVisual>();
        assert_eq!(q.iter(world).count(), 1, "expected one BallCircleVisual via RenderingPlugin");
    }
}
