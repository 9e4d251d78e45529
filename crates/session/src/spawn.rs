//! Ball field lifecycle: bounds from the window, spawn on status-code or
//! bounds change, idempotent teardown.
//!
//! Exactly one ball set exists per session. A rebuild despawns the previous
//! set (visual children included) before seeding the new layout, so no ball
//! survives a status-code change.

use bevy::prelude::*;
use bevy::window::WindowResized;
use sb_config::PaletteConfig;
use sb_core::{
    AnimConfigRes, Ball, BallColorIndex, BallRadius, FieldBounds, FieldPosition, HomePosition,
    StatusCode, Velocity,
};

/// System: size the field from the primary window (config fallback when
/// running headless) and publish `FieldBounds`.
pub fn setup_field_bounds(
    mut commands: Commands,
    cfg: Option<Res<AnimConfigRes>>,
    windows_q: Query<&Window>,
) {
    let Some(cfg) = cfg else {
        return;
    };
    let window_width = windows_q
        .iter()
        .next()
        .map(|w| w.width())
        .unwrap_or(cfg.0.window.width);
    commands.insert_resource(FieldBounds {
        width: cfg.0.field.width_for_window(window_width),
        height: cfg.0.field.height,
    });
}

/// System: follow window resizes; a changed `FieldBounds` triggers a rebuild
/// (and with it the responsive radius scaling).
pub fn handle_window_resize(
    mut events: EventReader<WindowResized>,
    cfg: Option<Res<AnimConfigRes>>,
    bounds: Option<ResMut<FieldBounds>>,
) {
    let (Some(cfg), Some(mut bounds)) = (cfg, bounds) else {
        return;
    };
    let Some(last) = events.read().last() else {
        return;
    };
    let next = FieldBounds {
        width: cfg.0.field.width_for_window(last.width),
        height: cfg.0.field.height,
    };
    if *bounds != next {
        *bounds = next;
    }
}

/// System: (re)build the ball field whenever the status code or the field
/// bounds change. The first schedule run counts as a change, so this also
/// performs the initial spawn.
pub fn rebuild_ball_field(
    mut commands: Commands,
    cfg: Option<Res<AnimConfigRes>>,
    bounds: Option<Res<FieldBounds>>,
    code: Option<Res<StatusCode>>,
    q_balls: Query<Entity, With<Ball>>,
) {
    let (Some(cfg), Some(bounds), Some(code)) = (cfg, bounds, code) else {
        return;
    };
    if !code.is_changed() && !bounds.is_changed() {
        return;
    }

    for e in q_balls.iter() {
        commands.entity(e).despawn();
    }

    let seeds = sb_glyphs::layout_status_code(
        code.0,
        bounds.width,
        bounds.height,
        &cfg.0.layout,
        PaletteConfig::SIZE,
    );
    let spawned = seeds.len();
    for seed in seeds {
        commands.spawn((
            Ball,
            BallRadius(seed.radius),
            BallColorIndex(seed.color_index),
            FieldPosition(seed.pos),
            Velocity::default(),
            HomePosition(seed.pos),
            Transform::default(),
            GlobalTransform::default(),
            Visibility::Visible,
        ));
    }
    info!(
        code = code.0,
        balls = spawned,
        width = bounds.width,
        height = bounds.height,
        "ball field rebuilt"
    );
}

/// System: tear the field down. Safe to run any number of times; an empty
/// field despawns nothing and schedules nothing further.
pub fn despawn_ball_field(mut commands: Commands, q_balls: Query<Entity, With<Ball>>) {
    for e in q_balls.iter() {
        commands.entity(e).despawn();
    }
}
