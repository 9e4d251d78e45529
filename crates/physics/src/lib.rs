//! Per-frame ball integration: restoring force toward home, cursor repulsion,
//! floor friction, wall bounce.
//!
//! The update order inside [`step_ball`] is load-bearing; later stages read
//! velocity written by earlier ones within the same ball's update. Position
//! integration applies velocity unscaled while the force terms scale with the
//! frame's elapsed milliseconds; the mismatch is part of the animation's look
//! and must not be "fixed".

use bevy::prelude::*;
use sb_config::PhysicsConfig;
use sb_core::{
    AnimConfigRes, Ball, BallRadius, CursorField, FieldBounds, FieldPosition, HomePosition,
    PhysicsStepSet, Velocity,
};

/// Advance one ball by one frame.
///
/// `time_diff_ms` is the elapsed real time in milliseconds (0 is valid and
/// collapses every force term to zero while still integrating position).
/// `cursor` may be the far-away sentinel; repulsion decays with distance so
/// the sentinel contributes effectively nothing. There is no minimum-distance
/// clamp: a cursor nearly on top of a ball imparts a very large impulse.
pub fn step_ball(
    pos: &mut Vec2,
    vel: &mut Vec2,
    home: Vec2,
    radius: f32,
    time_diff_ms: f32,
    cursor: Vec2,
    bounds: Vec2,
    cfg: &PhysicsConfig,
) {
    let restore = cfg.restore_force * time_diff_ms;
    let friction = cfg.floor_friction * time_diff_ms;
    let mouse_mult = cfg.mouse_force * time_diff_ms;

    // Position integration (unscaled by elapsed time).
    *pos += *vel;

    // Restoring force, each axis independently. Exactly at home: no nudge.
    if pos.x > home.x {
        vel.x -= restore;
    } else if pos.x < home.x {
        vel.x += restore;
    }
    if pos.y > home.y {
        vel.y -= restore;
    } else if pos.y < home.y {
        vel.y += restore;
    }

    // Cursor repulsion: Euclidean falloff, Manhattan-weighted axis split.
    let dist = *pos - cursor;
    let euclid = dist.length();
    let manhattan = dist.x.abs() + dist.y.abs();
    if manhattan > 0.0 && euclid > 0.0 {
        let force_x = (dist.x.abs() / manhattan) * (1.0 / euclid) * mouse_mult;
        let force_y = (dist.y.abs() / manhattan) * (1.0 / euclid) * mouse_mult;
        vel.x += if dist.x > 0.0 { force_x } else { -force_x };
        vel.y += if dist.y > 0.0 { force_y } else { -force_y };
    }

    // Floor friction: fixed decrement toward zero per axis. A large time spike
    // can overshoot past zero and flip the sign; accepted approximation.
    if vel.x > 0.0 {
        vel.x -= friction;
    } else if vel.x < 0.0 {
        vel.x += friction;
    }
    if vel.y > 0.0 {
        vel.y -= friction;
    } else if vel.y < 0.0 {
        vel.y += friction;
    }

    // Wall collision: clamp inside the boundary and reflect-and-dampen.
    let bounce = -(1.0 - cfg.collision_damper);
    if pos.y > bounds.y - radius {
        pos.y = bounds.y - radius - cfg.wall_inset;
        vel.y *= bounce;
    }
    if pos.y < radius {
        pos.y = radius + cfg.wall_inset;
        vel.y *= bounce;
    }
    if pos.x > bounds.x - radius {
        pos.x = bounds.x - radius - cfg.wall_inset;
        vel.x *= bounce;
    }
    if pos.x < radius {
        pos.x = radius + cfg.wall_inset;
        vel.x *= bounce;
    }
}

/// System: step every ball with this frame's elapsed time and cursor state.
pub fn step_field(
    time: Res<Time>,
    cfg: Option<Res<AnimConfigRes>>,
    bounds: Option<Res<FieldBounds>>,
    cursor: Res<CursorField>,
    mut q_balls: Query<
        (&mut FieldPosition, &mut Velocity, &HomePosition, &BallRadius),
        With<Ball>,
    >,
) {
    let (Some(cfg), Some(bounds)) = (cfg, bounds) else {
        return;
    };
    let time_diff_ms = time.delta_secs() * 1000.0;
    let size = bounds.size();
    for (mut pos, mut vel, home, radius) in q_balls.iter_mut() {
        step_ball(
            &mut pos.0,
            &mut vel.0,
            home.0,
            radius.0,
            time_diff_ms,
            cursor.0,
            size,
            &cfg.0.physics,
        );
    }
}

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, step_field.in_set(PhysicsStepSet));
    }
}
