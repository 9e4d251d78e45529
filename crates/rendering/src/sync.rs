//! Field-space to world-space transform sync.
//!
//! The simulation runs in canvas-style coordinates (top-left origin, y-down).
//! After each physics step this copies ball positions into their Transforms,
//! centered on the camera origin with y flipped. Read-only with respect to
//! simulation state.

use bevy::prelude::*;
use sb_core::{Ball, FieldBounds, FieldPosition};

pub fn sync_ball_transforms(
    bounds: Option<Res<FieldBounds>>,
    mut q_balls: Query<(&FieldPosition, &mut Transform), With<Ball>>,
) {
    let Some(bounds) = bounds else {
        return;
    };
    for (pos, mut tf) in q_balls.iter_mut() {
        tf.translation.x = pos.0.x - bounds.width / 2.0;
        tf.translation.y = bounds.height / 2.0 - pos.0.y;
    }
}
