//! Pointer tracking for the cursor-repulsion force.
//!
//! Resolves the primary pointer (first touch if present, else mouse) to field
//! coordinates once per frame and writes the shared `CursorField` resource.
//! Whenever no pointer position is available (cursor outside the window,
//! headless run) the sentinel is written instead, which the stepper treats as
//! "no interaction".

use bevy::prelude::*;
use sb_core::{CursorField, FieldBounds};

/// Convert a window cursor position (top-left origin, logical coordinates) to world coordinates.
fn cursor_world_pos(
    camera_q: &Query<(&Camera, &GlobalTransform)>,
    screen_pos: Vec2,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?; // assume single active camera
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

/// Unified pointer (first touch if present, else mouse) world position.
fn primary_pointer_world_pos(
    window: &Window,
    touches: &Touches,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    if let Some(touch) = touches.iter().next() {
        return cursor_world_pos(camera_q, touch.position());
    }
    let cursor = window.cursor_position()?;
    cursor_world_pos(camera_q, cursor)
}

/// System: sample the pointer into field space.
pub fn track_cursor(
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    bounds: Option<Res<FieldBounds>>,
    mut cursor: ResMut<CursorField>,
) {
    let Some(bounds) = bounds else {
        return;
    };
    let world = windows_q
        .iter()
        .next()
        .and_then(|w| primary_pointer_world_pos(w, &touches, &camera_q));
    cursor.0 = match world {
        // world space is centered and y-up; field space is top-left y-down
        Some(p) => Vec2::new(p.x + bounds.width / 2.0, bounds.height / 2.0 - p.y),
        None => CursorField::SENTINEL,
    };
}
