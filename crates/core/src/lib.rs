// Core crate: foundational ECS components, resources and system set labels.
// No simulation logic; enables other crates to compile against stable names.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Ball;

/// Logical radius used both for wall collision and rendering scale.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallRadius(pub f32);

/// Current position in field space: top-left origin, y grows downward,
/// units are field pixels. The render sync maps this into world space.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct FieldPosition(pub Vec2);

/// Velocity in field pixels per frame-equivalent. Position integration applies
/// it unscaled each frame; only the forces scale with elapsed time.
#[derive(Component, Debug, Default, Deref, DerefMut, Copy, Clone)]
pub struct Velocity(pub Vec2);

/// Resting coordinate set once at spawn; target of the restoring force.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct HomePosition(pub Vec2);

/// Index into the animation palette, assigned per ball in emission order.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallColorIndex(pub usize);

/// Tag component for the circle mesh child used in flat rendering modes.
#[derive(Component, Debug)]
pub struct BallCircleVisual;

// Wrapper Bevy resource for the pure-data AnimConfig (keeps sb_config free of bevy dependency).
#[derive(Resource, Debug, Clone)]
pub struct AnimConfigRes(pub sb_config::AnimConfig);

impl Default for AnimConfigRes {
    fn default() -> Self {
        Self(sb_config::AnimConfig::default())
    }
}

/// Status code currently displayed. Changing it rebuilds the ball field.
#[derive(Resource, Debug, Copy, Clone, PartialEq, Eq)]
pub struct StatusCode(pub u32);

impl Default for StatusCode {
    fn default() -> Self {
        Self(404)
    }
}

/// Field dimensions in field pixels. Recomputed from the window on resize.
#[derive(Resource, Debug, Copy, Clone, PartialEq)]
pub struct FieldBounds {
    pub width: f32,
    pub height: f32,
}

impl FieldBounds {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Shared pointer position in field space. `SENTINEL` means "no active
/// pointer interaction" and sits far outside any plausible field.
#[derive(Resource, Debug, Copy, Clone, Deref, DerefMut)]
pub struct CursorField(pub Vec2);

impl CursorField {
    pub const SENTINEL: Vec2 = Vec2::new(9999.0, 9999.0);

    pub fn is_sentinel(&self) -> bool {
        self.0 == Self::SENTINEL
    }
}

impl Default for CursorField {
    fn default() -> Self {
        Self(Self::SENTINEL)
    }
}

// System set labels: cursor sampling runs before the stepper, transform sync after.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub struct PrePhysicsSet;
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub struct PhysicsStepSet;
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub struct PostPhysicsAdjustSet;

// Core plugin registers sets to establish ordering contracts and the shared
// cursor resource every session reads.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorField>();
        app.configure_sets(
            Update,
            (
                PrePhysicsSet.before(PhysicsStepSet),
                PhysicsStepSet.before(PostPhysicsAdjustSet),
            ),
        );
    }
}
