//! Circle (ball) flat rendering pipeline.
//!
//! Spawns a 2D mesh child (unit circle scaled by BallRadius*2) for every Ball
//! added, tinted from the animation palette by the ball's color index. The
//! headless variant (tests, `headless` feature) spawns marker children only,
//! so the full schedule runs without a GPU or window.

use bevy::prelude::*;
#[cfg(not(any(test, feature = "headless")))]
use bevy::sprite::{ColorMaterial, Material2dPlugin, MeshMaterial2d};
use sb_core::{Ball, BallCircleVisual, BallColorIndex, BallRadius};

#[cfg(not(any(test, feature = "headless")))]
use bevy::math::primitives::Circle;

#[cfg(not(any(test, feature = "headless")))]
use crate::palette::AnimPalette;

#[cfg(not(any(test, feature = "headless")))]
// Resource storing shared unit circle mesh handle
#[derive(Resource)]
struct CircleMeshHandle(Handle<Mesh>);

pub struct CirclesPlugin;

#[cfg(not(any(test, feature = "headless")))]
impl Plugin for CirclesPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(Material2dPlugin::<ColorMaterial>::default())
            .add_systems(Startup, prepare_circle_mesh)
            .add_systems(Update, spawn_ball_circles);
    }
}

#[cfg(any(test, feature = "headless"))]
impl Plugin for CirclesPlugin {
    fn build(&self, app: &mut App) {
        // Headless variant: no meshes / materials; just spawn marker child for each Added<Ball>
        app.add_systems(
            Update,
            |mut commands: Commands, q_new: Query<Entity, Added<Ball>>| {
                for e in &q_new {
                    let child = commands.spawn((BallCircleVisual,)).id();
                    commands.entity(e).add_child(child);
                }
            },
        );
    }
}

#[cfg(not(any(test, feature = "headless")))]
fn prepare_circle_mesh(mut meshes: ResMut<Assets<Mesh>>, mut commands: Commands) {
    let mesh = meshes.add(Mesh::from(Circle::new(1.0)));
    commands.insert_resource(CircleMeshHandle(mesh));
}

#[cfg(not(any(test, feature = "headless")))]
fn spawn_ball_circles(
    mut commands: Commands,
    circle_mesh: Option<Res<CircleMeshHandle>>,
    palette: Option<Res<AnimPalette>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    q_new_balls: Query<(Entity, &BallRadius, &BallColorIndex), Added<Ball>>,
) {
    // Missing mesh resource means no drawable surface; degrade silently.
    let Some(circle_mesh) = circle_mesh else {
        return;
    };
    for (entity, radius, color_index) in q_new_balls.iter() {
        let color = palette
            .as_deref()
            .map(|p| p.color_for_index(color_index.0))
            .unwrap_or(crate::palette::FALLBACK_COLORS[0]);
        let mat_handle = materials.add(ColorMaterial::from(color));
        // Child entity holding the visual; inherits the ball's translation.
        let child = commands
            .spawn((
                Mesh2d::from(circle_mesh.0.clone()),
                MeshMaterial2d(mat_handle),
                Transform::from_scale(Vec3::splat(radius.0)),
                Visibility::Visible,
                InheritedVisibility::VISIBLE,
                BallCircleVisual,
            ))
            .id();
        commands.entity(entity).add_child(child);
    }
}
