//! Course scene: ground, ball and hole meshes, lighting

use bevy::prelude::*;

use crate::ball::BallVisual;
use crate::constants::*;
use crate::hole::HoleVisual;
use crate::session::GolfSession;
use crate::tuning::PhysicsTweaks;

/// Marker for the ground plane
#[derive(Component)]
pub struct Ground;

/// Spawn the static course plus the ball and hole visuals
pub fn spawn_course(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    session: Res<GolfSession>,
    tweaks: Res<PhysicsTweaks>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOR,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::IDENTITY,
        Ground,
    ));

    // Cup sunk into the ground; top sits just above y = 0 to avoid z-fighting
    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(tweaks.hole_radius, HOLE_DEPTH))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: HOLE_COLOR,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(hole_translation(session.hole.position)),
        HoleVisual,
    ));

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(BALL_RADIUS).mesh().uv(32, 18))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: BALL_COLOR,
            ..default()
        })),
        Transform::from_translation(session.ball.position),
        BallVisual,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 2_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn hole_translation(position: Vec3) -> Vec3 {
    Vec3::new(position.x, -HOLE_DEPTH / 2.0 + 0.001, position.z)
}

/// Copy session state onto the rendered transforms
pub fn sync_visuals(
    session: Res<GolfSession>,
    mut ball: Query<&mut Transform, (With<BallVisual>, Without<HoleVisual>)>,
    mut hole: Query<&mut Transform, (With<HoleVisual>, Without<BallVisual>)>,
) {
    if let Ok(mut transform) = ball.single_mut() {
        transform.translation = session.ball.position;
    }
    if let Ok(mut transform) = hole.single_mut() {
        transform.translation = hole_translation(session.hole.position);
    }
}
