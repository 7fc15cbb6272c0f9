//! First-person fly camera: WASD movement and mouse look

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::*;
use crate::settings::InitSettings;

/// Yaw/pitch orientation of the player camera, in degrees.
/// Yaw -90 looks down -Z.
#[derive(Component, Debug, Clone, Copy)]
pub struct FlyCamera {
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            yaw: -90.0,
            pitch: 0.0,
        }
    }
}

impl FlyCamera {
    /// Unit view direction
    pub fn forward(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
    }

    /// Apply a mouse delta in pixels
    pub fn look(&mut self, delta: Vec2, sensitivity: f32, invert_y: bool) {
        let dy = if invert_y { delta.y } else { -delta.y };
        self.yaw += delta.x * sensitivity;
        self.pitch = (self.pitch + dy * sensitivity).clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }
}

pub fn spawn_camera(mut commands: Commands) {
    let fly = FlyCamera::default();
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV.to_radians(),
            ..default()
        }),
        Transform::from_translation(CAMERA_SPAWN).looking_to(fly.forward(), Vec3::Y),
        fly,
    ));
}

/// Mouse look plus WASD/left-stick movement along the view direction
pub fn fly_camera(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    gamepads: Query<&Gamepad>,
    settings: Res<InitSettings>,
    mut camera: Query<(&mut Transform, &mut FlyCamera)>,
) {
    let Ok((mut transform, mut fly)) = camera.single_mut() else {
        return;
    };

    let mut look = mouse_motion.delta;
    for gamepad in &gamepads {
        let stick = gamepad.right_stick();
        if stick.length() > STICK_DEADZONE {
            // Stick up looks up; scale so a full deflection turns ~150 deg/s
            look += Vec2::new(stick.x, -stick.y) * 750.0 * time.delta_secs();
        }
    }
    if look != Vec2::ZERO {
        fly.look(look, settings.mouse_sensitivity, settings.invert_y);
    }

    let forward = fly.forward();
    let right = forward.cross(Vec3::Y).normalize_or_zero();

    let mut movement = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        movement += forward;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        movement -= forward;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        movement += right;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        movement -= right;
    }
    for gamepad in &gamepads {
        let stick = gamepad.left_stick();
        if stick.length() > STICK_DEADZONE {
            movement += forward * stick.y + right * stick.x;
        }
    }

    transform.translation += movement * settings.camera_speed * time.delta_secs();
    transform.look_to(forward, Vec3::Y);
}

/// Escape closes the game
pub fn close_on_escape(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    window: Query<Entity, With<PrimaryWindow>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    if let Ok(entity) = window.single() {
        info!("Escape pressed, closing");
        commands.entity(entity).despawn();
    }
}
