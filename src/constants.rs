//! Tunable constants for minigolf
//!
//! All gameplay values are defined here for easy tweaking.
//! `PhysicsTweaks` starts from these and may be overridden by config.

use bevy::prelude::*;

// =============================================================================
// COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb(0.2, 0.3, 0.3);
pub const GROUND_COLOR: Color = Color::srgb(0.18, 0.55, 0.22);
pub const BALL_COLOR: Color = Color::WHITE;
pub const HOLE_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);

pub const TEXT_PRIMARY: Color = Color::srgb(0.95, 0.95, 0.9);
pub const TEXT_ACCENT: Color = Color::srgb(1.0, 0.85, 0.3);

// =============================================================================
// SIZE CONSTANTS
// =============================================================================

pub const BALL_RADIUS: f32 = 0.2;
pub const HOLE_DEPTH: f32 = 0.4;
pub const GROUND_SIZE: f32 = 20.0;
pub const CHARGE_GAUGE_WIDTH: f32 = 240.0;
pub const CHARGE_GAUGE_HEIGHT: f32 = 14.0;

// =============================================================================
// BALL PHYSICS
// =============================================================================

pub const BALL_GRAVITY: f32 = 9.8; // Magnitude, applied downward
pub const BALL_AIR_RESISTANCE: f32 = 0.999; // Velocity retained per reference step in flight
pub const BALL_ROLL_FRICTION: f32 = 0.96; // Horizontal velocity retained per reference step while rolling
pub const BALL_GROUND_HEIGHT: f32 = 0.2; // Ball center height when resting on the ground
pub const BALL_BOUNCE: f32 = 0.6; // Coefficient of restitution on ground contact
pub const BALL_BOUNCE_MIN_SPEED: f32 = 0.1; // |vy| at or below this settles into rolling
pub const BALL_STOP_SPEED: f32 = 0.01; // Rolling ball below this comes to a full stop
pub const DECAY_REFERENCE_HZ: f32 = 60.0; // Step rate the per-step decay factors were tuned at

// =============================================================================
// SHOOTING
// =============================================================================

pub const SHOT_MIN_FLIGHT_POWER: f32 = 8.0; // Power above this launches the ball into the air
pub const SHOT_FLIGHT_LIFT: f32 = 0.2; // Upward bias added to flight hits
pub const SHOT_ROLL_POWER_SCALE: f32 = 0.6; // Rolling hits are deliberately weaker
pub const SHOT_AIM_LIFT: f32 = 0.2; // Upward bias added to the camera aim
pub const SHOT_CHARGE_TIME: f32 = 2.0; // Seconds to reach full charge
pub const SHOT_MIN_POWER: f32 = 2.0;
pub const SHOT_MAX_POWER: f32 = 30.0;
pub const SHOT_REST_SPEED: f32 = 0.01; // Shot resolves once the rolling ball is slower than this

// =============================================================================
// HOLE
// =============================================================================

pub const HOLE_RADIUS: f32 = 0.35;
pub const HOLE_CAPTURE_SLACK: f32 = 1.2; // Slow balls within radius × slack still drop
pub const HOLE_CAPTURE_SLOW_SPEED: f32 = 0.5;
pub const HOLE_ATTRACTION_RADIUS: f32 = 0.5;
pub const HOLE_ATTRACTION_DEAD_ZONE: f32 = 0.1;
pub const HOLE_ATTRACTION_FLIGHT: f32 = 0.3;
pub const HOLE_ATTRACTION_ROLLING: f32 = 0.5;
pub const HOLE_ATTRACTION_FALLOFF: f32 = 0.2;
pub const HOLE_ATTRACTION_SCALE: f32 = 0.1;

// =============================================================================
// COURSE
// =============================================================================

pub const COURSE_MIN_X: f32 = -4.0;
pub const COURSE_MAX_X: f32 = 4.0;
pub const COURSE_MIN_Z: f32 = -8.0;
pub const COURSE_MAX_Z: f32 = 0.0;

// =============================================================================
// SPAWN POSITIONS
// =============================================================================

pub const BALL_SPAWN: Vec3 = Vec3::new(0.0, BALL_GROUND_HEIGHT, 0.0);
pub const HOLE_SPAWN: Vec3 = Vec3::new(2.0, 0.0, 0.0);
pub const CAMERA_SPAWN: Vec3 = Vec3::new(0.0, 1.0, 3.0);

// =============================================================================
// CAMERA / HUD
// =============================================================================

pub const CAMERA_MOVE_SPEED: f32 = 2.5;
pub const MOUSE_SENSITIVITY: f32 = 0.2; // Degrees per pixel of mouse motion
pub const CAMERA_FOV: f32 = 90.0; // Degrees, vertical
pub const CAMERA_PITCH_LIMIT: f32 = 89.0; // Degrees
pub const STICK_DEADZONE: f32 = 0.25;
pub const CAPTURE_BANNER_TIME: f32 = 3.0; // Seconds the capture message stays up
