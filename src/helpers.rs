//! Utility functions for minigolf

use bevy::prelude::*;

/// Project a world point onto the ground plane (x, z)
pub fn ground_xz(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Distance between two points measured in the ground plane only
pub fn ground_distance(a: Vec3, b: Vec3) -> f32 {
    ground_xz(a).distance(ground_xz(b))
}

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
