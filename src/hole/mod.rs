//! Hole module - attraction field, capture test, and relocation

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ball::{Ball, BallMotion};
use crate::constants::HOLE_SPAWN;
use crate::helpers::{ground_distance, ground_xz, lerp};
use crate::tuning::PhysicsTweaks;

/// The cup. Lives on the y = 0 plane; only the shot resolution moves it.
#[derive(Debug, Clone, PartialEq)]
pub struct Hole {
    pub position: Vec3,
}

impl Default for Hole {
    fn default() -> Self {
        Self {
            position: HOLE_SPAWN,
        }
    }
}

impl Hole {
    pub fn new(position: Vec3) -> Self {
        Self {
            position: Vec3::new(position.x, 0.0, position.z),
        }
    }

    /// Ground-plane distance from the hole to `point`
    pub fn distance_to(&self, point: Vec3) -> f32 {
        ground_distance(self.position, point)
    }

    /// Nudge a nearby ball toward the hole.
    ///
    /// Per-frame additive impulse with linear falloff, stronger while rolling.
    /// No effect outside the attraction radius or inside the dead zone.
    /// Returns whether the ball was nudged.
    pub fn apply_attraction(&self, ball: &mut Ball, tweaks: &PhysicsTweaks) -> bool {
        let distance = self.distance_to(ball.position);
        if distance >= tweaks.attraction_radius || distance <= tweaks.attraction_dead_zone {
            return false;
        }

        let Some(toward) = (ground_xz(self.position) - ground_xz(ball.position)).try_normalize()
        else {
            return false;
        };

        let mut force = match ball.motion {
            BallMotion::Rolling => tweaks.attraction_rolling,
            BallMotion::Flight => tweaks.attraction_flight,
        };
        force *= (1.0 - distance / tweaks.attraction_radius) * tweaks.attraction_falloff;

        let impulse = toward * force * tweaks.attraction_scale;
        ball.velocity.x += impulse.x;
        ball.velocity.z += impulse.y;
        true
    }

    /// Whether a ball at `ball_position` moving at `ball_velocity` drops in.
    ///
    /// Inside the rim always counts; a slow ball just outside it still drops.
    pub fn check_capture(
        &self,
        ball_position: Vec3,
        ball_velocity: Vec3,
        tweaks: &PhysicsTweaks,
    ) -> bool {
        let distance = self.distance_to(ball_position);
        distance <= tweaks.hole_radius
            || (distance <= tweaks.hole_radius * tweaks.capture_slack
                && ball_velocity.length() < tweaks.capture_slow_speed)
    }

    /// Teleport the hole to a random spot inside the course rectangle
    pub fn relocate(&mut self, bounds: &CourseBounds, rng: &mut impl Rng) -> Vec3 {
        self.position = bounds.sample(rng);
        self.position
    }
}

/// Rectangle on the ground plane where the hole may be placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl CourseBounds {
    pub fn from_tweaks(tweaks: &PhysicsTweaks) -> Self {
        Self {
            min_x: tweaks.course_min_x,
            max_x: tweaks.course_max_x,
            min_z: tweaks.course_min_z,
            max_z: tweaks.course_max_z,
        }
    }

    /// x in [min_x, max_x), z in (min_z, max_z]
    pub fn sample(&self, rng: &mut impl Rng) -> Vec3 {
        let x = lerp(self.min_x, self.max_x, rng.gen_range(0.0..1.0));
        let z = lerp(self.max_z, self.min_z, rng.gen_range(0.0..1.0));
        Vec3::new(x, 0.0, z)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        let (lo_x, hi_x) = (self.min_x.min(self.max_x), self.min_x.max(self.max_x));
        let (lo_z, hi_z) = (self.min_z.min(self.max_z), self.min_z.max(self.max_z));
        (lo_x..=hi_x).contains(&point.x) && (lo_z..=hi_z).contains(&point.z)
    }
}

/// Random source for hole relocation. Seed it for reproducible sessions.
#[derive(Resource)]
pub struct HoleRng(pub StdRng);

impl HoleRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for HoleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Marker for the rendered hole entity
#[derive(Component)]
pub struct HoleVisual;

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, z: f32, motion: BallMotion) -> Ball {
        Ball {
            position: Vec3::new(x, 0.2, z),
            velocity: Vec3::ZERO,
            motion,
        }
    }

    #[test]
    fn test_capture_at_center_any_speed() {
        let tweaks = PhysicsTweaks::default();
        let hole = Hole::new(Vec3::new(1.0, 0.0, -2.0));
        assert!(hole.check_capture(Vec3::new(1.0, 0.2, -2.0), Vec3::new(25.0, 3.0, 0.0), &tweaks));
    }

    #[test]
    fn test_capture_near_miss_depends_on_speed() {
        let tweaks = PhysicsTweaks::default();
        let hole = Hole::default();
        let r = tweaks.hole_radius;
        let far = hole.position + Vec3::new(1.3 * r, 0.2, 0.0);
        let near = hole.position + Vec3::new(0.0, 0.2, 1.1 * r);

        assert!(!hole.check_capture(far, Vec3::new(1.0, 0.0, 0.0), &tweaks));
        assert!(hole.check_capture(near, Vec3::new(0.2, 0.0, 0.0), &tweaks));
        assert!(!hole.check_capture(near, Vec3::new(0.6, 0.0, 0.0), &tweaks));
    }

    #[test]
    fn test_attraction_noop_outside_radius_and_dead_zone() {
        let tweaks = PhysicsTweaks::default();
        let hole = Hole::new(Vec3::ZERO);

        let mut outside = ball_at(0.5, 0.0, BallMotion::Rolling);
        assert!(!hole.apply_attraction(&mut outside, &tweaks));
        assert_eq!(outside.velocity, Vec3::ZERO);

        let mut dead = ball_at(0.0, 0.1, BallMotion::Rolling);
        assert!(!hole.apply_attraction(&mut dead, &tweaks));
        assert_eq!(dead.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_attraction_pulls_toward_hole() {
        let tweaks = PhysicsTweaks::default();
        let hole = Hole::new(Vec3::ZERO);
        let mut ball = ball_at(0.25, 0.0, BallMotion::Rolling);
        assert!(hole.apply_attraction(&mut ball, &tweaks));

        // 0.5 * (1 - 0.25 / 0.5) * 0.2 * 0.1
        let expected = 0.5 * 0.5 * 0.2 * 0.1;
        assert!((ball.velocity.x + expected).abs() < 1e-6);
        assert_eq!(ball.velocity.y, 0.0);
        assert_eq!(ball.velocity.z, 0.0);
    }

    #[test]
    fn test_attraction_weaker_in_flight() {
        let tweaks = PhysicsTweaks::default();
        let hole = Hole::new(Vec3::ZERO);
        let mut rolling = ball_at(0.0, 0.3, BallMotion::Rolling);
        let mut flying = ball_at(0.0, 0.3, BallMotion::Flight);
        hole.apply_attraction(&mut rolling, &tweaks);
        hole.apply_attraction(&mut flying, &tweaks);
        assert!(rolling.velocity.z < flying.velocity.z);
        assert!(flying.velocity.z < 0.0);
        let ratio = rolling.velocity.z / flying.velocity.z;
        assert!((ratio - 0.5 / 0.3).abs() < 1e-4);
    }

    #[test]
    fn test_relocate_is_seeded_and_in_bounds() {
        let tweaks = PhysicsTweaks::default();
        let bounds = CourseBounds::from_tweaks(&tweaks);
        let mut a = Hole::default();
        let mut b = Hole::default();
        let mut rng_a = HoleRng::seeded(42);
        let mut rng_b = HoleRng::seeded(42);

        for _ in 0..50 {
            let pa = a.relocate(&bounds, &mut rng_a.0);
            let pb = b.relocate(&bounds, &mut rng_b.0);
            assert_eq!(pa, pb);
            assert!(bounds.contains(pa));
            assert_eq!(pa.y, 0.0);
        }
    }
}
