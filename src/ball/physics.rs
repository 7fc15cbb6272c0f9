//! Ball physics: two-mode integration and hit response

use bevy::prelude::*;

use crate::ball::components::*;
use crate::helpers::ground_xz;
use crate::tuning::PhysicsTweaks;

impl Ball {
    /// Advance the ball by `dt` seconds.
    ///
    /// A flying ball that reached the ground on the previous step bounces or
    /// settles; otherwise it takes gravity and air resistance. Rolling takes
    /// friction. `position += velocity * dt` follows in both modes.
    pub fn step(&mut self, dt: f32, tweaks: &PhysicsTweaks) -> BallStep {
        let report = match self.motion {
            BallMotion::Flight if self.in_ground_contact(tweaks) => {
                self.resolve_ground_contact(dt, tweaks)
            }
            BallMotion::Flight => {
                self.apply_flight_forces(dt, tweaks);
                BallStep::default()
            }
            BallMotion::Rolling => self.apply_rolling_friction(dt, tweaks),
        };

        self.position += self.velocity * dt;
        report
    }

    /// Gravity then air resistance
    fn apply_flight_forces(&mut self, dt: f32, tweaks: &PhysicsTweaks) {
        self.velocity.y -= tweaks.gravity * dt;
        self.velocity *= tweaks.decay.factor(tweaks.air_resistance, dt);
    }

    /// Flying, at or below ground height, and not climbing
    fn in_ground_contact(&self, tweaks: &PhysicsTweaks) -> bool {
        self.motion == BallMotion::Flight
            && self.position.y <= tweaks.ground_height
            && self.velocity.y <= 0.0
    }

    /// Clamp to the ground and bounce or settle.
    ///
    /// The impact velocity is reflected and scaled by `bounce`. An impact that
    /// would lose less vertical speed than one gravity step adds back settles
    /// instead; below that the step-wise integration sustains the hop.
    pub fn resolve_ground_contact(&mut self, dt: f32, tweaks: &PhysicsTweaks) -> BallStep {
        let mut report = BallStep::default();
        if !self.in_ground_contact(tweaks) {
            return report;
        }

        self.position.y = tweaks.ground_height;
        let impact = -self.velocity.y;
        let lost = impact * (1.0 - tweaks.bounce);
        if impact > tweaks.bounce_min_speed && lost >= tweaks.gravity * dt {
            self.velocity.y = impact * tweaks.bounce;
            report.bounced = Some(impact);
        } else {
            // Vertical energy spent
            self.velocity.y = 0.0;
            self.motion = BallMotion::Rolling;
            report.landed = true;
        }
        report
    }

    fn apply_rolling_friction(&mut self, dt: f32, tweaks: &PhysicsTweaks) -> BallStep {
        let mut report = BallStep::default();
        let friction = tweaks.decay.factor(tweaks.roll_friction, dt);
        self.velocity.x *= friction;
        self.velocity.z *= friction;
        self.velocity.y = 0.0;

        if self.velocity != Vec3::ZERO && ground_xz(self.velocity).length() < tweaks.stop_speed {
            self.velocity = Vec3::ZERO;
            report.stopped = true;
        }
        report
    }

    /// Launch the ball along `direction` with `power`.
    ///
    /// Power above the flight threshold lifts the direction and flies;
    /// otherwise the ball rolls flat at reduced speed. Returns `false` and
    /// leaves the ball untouched when the direction is degenerate.
    pub fn apply_hit(&mut self, direction: Vec3, power: f32, tweaks: &PhysicsTweaks) -> bool {
        let Some(direction) = direction.try_normalize() else {
            return false;
        };
        let power = power.max(0.0);

        if power > tweaks.min_flight_power {
            let Some(lifted) = (direction + Vec3::Y * tweaks.flight_lift).try_normalize() else {
                return false;
            };
            self.motion = BallMotion::Flight;
            self.velocity = lifted * power;
        } else {
            let Some(flat) = Vec3::new(direction.x, 0.0, direction.z).try_normalize() else {
                return false;
            };
            self.motion = BallMotion::Rolling;
            self.velocity = flat * power * tweaks.roll_power_scale;
            self.position.y = tweaks.ground_height;
        }
        true
    }

    /// Rolling and slower than the rest threshold
    pub fn is_at_rest(&self, tweaks: &PhysicsTweaks) -> bool {
        self.motion == BallMotion::Rolling && self.speed() < tweaks.rest_speed
    }
}
