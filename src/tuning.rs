//! Global gameplay tuning settings
//!
//! `PhysicsTweaks` carries every number the physics core reads. It is a Bevy
//! resource for the game and a plain struct for headless tools and tests.

use bevy::log::warn;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Path to global gameplay tuning config
pub const GAMEPLAY_TUNING_FILE: &str = "config/golf_tuning.json";

/// How multiplicative velocity decay is applied over a step of length `dt`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model")]
pub enum DecayModel {
    /// Apply the factor once per step regardless of `dt`
    PerStep,
    /// Apply `factor^(dt * reference_hz)`; identical to `PerStep` at `1/reference_hz`
    Continuous { reference_hz: f32 },
}

impl Default for DecayModel {
    fn default() -> Self {
        DecayModel::Continuous {
            reference_hz: DECAY_REFERENCE_HZ,
        }
    }
}

impl DecayModel {
    /// Velocity multiplier for one step of `dt` seconds
    pub fn factor(&self, factor: f32, dt: f32) -> f32 {
        match *self {
            DecayModel::PerStep => factor,
            DecayModel::Continuous { reference_hz } => factor.powf(dt * reference_hz),
        }
    }
}

/// Runtime-adjustable physics values for tweaking gameplay feel
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTweaks {
    // Ball
    pub gravity: f32,
    pub air_resistance: f32,
    pub roll_friction: f32,
    pub decay: DecayModel,
    pub ground_height: f32,
    pub bounce: f32,
    pub bounce_min_speed: f32,
    pub stop_speed: f32,
    // Hit
    pub min_flight_power: f32,
    pub flight_lift: f32,
    pub roll_power_scale: f32,
    // Shot controller
    pub aim_lift: f32,
    pub charge_time: f32,
    pub min_power: f32,
    pub max_power: f32,
    pub rest_speed: f32,
    // Hole
    pub hole_radius: f32,
    pub capture_slack: f32,
    pub capture_slow_speed: f32,
    pub attraction_radius: f32,
    pub attraction_dead_zone: f32,
    pub attraction_flight: f32,
    pub attraction_rolling: f32,
    pub attraction_falloff: f32,
    pub attraction_scale: f32,
    // Course rectangle for hole relocation
    pub course_min_x: f32,
    pub course_max_x: f32,
    pub course_min_z: f32,
    pub course_max_z: f32,
}

impl Default for PhysicsTweaks {
    fn default() -> Self {
        Self {
            gravity: BALL_GRAVITY,
            air_resistance: BALL_AIR_RESISTANCE,
            roll_friction: BALL_ROLL_FRICTION,
            decay: DecayModel::default(),
            ground_height: BALL_GROUND_HEIGHT,
            bounce: BALL_BOUNCE,
            bounce_min_speed: BALL_BOUNCE_MIN_SPEED,
            stop_speed: BALL_STOP_SPEED,
            min_flight_power: SHOT_MIN_FLIGHT_POWER,
            flight_lift: SHOT_FLIGHT_LIFT,
            roll_power_scale: SHOT_ROLL_POWER_SCALE,
            aim_lift: SHOT_AIM_LIFT,
            charge_time: SHOT_CHARGE_TIME,
            min_power: SHOT_MIN_POWER,
            max_power: SHOT_MAX_POWER,
            rest_speed: SHOT_REST_SPEED,
            hole_radius: HOLE_RADIUS,
            capture_slack: HOLE_CAPTURE_SLACK,
            capture_slow_speed: HOLE_CAPTURE_SLOW_SPEED,
            attraction_radius: HOLE_ATTRACTION_RADIUS,
            attraction_dead_zone: HOLE_ATTRACTION_DEAD_ZONE,
            attraction_flight: HOLE_ATTRACTION_FLIGHT,
            attraction_rolling: HOLE_ATTRACTION_ROLLING,
            attraction_falloff: HOLE_ATTRACTION_FALLOFF,
            attraction_scale: HOLE_ATTRACTION_SCALE,
            course_min_x: COURSE_MIN_X,
            course_max_x: COURSE_MAX_X,
            course_min_z: COURSE_MIN_Z,
            course_max_z: COURSE_MAX_Z,
        }
    }
}

impl PhysicsTweaks {
    /// Tweaks with per-step decay (frame-rate dependent)
    pub fn per_step() -> Self {
        Self {
            decay: DecayModel::PerStep,
            ..Self::default()
        }
    }
}

pub fn load_gameplay_tuning_from_file(path: &str) -> Result<PhysicsTweaks, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path, e))
}

pub fn apply_global_tuning(tweaks: &mut PhysicsTweaks) -> Result<(), String> {
    match load_gameplay_tuning_from_file(GAMEPLAY_TUNING_FILE) {
        Ok(tuning) => {
            *tweaks = tuning;
            Ok(())
        }
        Err(err) => {
            *tweaks = PhysicsTweaks::default();
            Err(err)
        }
    }
}

pub fn load_global_tuning_system(mut tweaks: bevy::prelude::ResMut<PhysicsTweaks>) {
    if let Err(err) = apply_global_tuning(&mut tweaks) {
        warn!("{}, using default tuning", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous_matches_per_step_at_reference_rate() {
        let decay = DecayModel::default();
        let dt = 1.0 / DECAY_REFERENCE_HZ;
        assert!((decay.factor(BALL_ROLL_FRICTION, dt) - BALL_ROLL_FRICTION).abs() < 1e-7);
        assert_eq!(DecayModel::PerStep.factor(BALL_ROLL_FRICTION, 0.5), BALL_ROLL_FRICTION);
    }

    #[test]
    fn test_continuous_is_step_rate_independent() {
        let decay = DecayModel::default();
        let half = decay.factor(BALL_ROLL_FRICTION, 1.0 / 120.0);
        let full = decay.factor(BALL_ROLL_FRICTION, 1.0 / 60.0);
        assert!((half * half - full).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tweaks: PhysicsTweaks =
            serde_json::from_str(r#"{ "hole_radius": 0.5, "decay": { "model": "PerStep" } }"#)
                .unwrap();
        assert_eq!(tweaks.hole_radius, 0.5);
        assert_eq!(tweaks.decay, DecayModel::PerStep);
        assert_eq!(tweaks.max_power, SHOT_MAX_POWER);
    }
}
