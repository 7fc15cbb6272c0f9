//! Ball state and render markers

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::BALL_SPAWN;

/// Motion mode of the ball
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallMotion {
    /// Airborne: gravity, air resistance, ground bounces
    Flight,
    /// Constrained to the ground plane, decelerated by friction
    #[default]
    Rolling,
}

impl BallMotion {
    /// Single-letter code used by the event log
    pub fn code(&self) -> &'static str {
        match self {
            BallMotion::Flight => "F",
            BallMotion::Rolling => "R",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BallMotion::Flight => "Flight",
            BallMotion::Rolling => "Rolling",
        }
    }
}

/// The single movable body of the course.
///
/// Invariant: while `motion` is `Rolling`, `velocity.y` is exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: Vec3,
    pub velocity: Vec3,
    pub motion: BallMotion,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            position: BALL_SPAWN,
            velocity: Vec3::ZERO,
            motion: BallMotion::Rolling,
        }
    }
}

impl Ball {
    /// Put the ball back on the tee at rest
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// What happened to the ball during one physics step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BallStep {
    /// Impact speed of a ground bounce (vertical component before reflection)
    pub bounced: Option<f32>,
    /// Ball settled from Flight into Rolling
    pub landed: bool,
    /// Rolling ball came to a full stop
    pub stopped: bool,
}

/// Marker for the rendered ball entity
#[derive(Component)]
pub struct BallVisual;
