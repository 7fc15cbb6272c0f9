//! Event type definitions for the logging system

use serde::{Deserialize, Serialize};

use crate::ball::BallMotion;
use crate::tuning::PhysicsTweaks;

/// All game events that can be logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    // === Session Events ===
    /// Session started (generated once per game launch)
    SessionStart {
        session_id: String, // UUID v4
        timestamp: String,
    },
    /// Physics configuration snapshot (logged after session start)
    Config(PhysicsTweaks),

    // === Shot Events ===
    /// Swing pressed, charge began
    ChargeStart,
    /// Swing released and the hit applied
    ShotRelease {
        charge: f32,
        power: f32,
        motion: BallMotion,
        direction: (f32, f32, f32),
    },

    // === Ball Events ===
    /// Ground bounce in flight
    Bounce { impact_speed: f32 },
    /// Flight settled into rolling
    Landed { pos: (f32, f32) },
    /// Ball back on the tee
    BallReset,

    // === Hole Events ===
    /// Ball came to rest in the hole
    Capture { holes: u32, strokes: u32 },
    /// Ball came to rest outside the hole
    Miss { distance: f32 },
    /// Hole relocated after a capture
    HoleMoved { x: f32, z: f32 },

    // === Debug/Tick Events ===
    /// Ball snapshot (sampled)
    Tick {
        frame: u64,
        ball_pos: (f32, f32, f32),
        ball_vel: (f32, f32, f32),
        motion: BallMotion,
    },
}

impl GameEvent {
    /// Get the event type code for compact serialization
    pub fn type_code(&self) -> &'static str {
        match self {
            GameEvent::SessionStart { .. } => "SE",
            GameEvent::Config(_) => "CF",
            GameEvent::ChargeStart => "CS",
            GameEvent::ShotRelease { .. } => "SR",
            GameEvent::Bounce { .. } => "BN",
            GameEvent::Landed { .. } => "LD",
            GameEvent::BallReset => "RB",
            GameEvent::Capture { .. } => "C",
            GameEvent::Miss { .. } => "MI",
            GameEvent::HoleMoved { .. } => "HM",
            GameEvent::Tick { .. } => "T",
        }
    }

    /// Variant name, used by scenario `sequence` expectations
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::SessionStart { .. } => "SessionStart",
            GameEvent::Config(_) => "Config",
            GameEvent::ChargeStart => "ChargeStart",
            GameEvent::ShotRelease { .. } => "ShotRelease",
            GameEvent::Bounce { .. } => "Bounce",
            GameEvent::Landed { .. } => "Landed",
            GameEvent::BallReset => "BallReset",
            GameEvent::Capture { .. } => "Capture",
            GameEvent::Miss { .. } => "Miss",
            GameEvent::HoleMoved { .. } => "HoleMoved",
            GameEvent::Tick { .. } => "Tick",
        }
    }
}
