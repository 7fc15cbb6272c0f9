//! Scenario files: one TOML document per scripted shot

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::ball::BallMotion;
use crate::tuning::PhysicsTweaks;

/// A whole scenario file
#[derive(Debug, Deserialize)]
pub struct TestDefinition {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub setup: TestSetup,
    #[serde(default)]
    pub input: Vec<FrameInput>,
    #[serde(default)]
    pub expect: TestExpectations,
}

/// Starting conditions; everything is optional
#[derive(Debug, Deserialize)]
pub struct TestSetup {
    /// Hole relocation seed
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_fps")]
    pub fps: f32,
    /// Starting hole position on the ground plane
    pub hole: Option<HoleDef>,
    /// Override the ball's starting state
    pub ball: Option<BallDef>,
    /// Partial tuning table; unset fields keep their defaults
    pub tuning: Option<PhysicsTweaks>,
}

impl Default for TestSetup {
    fn default() -> Self {
        Self {
            seed: 0,
            fps: default_fps(),
            hole: None,
            ball: None,
            tuning: None,
        }
    }
}

fn default_fps() -> f32 {
    60.0
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HoleDef {
    pub x: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BallDef {
    #[serde(default)]
    pub x: f32,
    pub y: Option<f32>,
    #[serde(default)]
    pub z: f32,
    #[serde(default)]
    pub velocity: [f32; 3],
    #[serde(default)]
    pub motion: BallMotion,
}

/// Swing state change at a specific frame
#[derive(Debug, Clone, Deserialize)]
pub struct FrameInput {
    pub frame: u64,
    /// true = press/hold, false = release; unset keeps the current state
    pub swing: Option<bool>,
    /// Aim direction; persists until changed
    pub aim: Option<[f32; 3]>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TestExpectations {
    /// Run at least this many frames
    pub frames: Option<u64>,
    #[serde(default)]
    pub sequence: Vec<ExpectedEvent>,
    /// `[[expect.state]]` tables, each checked once at its frame
    #[serde(default)]
    pub state: Vec<StateAssertion>,
}

/// One `[[expect.sequence]]` entry with an optional frame window
#[derive(Debug, Deserialize)]
pub struct ExpectedEvent {
    pub event: String,
    pub frame_min: Option<u64>,
    pub frame_max: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateAssertion {
    pub after_frame: u64,
    #[serde(default)]
    pub checks: Vec<String>,
}

/// Read and parse, with the path in any error message
pub fn parse_test_file(path: &Path) -> Result<TestDefinition, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    parse_test_str(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

pub fn parse_test_str(content: &str) -> Result<TestDefinition, toml::de::Error> {
    toml::from_str(content)
}
