//! Test execution engine
//!
//! Drives a `GolfSession` frame by frame with scripted swing input. No Bevy
//! app is involved, so runs are exact and independent of wall time.

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::assertions::{AssertionError, CapturedEvent, check_sequence, check_state};
use super::input::ScriptedInputs;
use super::parser::TestDefinition;
use crate::ball::Ball;
use crate::events::EventBus;
use crate::hole::Hole;
use crate::session::GolfSession;
use crate::tuning::PhysicsTweaks;

/// Hard cap so a runaway scenario still terminates
const MAX_TEST_FRAMES: u64 = 60 * 60 * 10;

/// Result of running a test
#[derive(Debug)]
pub enum TestResult {
    /// Ran to the last frame; `captures` and `misses` count resolved shots
    Pass {
        frames: u64,
        captures: u32,
        misses: u32,
    },
    Fail { error: AssertionError },
    Error { message: String },
}

impl TestResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Pass { .. })
    }
}

/// Build the starting session described by the test setup
fn initial_session(test: &TestDefinition, tweaks: &PhysicsTweaks) -> GolfSession {
    let mut session = GolfSession::default();
    if let Some(hole) = test.setup.hole {
        session.hole = Hole::new(Vec3::new(hole.x, 0.0, hole.z));
    }
    if let Some(def) = &test.setup.ball {
        session.ball = Ball {
            position: Vec3::new(def.x, def.y.unwrap_or(tweaks.ground_height), def.z),
            velocity: Vec3::from_array(def.velocity),
            motion: def.motion,
        };
    }
    session
}

pub fn run_test(test: &TestDefinition) -> TestResult {
    if test.setup.fps <= 0.0 {
        return TestResult::Error {
            message: format!("fps must be positive, got {}", test.setup.fps),
        };
    }

    let tweaks = test.setup.tuning.clone().unwrap_or_default();
    let dt = 1.0 / test.setup.fps;
    let mut session = initial_session(test, &tweaks);
    let mut rng = StdRng::seed_from_u64(test.setup.seed);
    let mut bus = EventBus::new();
    let mut scripted = ScriptedInputs::from_inputs(&test.input);

    let mut state_checks = test.expect.state.clone();
    state_checks.sort_by_key(|s| s.after_frame);

    let final_frame = state_checks
        .iter()
        .map(|s| s.after_frame)
        .chain(test.expect.frames)
        .fold(scripted.max_frame, u64::max);
    if final_frame > MAX_TEST_FRAMES {
        return TestResult::Error {
            message: format!(
                "Scenario asks for {} frames (limit {})",
                final_frame, MAX_TEST_FRAMES
            ),
        };
    }

    let mut captured = Vec::new();
    let mut next_check = 0;
    for frame in 0..=final_frame {
        bus.set_clock(frame as f32 * dt);
        let input = scripted.advance_frame();
        session.update(&input, dt, &tweaks, &mut rng, &mut bus);

        captured.extend(bus.drain().into_iter().map(|e| CapturedEvent {
            frame,
            event_type: e.event.name().to_string(),
        }));

        while next_check < state_checks.len() && state_checks[next_check].after_frame == frame {
            if let Err(error) = check_state(&state_checks[next_check], &session) {
                return TestResult::Fail {
                    error: AssertionError {
                        message: format!("[frame {}] {}", frame, error.message),
                        ..error
                    },
                };
            }
            next_check += 1;
        }
    }

    if let Err(error) = check_sequence(&test.expect.sequence, &captured) {
        return TestResult::Fail { error };
    }

    let count = |name: &str| captured.iter().filter(|e| e.event_type == name).count() as u32;
    TestResult::Pass {
        frames: final_frame,
        captures: count("Capture"),
        misses: count("Miss"),
    }
}
