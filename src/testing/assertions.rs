//! Event-order and session-state checks for scenario expectations

use super::parser::{ExpectedEvent, StateAssertion};
use crate::session::GolfSession;

/// Tolerance for `==` and `!=` on numeric readings
const EQ_EPSILON: f32 = 0.01;

#[derive(Debug, Clone)]
pub struct AssertionError {
    pub message: String,
    pub expected: String,
    pub actual: String,
}

impl AssertionError {
    fn new(message: String, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            message,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl std::fmt::Display for AssertionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n    Expected: {}\n    Actual: {}",
            self.message, self.expected, self.actual
        )
    }
}

/// An event the runner saw, tagged with the frame it was emitted on
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub frame: u64,
    pub event_type: String,
}

/// Each expected event must appear after the previous match, inside its
/// frame window. Unlisted events in between are ignored.
pub fn check_sequence(
    expected: &[ExpectedEvent],
    captured: &[CapturedEvent],
) -> Result<(), AssertionError> {
    let mut rest = captured;

    for (n, exp) in expected.iter().enumerate().map(|(i, e)| (i + 1, e)) {
        let Some(at) = rest.iter().position(|c| c.event_type == exp.event) else {
            let remaining: Vec<&str> = rest.iter().map(|c| c.event_type.as_str()).collect();
            return Err(AssertionError::new(
                format!("Event #{} '{}' not found", n, exp.event),
                format!("'{}' after event #{}", exp.event, n - 1),
                format!("remaining events: {:?}", remaining),
            ));
        };
        let frame = rest[at].frame;

        let window = (exp.frame_min.unwrap_or(0), exp.frame_max.unwrap_or(u64::MAX));
        if frame < window.0 || frame > window.1 {
            let side = if frame < window.0 { "early" } else { "late" };
            return Err(AssertionError::new(
                format!("Event #{} '{}' on frame {} is too {}", n, exp.event, frame, side),
                format!("frame in {}..={}", window.0, window.1),
                format!("frame {}", frame),
            ));
        }
        rest = &rest[at + 1..];
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cmp {
    Eq,
    Ne,
    Ge,
    Le,
    Gt,
    Lt,
}

impl Cmp {
    /// Longest tokens first so `>=` is not split as `>`
    const TOKENS: [(&'static str, Cmp); 7] = [
        ("==", Cmp::Eq),
        ("!=", Cmp::Ne),
        (">=", Cmp::Ge),
        ("<=", Cmp::Le),
        ("=", Cmp::Eq),
        (">", Cmp::Gt),
        ("<", Cmp::Lt),
    ];

    fn numbers(self, actual: f32, wanted: f32) -> bool {
        match self {
            Cmp::Eq => (actual - wanted).abs() < EQ_EPSILON,
            Cmp::Ne => (actual - wanted).abs() >= EQ_EPSILON,
            Cmp::Ge => actual >= wanted,
            Cmp::Le => actual <= wanted,
            Cmp::Gt => actual > wanted,
            Cmp::Lt => actual < wanted,
        }
    }

    fn names(self, actual: &str, wanted: &str) -> Option<bool> {
        match self {
            Cmp::Eq => Some(actual == wanted),
            Cmp::Ne => Some(actual != wanted),
            _ => None,
        }
    }
}

/// Split `path <op> value`
fn parse_check(check: &str) -> Option<(&str, Cmp, &str)> {
    Cmp::TOKENS.iter().find_map(|&(token, cmp)| {
        let (path, value) = check.split_once(token)?;
        Some((path.trim(), cmp, value.trim()))
    })
}

enum Reading {
    Number(f32),
    Name(&'static str),
}

const KNOWN_PATHS: &str =
    "score.holes, score.strokes, ball.x|y|z|vy|speed|motion, hole.x|z|distance, shot.phase";

fn read(session: &GolfSession, path: &str) -> Option<Reading> {
    let ball = &session.ball;
    let hole = &session.hole;
    let value = match path {
        "score.holes" => Reading::Number(session.score.holes as f32),
        "score.strokes" => Reading::Number(session.score.strokes as f32),
        "ball.x" => Reading::Number(ball.position.x),
        "ball.y" => Reading::Number(ball.position.y),
        "ball.z" => Reading::Number(ball.position.z),
        "ball.vy" => Reading::Number(ball.velocity.y),
        "ball.speed" => Reading::Number(ball.speed()),
        "ball.motion" => Reading::Name(ball.motion.name()),
        "hole.x" => Reading::Number(hole.position.x),
        "hole.z" => Reading::Number(hole.position.z),
        "hole.distance" => Reading::Number(hole.distance_to(ball.position)),
        "shot.phase" => Reading::Name(session.shot.name()),
        _ => return None,
    };
    Some(value)
}

/// Evaluate every `path <op> value` check of one assertion
pub fn check_state(
    assertion: &StateAssertion,
    session: &GolfSession,
) -> Result<(), AssertionError> {
    for check in &assertion.checks {
        let (path, cmp, wanted) = parse_check(check).ok_or_else(|| {
            AssertionError::new(
                format!("Invalid check syntax: {}", check),
                "'path == value' with one of == != >= <= > <",
                check.as_str(),
            )
        })?;
        let reading = read(session, path).ok_or_else(|| {
            AssertionError::new(format!("Unknown check path: {}", path), KNOWN_PATHS, path)
        })?;

        let (pass, actual) = match reading {
            Reading::Number(actual) => {
                let wanted: f32 = wanted.parse().map_err(|_| {
                    AssertionError::new(format!("{} needs a number", path), "number", wanted)
                })?;
                (cmp.numbers(actual, wanted), format!("{:.3}", actual))
            }
            Reading::Name(actual) => {
                let pass = cmp.names(actual, wanted.trim_matches('"')).ok_or_else(|| {
                    AssertionError::new(
                        format!("{} only supports == and !=", path),
                        "== or !=",
                        check.as_str(),
                    )
                })?;
                (pass, actual.to_string())
            }
        };

        if !pass {
            return Err(AssertionError::new(
                format!("Check failed: {} (actual: {})", check, actual),
                check.as_str(),
                actual,
            ));
        }
    }

    Ok(())
}
