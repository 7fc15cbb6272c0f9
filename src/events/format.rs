//! Compact text format for game event serialization
//!
//! Format: `T:NNNNN|CODE|data...`
//! - T:NNNNN = timestamp in milliseconds (5 digits, wraps at 99999)
//! - CODE = short event type code
//! - data = pipe-separated values specific to event type
//!
//! Examples:
//! ```text
//! T:00000|SE|5f0c...|20260101_120000
//! T:01200|CS|
//! T:02350|SR|1.15|18.1|F|0.00,0.20,-0.98
//! T:02980|BN|6.42
//! T:03410|LD|0.1,-9.7
//! T:06020|MI|2.31
//! T:06020|RB|
//! ```
//!
//! Tick events (sampled, see `EventLogConfig::tick_sample_ms`):
//! ```text
//! T:00100|T|6|0.00,0.20,-1.50|0.00,0.00,-4.21|R
//!          ^frame|ball_pos|ball_vel|motion
//! ```

use super::types::GameEvent;
use crate::ball::BallMotion;
use crate::tuning::PhysicsTweaks;

fn fmt_xz(pos: (f32, f32)) -> String {
    format!("{:.1},{:.1}", pos.0, pos.1)
}

fn fmt_vec3(v: (f32, f32, f32)) -> String {
    format!("{:.2},{:.2},{:.2}", v.0, v.1, v.2)
}

/// Serialize a GameEvent to compact text format
pub fn serialize_event(time_ms: u32, event: &GameEvent) -> String {
    let ts = format!("T:{:05}", time_ms % 100000);
    let code = event.type_code();

    let data = match event {
        GameEvent::SessionStart {
            session_id,
            timestamp,
        } => format!("{}|{}", session_id, timestamp),
        GameEvent::Config(tweaks) => {
            // Compact JSON so the whole tuning set fits on one line
            serde_json::to_string(tweaks).unwrap_or_else(|_| "{}".to_string())
        }
        GameEvent::ChargeStart => String::new(),
        GameEvent::ShotRelease {
            charge,
            power,
            motion,
            direction,
        } => format!(
            "{:.2}|{:.1}|{}|{}",
            charge,
            power,
            motion.code(),
            fmt_vec3(*direction)
        ),
        GameEvent::Bounce { impact_speed } => format!("{:.2}", impact_speed),
        GameEvent::Landed { pos } => fmt_xz(*pos),
        GameEvent::BallReset => String::new(),
        GameEvent::Capture { holes, strokes } => format!("{}|{}", holes, strokes),
        GameEvent::Miss { distance } => format!("{:.2}", distance),
        GameEvent::HoleMoved { x, z } => format!("{:.2},{:.2}", x, z),
        GameEvent::Tick {
            frame,
            ball_pos,
            ball_vel,
            motion,
        } => format!(
            "{}|{}|{}|{}",
            frame,
            fmt_vec3(*ball_pos),
            fmt_vec3(*ball_vel),
            motion.code()
        ),
    };

    format!("{}|{}|{}", ts, code, data)
}

/// Parse a line back into timestamp and event
pub fn parse_event(line: &str) -> Option<(u32, GameEvent)> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 3 {
        return None;
    }

    let ts_str = parts[0].strip_prefix("T:")?;
    let time_ms: u32 = ts_str.parse().ok()?;

    let code = parts[1];
    let data = &parts[2..];

    let event = match code {
        "SE" if data.len() >= 2 => GameEvent::SessionStart {
            session_id: data[0].to_string(),
            timestamp: data[1].to_string(),
        },
        "CF" => {
            // Rejoin in case the JSON contains '|'
            let tweaks: PhysicsTweaks = serde_json::from_str(&data.join("|")).ok()?;
            GameEvent::Config(tweaks)
        }
        "CS" => GameEvent::ChargeStart,
        "SR" if data.len() >= 4 => GameEvent::ShotRelease {
            charge: data[0].parse().ok()?,
            power: data[1].parse().ok()?,
            motion: parse_motion(data[2])?,
            direction: parse_vec3(data[3])?,
        },
        "BN" => GameEvent::Bounce {
            impact_speed: data[0].parse().ok()?,
        },
        "LD" => GameEvent::Landed {
            pos: parse_xz(data[0])?,
        },
        "RB" => GameEvent::BallReset,
        "C" if data.len() >= 2 => GameEvent::Capture {
            holes: data[0].parse().ok()?,
            strokes: data[1].parse().ok()?,
        },
        "MI" => GameEvent::Miss {
            distance: data[0].parse().ok()?,
        },
        "HM" => {
            let (x, z) = parse_xz(data[0])?;
            GameEvent::HoleMoved { x, z }
        }
        "T" if data.len() >= 4 => GameEvent::Tick {
            frame: data[0].parse().ok()?,
            ball_pos: parse_vec3(data[1])?,
            ball_vel: parse_vec3(data[2])?,
            motion: parse_motion(data[3])?,
        },
        _ => return None,
    };

    Some((time_ms, event))
}

fn parse_motion(s: &str) -> Option<BallMotion> {
    match s {
        "F" => Some(BallMotion::Flight),
        "R" => Some(BallMotion::Rolling),
        _ => None,
    }
}

fn parse_xz(s: &str) -> Option<(f32, f32)> {
    let (x, z) = s.split_once(',')?;
    Some((x.parse().ok()?, z.parse().ok()?))
}

fn parse_vec3(s: &str) -> Option<(f32, f32, f32)> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return None;
    }
    Some((
        parts[0].parse().ok()?,
        parts[1].parse().ok()?,
        parts[2].parse().ok()?,
    ))
}
