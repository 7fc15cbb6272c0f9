//! Batch shot runner driving `GolfSession` without a Bevy app

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SimConfig;
use super::metrics::{ShotRecord, SimMetrics};
use crate::ball::BallMotion;
use crate::events::{EventBus, GameEvent};
use crate::helpers::ground_xz;
use crate::session::{GolfSession, ShotResult};
use crate::shooting::SwingInput;
use crate::tuning::{self, PhysicsTweaks};

/// Load tuning, play the batch, print and optionally save the metrics
pub fn run_simulation(config: SimConfig) -> SimMetrics {
    let tweaks = match &config.tuning_file {
        Some(path) => tuning::load_gameplay_tuning_from_file(path),
        None => tuning::load_gameplay_tuning_from_file(tuning::GAMEPLAY_TUNING_FILE),
    }
    .unwrap_or_else(|err| {
        eprintln!("Warning: {}, using default tuning", err);
        PhysicsTweaks::default()
    });

    let seed = config.seed.unwrap_or_else(rand::random);
    if !config.quiet {
        println!("Simulating {} shots (seed {})", config.shots, seed);
    }

    let metrics = simulate_shots(&config, &tweaks, seed);

    if !config.quiet {
        for (i, shot) in metrics.records.iter().enumerate() {
            println!(
                "#{:<4} {:>5.1} {:<7} from {:>5.2}  {}",
                i + 1,
                shot.power,
                shot.motion.name(),
                shot.start_distance,
                if shot.captured {
                    "HOLE".to_string()
                } else {
                    format!("miss {:.2}", shot.miss_distance)
                }
            );
        }
    }
    metrics.print_summary();

    if let Some(path) = &config.output_file {
        match serde_json::to_string_pretty(&metrics) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => println!("Metrics written to {}", path),
                Err(e) => eprintln!("Failed to write {}: {}", path, e),
            },
            Err(e) => eprintln!("Failed to serialize metrics: {}", e),
        }
    }

    metrics
}

/// Play `config.shots` random shots: aim at the hole with some spread and a
/// random charge. Fully determined by `seed`.
pub fn simulate_shots(config: &SimConfig, tweaks: &PhysicsTweaks, seed: u64) -> SimMetrics {
    let mut metrics = SimMetrics::new();
    if let Err(err) = config.validate() {
        warn!("{}, nothing simulated", err);
        return metrics;
    }

    let mut shot_rng = StdRng::seed_from_u64(seed);
    let mut hole_rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let mut session = GolfSession::default();
    let mut bus = EventBus::new();

    let dt = 1.0 / config.fps;
    let spread = config.aim_spread_deg.abs();
    let max_hold = (tweaks.charge_time * config.fps).max(0.0) as u32;
    let max_frames = (config.shot_timeout * config.fps) as u32;

    for _ in 0..config.shots {
        let to_hole = ground_xz(session.hole.position - session.ball.position);
        let angle = to_hole.y.atan2(to_hole.x) + shot_rng.gen_range(-spread..=spread).to_radians();
        let aim = Vec3::new(angle.cos(), 0.0, angle.sin());
        let hold_frames = shot_rng.gen_range(0..=max_hold);
        let start_distance = session.hole.distance_to(session.ball.position);

        let mut input = SwingInput {
            pressed: true,
            held: true,
            aim,
            ..default()
        };
        session.update(&input, dt, tweaks, &mut hole_rng, &mut bus);
        input.consume_edges();
        for _ in 0..hold_frames {
            session.update(&input, dt, tweaks, &mut hole_rng, &mut bus);
        }
        input.held = false;
        input.released = true;

        let mut frames = 0;
        let mut result = None;
        while frames < max_frames {
            frames += 1;
            result = session.update(&input, dt, tweaks, &mut hole_rng, &mut bus);
            input.consume_edges();
            if result.is_some() {
                break;
            }
        }

        let mut record = ShotRecord {
            power: 0.0,
            motion: BallMotion::Rolling,
            start_distance,
            captured: false,
            miss_distance: 0.0,
            frames,
            bounces: 0,
        };
        for event in bus.drain() {
            match event.event {
                GameEvent::ShotRelease { power, motion, .. } => {
                    record.power = power;
                    record.motion = motion;
                }
                GameEvent::Bounce { .. } => record.bounces += 1,
                _ => {}
            }
        }

        match result {
            Some(ShotResult::Captured { .. }) => record.captured = true,
            Some(ShotResult::Missed { distance }) => record.miss_distance = distance,
            None => {
                warn!("Shot still moving after {:.0}s, resetting", config.shot_timeout);
                metrics.timeouts += 1;
                record.miss_distance = session.hole.distance_to(session.ball.position);
                session.abandon_shot();
            }
        }
        metrics.record(record);
    }

    metrics.finalize(config.fps);
    metrics
}
