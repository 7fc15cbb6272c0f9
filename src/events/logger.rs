//! Event logger writing `.evlog` session files

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use uuid::Uuid;

use super::bus::EventBus;
use super::format::serialize_event;
use super::types::GameEvent;
use crate::session::GolfSession;
use crate::tuning::PhysicsTweaks;

/// Where and how densely a session is logged
#[derive(Resource, Clone)]
pub struct EventLogConfig {
    pub log_dir: PathBuf,
    /// Off entirely with `--no-evlog`
    pub enabled: bool,
    /// Minimum gap between sampled Tick lines; 0 turns ticks off
    pub tick_sample_ms: u32,
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            enabled: true,
            tick_sample_ms: 100,
        }
    }
}

/// Writes one `.evlog` per session; inert until `open` succeeds
#[derive(Resource)]
pub struct EventLogger {
    config: EventLogConfig,
    out: Option<BufWriter<File>>,
    session_id: String,
    next_tick_ms: u32,
    ticks: u64,
}

fn create_log(dir: &Path, name: &str) -> io::Result<(PathBuf, BufWriter<File>)> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(name);
    let file = File::create(&path)?;
    Ok((path, BufWriter::new(file)))
}

impl EventLogger {
    pub fn new(config: EventLogConfig) -> Self {
        Self {
            config,
            out: None,
            session_id: String::new(),
            next_tick_ms: 0,
            ticks: 0,
        }
    }

    /// Start `<log_dir>/<timestamp>_<id8>.evlog` with its SessionStart line
    pub fn open(&mut self, timestamp: &str) {
        if !self.config.enabled {
            return;
        }

        let id = Uuid::new_v4().to_string();
        let name = format!("{}_{}.evlog", timestamp, &id[..8]);
        match create_log(&self.config.log_dir, &name) {
            Ok((path, out)) => {
                info!("Event log: {}", path.display());
                self.out = Some(out);
                self.next_tick_ms = 0;
                self.ticks = 0;
                self.write(
                    0,
                    &GameEvent::SessionStart {
                        session_id: id.clone(),
                        timestamp: timestamp.to_string(),
                    },
                );
                self.session_id = id;
            }
            Err(e) => warn!("Event log disabled, cannot create {}: {}", name, e),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn is_open(&self) -> bool {
        self.out.is_some()
    }

    pub fn write(&mut self, time_ms: u32, event: &GameEvent) {
        if let Some(out) = self.out.as_mut()
            && let Err(e) = writeln!(out, "{}", serialize_event(time_ms, event))
        {
            warn!("Event log write failed: {}", e);
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut()
            && let Err(e) = out.flush()
        {
            warn!("Event log flush failed: {}", e);
        }
    }

    /// Next Tick frame number if a sample is due at `now_ms`
    fn take_tick(&mut self, now_ms: u32) -> Option<u64> {
        let gap = self.config.tick_sample_ms;
        if gap == 0 || !self.is_open() || now_ms < self.next_tick_ms {
            return None;
        }
        self.next_tick_ms = now_ms.saturating_add(gap);
        self.ticks += 1;
        Some(self.ticks)
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new(EventLogConfig::default())
    }
}

/// Startup system: open the session log and record the tuning in effect
pub fn start_event_log(mut logger: ResMut<EventLogger>, tweaks: Res<PhysicsTweaks>) {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    logger.open(&timestamp);
    logger.write(0, &GameEvent::Config(tweaks.clone()));
    logger.flush();
}

/// Drain the bus into the log, sampling a ball Tick while a shot is live
pub fn flush_event_log(
    session: Res<GolfSession>,
    mut bus: ResMut<EventBus>,
    mut logger: ResMut<EventLogger>,
) {
    if session.shot.in_motion()
        && let Some(frame) = logger.take_tick(bus.clock_ms())
    {
        let ball = &session.ball;
        bus.emit(GameEvent::Tick {
            frame,
            ball_pos: ball.position.into(),
            ball_vel: ball.velocity.into(),
            motion: ball.motion,
        });
    }

    let events = bus.drain();
    if events.is_empty() {
        return;
    }
    for event in &events {
        logger.write(event.time_ms, &event.event);
    }
    logger.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::parse_event;

    #[test]
    fn test_session_file_starts_with_session_and_config() {
        let dir = std::env::temp_dir().join(format!("minigolf_evlog_{}", Uuid::new_v4()));
        let mut logger = EventLogger::new(EventLogConfig {
            log_dir: dir.clone(),
            ..default()
        });
        logger.open("20260101_000000");
        logger.write(0, &GameEvent::Config(PhysicsTweaks::default()));
        logger.write(1200, &GameEvent::ChargeStart);
        logger.flush();
        assert!(logger.is_open());
        assert_eq!(logger.session_id().len(), 36);

        let entry = std::fs::read_dir(&dir).unwrap().next().unwrap().unwrap();
        let name = entry.file_name().to_string_lossy().to_string();
        assert!(name.starts_with("20260101_000000_"));
        assert!(name.ends_with(".evlog"));

        let content = std::fs::read_to_string(entry.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("T:00000|SE|"));
        assert!(matches!(
            parse_event(lines[1]),
            Some((0, GameEvent::Config(_)))
        ));
        assert_eq!(lines[2], "T:01200|CS|");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let mut logger = EventLogger::new(EventLogConfig {
            enabled: false,
            ..default()
        });
        logger.open("20260101_000000");
        assert!(!logger.is_open());
        assert_eq!(logger.take_tick(10_000), None);
    }

    #[test]
    fn test_ticks_sampled_at_configured_gap() {
        let dir = std::env::temp_dir().join(format!("minigolf_evlog_{}", Uuid::new_v4()));
        let mut logger = EventLogger::new(EventLogConfig {
            log_dir: dir.clone(),
            tick_sample_ms: 100,
            ..default()
        });
        logger.open("20260101_000000");

        let sampled: Vec<u64> = [0, 50, 100, 150, 250, 260]
            .into_iter()
            .filter_map(|ms| logger.take_tick(ms))
            .collect();
        assert_eq!(sampled, vec![1, 2, 3]);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
