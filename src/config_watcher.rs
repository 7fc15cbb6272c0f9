//! Config file auto-reload system
//!
//! Polls the tuning file every few seconds and reloads when modified.

use bevy::prelude::*;
use std::fs;
use std::time::SystemTime;

use crate::tuning::{GAMEPLAY_TUNING_FILE, PhysicsTweaks, load_gameplay_tuning_from_file};

/// How often to check for config changes (seconds)
const CHECK_INTERVAL: f32 = 2.0;

/// Tracks the tuning file's modification time for hot-reload
#[derive(Resource)]
pub struct ConfigWatcher {
    /// Time since last check
    pub timer: f32,
    pub tuning_mtime: Option<SystemTime>,
}

impl Default for ConfigWatcher {
    fn default() -> Self {
        Self {
            timer: 0.0,
            tuning_mtime: get_mtime(GAMEPLAY_TUNING_FILE),
        }
    }
}

/// Get file modification time, or None if file doesn't exist
fn get_mtime(path: &str) -> Option<SystemTime> {
    fs::metadata(path).ok().and_then(|m| m.modified().ok())
}

/// Reload `PhysicsTweaks` when the tuning file changes.
/// A file that fails to parse keeps the current values.
pub fn check_config_changes(
    time: Res<Time>,
    mut watcher: ResMut<ConfigWatcher>,
    mut tweaks: ResMut<PhysicsTweaks>,
) {
    watcher.timer += time.delta_secs();
    if watcher.timer < CHECK_INTERVAL {
        return;
    }
    watcher.timer = 0.0;

    let mtime = get_mtime(GAMEPLAY_TUNING_FILE);
    if mtime == watcher.tuning_mtime {
        return;
    }
    watcher.tuning_mtime = mtime;

    if mtime.is_none() {
        return;
    }
    match load_gameplay_tuning_from_file(GAMEPLAY_TUNING_FILE) {
        Ok(tuning) => {
            *tweaks = tuning;
            info!("Auto-reloaded tuning from {}", GAMEPLAY_TUNING_FILE);
        }
        Err(err) => warn!("{}, keeping current tuning", err),
    }
}
