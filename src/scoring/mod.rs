//! Scoring module - hole and stroke counts, capture banner

use bevy::prelude::*;

use crate::constants::CAPTURE_BANNER_TIME;

/// Session score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub holes: u32,   // Holes sunk
    pub strokes: u32, // Shots released
}

/// Transient on-screen message shown after a capture
#[derive(Resource, Debug, Clone, Default)]
pub struct CaptureBanner {
    pub message: String,
    pub timer: f32, // Time remaining on screen
}

impl CaptureBanner {
    pub fn show(&mut self, holes: u32) {
        self.message = format!("HOLE #{}! Hole moved.", holes);
        self.timer = CAPTURE_BANNER_TIME;
    }

    pub fn is_visible(&self) -> bool {
        self.timer > 0.0
    }

    pub fn tick(&mut self, dt: f32) {
        if self.timer <= 0.0 {
            return;
        }
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.timer = 0.0;
            self.message.clear();
        }
    }
}

/// Count down the capture banner
pub fn tick_capture_banner(time: Res<Time>, mut banner: ResMut<CaptureBanner>) {
    banner.tick(time.delta_secs());
}
