//! Metrics collection for shot simulation

use serde::{Deserialize, Serialize};

use crate::ball::BallMotion;

/// One simulated shot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotRecord {
    pub power: f32,
    pub motion: BallMotion,
    /// Ground distance from ball to hole when the shot was struck
    pub start_distance: f32,
    pub captured: bool,
    /// Distance from the hole at rest (0 for captures)
    pub miss_distance: f32,
    /// Fixed steps from release to rest
    pub frames: u32,
    pub bounces: u32,
}

/// Aggregate results of a batch run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimMetrics {
    pub shots: u32,
    pub captures: u32,
    pub flight_shots: u32,
    pub timeouts: u32,
    /// Captures / shots (finalized)
    pub capture_rate: f32,
    /// Mean miss distance over missed shots (finalized)
    pub avg_miss_distance: f32,
    /// Mean seconds from release to rest (finalized)
    pub avg_shot_time: f32,
    pub records: Vec<ShotRecord>,
    #[serde(skip)]
    miss_distance_sum: f32,
    #[serde(skip)]
    frames_sum: u64,
}

impl SimMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, shot: ShotRecord) {
        self.shots += 1;
        if shot.captured {
            self.captures += 1;
        } else {
            self.miss_distance_sum += shot.miss_distance;
        }
        if shot.motion == BallMotion::Flight {
            self.flight_shots += 1;
        }
        self.frames_sum += shot.frames as u64;
        self.records.push(shot);
    }

    /// Calculate derived statistics
    pub fn finalize(&mut self, fps: f32) {
        if self.shots == 0 {
            return;
        }
        self.capture_rate = self.captures as f32 / self.shots as f32;
        let misses = self.shots - self.captures;
        if misses > 0 {
            self.avg_miss_distance = self.miss_distance_sum / misses as f32;
        }
        self.avg_shot_time = self.frames_sum as f32 / self.shots as f32 / fps;
    }

    pub fn print_summary(&self) {
        println!("\n=== Shot Simulation ===");
        println!("Shots:          {}", self.shots);
        println!(
            "Captures:       {} ({:.1}%)",
            self.captures,
            self.capture_rate * 100.0
        );
        println!("Flight shots:   {}", self.flight_shots);
        println!("Timeouts:       {}", self.timeouts);
        println!("Avg miss dist:  {:.2}", self.avg_miss_distance);
        println!("Avg shot time:  {:.2}s", self.avg_shot_time);
    }
}
