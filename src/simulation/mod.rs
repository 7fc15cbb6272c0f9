//! Simulation module - headless shot simulation
//!
//! Plays batches of random shots without rendering and reports capture
//! statistics. `HeadlessAppBuilder` wires the same core into a Bevy app.

pub mod app_builder;
pub mod config;
pub mod metrics;
pub mod runner;

pub use app_builder::HeadlessAppBuilder;
pub use config::SimConfig;
pub use metrics::{ShotRecord, SimMetrics};
pub use runner::{run_simulation, simulate_shots};
