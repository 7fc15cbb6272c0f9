//! Minigolf - a single-hole putting game built with Bevy
//!
//! The physics core (ball, hole, shot charge, session) is plain Rust driven
//! by an explicit time step; the Bevy systems around it handle input,
//! rendering, and event logging.

// Core modules
pub mod config_watcher;
pub mod constants;
pub mod events;
pub mod helpers;
pub mod settings;
pub mod simulation;
pub mod testing;
pub mod tuning;

// Game logic modules
pub mod ball;
pub mod camera;
pub mod hole;
pub mod input;
pub mod scoring;
pub mod session;
pub mod shooting;
pub mod ui;
pub mod world;

// Re-export commonly used types for convenience
pub use ball::{Ball, BallMotion, BallStep, BallVisual};
pub use camera::FlyCamera;
pub use config_watcher::ConfigWatcher;
pub use constants::*;
pub use events::{BusEvent, EventBus, EventLogConfig, EventLogger, GameEvent};
pub use helpers::*;
pub use hole::{CourseBounds, Hole, HoleRng};
pub use scoring::{CaptureBanner, Score};
pub use session::{GolfSession, ShotResult};
pub use settings::InitSettings;
pub use shooting::{ShotPhase, SwingAction, SwingInput};
pub use tuning::{DecayModel, PhysicsTweaks};
pub use ui::{BannerText, ChargeGaugeBackground, ChargeGaugeFill, ScoreText};
