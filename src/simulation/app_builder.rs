//! Headless App Builder
//!
//! Builds a Bevy app with the gameplay core and the event log but no window,
//! input devices or rendering. Swing input is written straight into the
//! `SwingInput` resource.

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use std::time::Duration;

use crate::events::{
    EventBus, EventLogConfig, EventLogger, flush_event_log, start_event_log, sync_event_clock,
};
use crate::hole::{Hole, HoleRng};
use crate::scoring::{CaptureBanner, tick_capture_banner};
use crate::session::{GolfSession, advance_session};
use crate::shooting::SwingInput;
use crate::tuning::{self, PhysicsTweaks};

/// Builder for creating headless Bevy apps
pub struct HeadlessAppBuilder {
    fps: f32,
    seed: Option<u64>,
    hole: Option<Vec3>,
    tweaks: Option<PhysicsTweaks>,
    event_log: EventLogConfig,
    minimal_threads: bool,
}

impl Default for HeadlessAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessAppBuilder {
    pub fn new() -> Self {
        Self {
            fps: 60.0,
            seed: None,
            hole: None,
            tweaks: None,
            event_log: EventLogConfig {
                enabled: false,
                ..default()
            },
            minimal_threads: false,
        }
    }

    /// Set the fixed step rate (default: 60)
    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    /// Seed hole relocation
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start with the hole somewhere other than its spawn
    pub fn with_hole(mut self, position: Vec3) -> Self {
        self.hole = Some(position);
        self
    }

    /// Use these tweaks instead of loading the global tuning file
    pub fn with_tweaks(mut self, tweaks: PhysicsTweaks) -> Self {
        self.tweaks = Some(tweaks);
        self
    }

    /// Write a `.evlog` file like the game does (off by default)
    pub fn with_event_log(mut self, config: EventLogConfig) -> Self {
        self.event_log = config;
        self
    }

    /// Enable minimal thread mode (task pools = 1)
    pub fn with_minimal_threads(mut self) -> Self {
        self.minimal_threads = true;
        self
    }

    /// Build the app with minimal plugins and the session core.
    ///
    /// Time advances by exactly one frame per `app.update()`, and FixedUpdate
    /// runs at the same rate, so one update is one session step. The bus is
    /// drained into the event log every update whether or not a file is open.
    pub fn build(self) -> App {
        let mut app = App::new();
        let frame = Duration::from_secs_f32(1.0 / self.fps);

        if self.minimal_threads {
            app.add_plugins(
                MinimalPlugins
                    .set(ScheduleRunnerPlugin::run_loop(frame))
                    .set(TaskPoolPlugin {
                        task_pool_options: TaskPoolOptions::with_num_threads(1),
                    }),
            );
        } else {
            app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(frame)));
        }

        app.insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(frame));
        app.insert_resource(Time::<Fixed>::from_duration(frame));

        let tweaks = match self.tweaks {
            Some(tweaks) => tweaks,
            None => {
                let mut tweaks = PhysicsTweaks::default();
                let _ = tuning::apply_global_tuning(&mut tweaks);
                tweaks
            }
        };
        app.insert_resource(tweaks);

        let hole = self.hole.map(Hole::new).unwrap_or_default();
        app.insert_resource(GolfSession::new(hole));
        app.insert_resource(HoleRng::from_seed_option(self.seed));
        app.insert_resource(EventBus::new());
        app.insert_resource(EventLogger::new(self.event_log));
        app.init_resource::<SwingInput>();
        app.init_resource::<CaptureBanner>();

        app.add_systems(Startup, start_event_log);
        app.add_systems(FixedUpdate, advance_session);
        app.add_systems(
            Update,
            (sync_event_clock, tick_capture_banner, flush_event_log).chain(),
        );

        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_app() {
        let app = HeadlessAppBuilder::new().with_seed(1).build();
        assert!(app.world().contains_resource::<GolfSession>());
        assert!(app.world().contains_resource::<PhysicsTweaks>());
        assert!(app.world().contains_resource::<HoleRng>());
        assert!(app.world().contains_resource::<EventBus>());
    }

    #[test]
    fn test_minimal_threads_creates_app() {
        let app = HeadlessAppBuilder::new().with_minimal_threads().build();
        assert!(app.world().contains_resource::<SwingInput>());
    }

    #[test]
    fn test_tap_through_schedule_counts_stroke() {
        let mut app = HeadlessAppBuilder::new()
            .with_seed(2)
            .with_tweaks(PhysicsTweaks::default())
            .with_hole(Vec3::new(3.0, 0.0, -6.0))
            .build();

        *app.world_mut().resource_mut::<SwingInput>() = SwingInput {
            pressed: true,
            released: true,
            aim: Vec3::NEG_Z,
            ..default()
        };
        for _ in 0..30 {
            app.update();
        }

        let session = app.world().resource::<GolfSession>();
        assert_eq!(session.score.strokes, 1);
        let input = app.world().resource::<SwingInput>();
        assert!(!input.pressed && !input.released);
    }

    #[test]
    fn test_bus_is_drained_every_update() {
        let mut app = HeadlessAppBuilder::new()
            .with_tweaks(PhysicsTweaks::default())
            .with_hole(Vec3::new(0.0, 0.0, -6.0))
            .build();

        *app.world_mut().resource_mut::<SwingInput>() = SwingInput {
            pressed: true,
            released: true,
            aim: Vec3::NEG_Z,
            ..default()
        };
        for _ in 0..300 {
            app.update();
            assert!(app.world().resource::<EventBus>().is_empty());
        }
        assert_eq!(app.world().resource::<GolfSession>().score.strokes, 1);
    }
}
