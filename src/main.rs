//! Minigolf - a first-person putting game built with Bevy
//!
//! Main entry point: app setup and system registration.

use bevy::prelude::*;
use minigolf::{
    CaptureBanner, ConfigWatcher, EventBus, EventLogConfig, EventLogger, GolfSession, HoleRng,
    InitSettings, PhysicsTweaks, SwingInput, camera, config_watcher, constants::*, events, input,
    scoring, session, tuning, ui, world,
};

/// Fixed physics rate; one step matches the decay reference rate
const PHYSICS_HZ: f64 = 60.0;

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let no_evlog = args.iter().any(|a| a == "--no-evlog");

    // Check for --seed <u64> override
    let seed_override = args
        .iter()
        .position(|a| a == "--seed")
        .and_then(|i| args.get(i + 1).and_then(|s| s.parse::<u64>().ok()));

    // Load persistent settings (uses defaults if file doesn't exist)
    let mut settings = InitSettings::load();

    // Save settings on first run to ensure file exists
    if let Err(e) = settings.save() {
        warn!("Failed to save initial settings: {}", e);
    }

    if seed_override.is_some() {
        settings.seed = seed_override;
    }
    let hole_rng = HoleRng::from_seed_option(settings.seed);

    let evlog_config = EventLogConfig {
        enabled: !no_evlog,
        ..default()
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Mini Golf".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
        .insert_resource(settings)
        .insert_resource(hole_rng)
        .insert_resource(EventLogger::new(evlog_config))
        .insert_resource(EventBus::new())
        .init_resource::<PhysicsTweaks>()
        .init_resource::<GolfSession>()
        .init_resource::<SwingInput>()
        .init_resource::<CaptureBanner>()
        .init_resource::<ConfigWatcher>()
        // Tuning must be loaded before the log records it and the course sizes the hole
        .add_systems(
            Startup,
            (
                tuning::load_global_tuning_system,
                (
                    events::start_event_log,
                    world::spawn_course,
                    camera::spawn_camera,
                    ui::spawn_hud,
                    ui::spawn_charge_gauge,
                ),
            )
                .chain(),
        )
        // Input is latched here and consumed by the fixed-step session
        .add_systems(
            Update,
            (
                input::capture_input,
                camera::fly_camera,
                camera::close_on_escape,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                events::sync_event_clock,
                scoring::tick_capture_banner,
                config_watcher::check_config_changes,
            ),
        )
        .add_systems(
            Update,
            (
                world::sync_visuals,
                ui::update_score_text,
                ui::update_banner_text,
                ui::update_charge_gauge,
                events::flush_event_log,
            ),
        )
        .add_systems(FixedUpdate, session::advance_session)
        .run();
}
