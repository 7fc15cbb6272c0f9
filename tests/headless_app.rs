//! Plays a shot through the full headless Bevy schedule and reads back the
//! event log it writes

use bevy::prelude::*;
use minigolf::events::parse_event;
use minigolf::simulation::HeadlessAppBuilder;
use minigolf::{EventLogConfig, GameEvent, GolfSession, PhysicsTweaks, ShotPhase, SwingInput};

#[test]
fn tap_in_is_captured_and_logged() {
    let dir = std::env::temp_dir().join(format!("minigolf_headless_{}", uuid::Uuid::new_v4()));
    let mut app = HeadlessAppBuilder::new()
        .with_seed(7)
        .with_tweaks(PhysicsTweaks::default())
        .with_hole(Vec3::new(0.0, 0.0, -0.55))
        .with_event_log(EventLogConfig {
            log_dir: dir.clone(),
            ..default()
        })
        .with_minimal_threads()
        .build();

    // Press and release inside one step: minimum power, rolling straight ahead
    *app.world_mut().resource_mut::<SwingInput>() = SwingInput {
        pressed: true,
        released: true,
        aim: Vec3::NEG_Z,
        ..default()
    };
    for _ in 0..400 {
        app.update();
    }

    let session = app.world().resource::<GolfSession>();
    assert_eq!(session.score.holes, 1);
    assert_eq!(session.score.strokes, 1);
    assert_eq!(session.shot, ShotPhase::Idle);
    assert_ne!(session.hole.position, Vec3::new(0.0, 0.0, -0.55));

    let log = std::fs::read_dir(&dir)
        .expect("log dir")
        .flatten()
        .find(|e| e.path().extension().is_some_and(|x| x == "evlog"))
        .expect("evlog file");
    let content = std::fs::read_to_string(log.path()).expect("readable log");
    let events: Vec<GameEvent> = content
        .lines()
        .filter_map(parse_event)
        .map(|(_, event)| event)
        .collect();

    assert!(matches!(events[0], GameEvent::SessionStart { .. }));
    assert!(matches!(events[1], GameEvent::Config(_)));
    let names: Vec<&str> = events
        .iter()
        .map(|e| e.name())
        .filter(|n| *n != "Tick")
        .collect();
    assert_eq!(
        &names[2..],
        &["ChargeStart", "ShotRelease", "Capture", "HoleMoved", "BallReset"]
    );
    assert!(events.iter().any(|e| matches!(e, GameEvent::Tick { .. })));

    let _ = std::fs::remove_dir_all(&dir);
}
