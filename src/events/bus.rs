//! Shot event queue
//!
//! `GolfSession` pushes events while it steps. Whoever owns the frame takes
//! them: the event log in the game and headless app, the scenario runner and
//! the batch simulator elsewhere.

use bevy::prelude::*;

use super::types::GameEvent;

/// An event stamped with the session clock
#[derive(Debug, Clone, PartialEq)]
pub struct BusEvent {
    pub time_ms: u32,
    pub event: GameEvent,
}

/// Events emitted since the last drain
#[derive(Resource, Debug, Default)]
pub struct EventBus {
    queue: Vec<BusEvent>,
    clock_ms: u32,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp later events with `secs` since session start
    pub fn set_clock(&mut self, secs: f32) {
        self.clock_ms = (secs.max(0.0) * 1000.0) as u32;
    }

    pub fn clock_ms(&self) -> u32 {
        self.clock_ms
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.queue.push(BusEvent {
            time_ms: self.clock_ms,
            event,
        });
    }

    pub fn drain(&mut self) -> Vec<BusEvent> {
        std::mem::take(&mut self.queue)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Keep the bus clock on the app's elapsed time
pub fn sync_event_clock(time: Res<Time>, mut bus: ResMut<EventBus>) {
    bus.set_clock(time.elapsed_secs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_carry_clock_at_emit() {
        let mut bus = EventBus::new();
        bus.set_clock(0.25);
        bus.emit(GameEvent::ChargeStart);
        bus.set_clock(1.5);
        bus.emit(GameEvent::Capture {
            holes: 1,
            strokes: 2,
        });
        assert_eq!(bus.len(), 2);

        let times: Vec<u32> = bus.drain().iter().map(|e| e.time_ms).collect();
        assert_eq!(times, vec![250, 1500]);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_negative_clock_clamps_to_zero() {
        let mut bus = EventBus::new();
        bus.set_clock(-3.0);
        bus.emit(GameEvent::BallReset);
        assert_eq!(bus.drain()[0].time_ms, 0);
    }
}
