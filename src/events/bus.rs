//! Event Bus - central hub for cross-module communication
//!
//! Systems emit gameplay events to the bus; a drain system serializes and
//! logs them once per frame. The bus can be disabled for headless tests.

use bevy::prelude::*;

use super::types::GameEvent;

/// Timestamped event for the event bus
#[derive(Debug, Clone)]
pub struct BusEvent {
    /// Time in milliseconds since session start
    pub time_ms: u32,
    /// The event data
    pub event: GameEvent,
}

/// Central event bus for cross-module communication
#[derive(Resource, Default)]
pub struct EventBus {
    /// Events emitted this frame, waiting to be drained
    pending: Vec<BusEvent>,

    /// Current elapsed time in milliseconds (for timestamping)
    elapsed_ms: u32,

    /// Whether the bus is enabled (for testing/simulation)
    enabled: bool,
}

impl EventBus {
    /// Create a new enabled event bus
    pub fn new() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Create a disabled event bus (events are dropped)
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Update the elapsed time (called each frame)
    pub fn update_time(&mut self, elapsed_secs: f32) {
        self.elapsed_ms = (elapsed_secs * 1000.0) as u32;
    }

    /// Emit an event to the bus
    pub fn emit(&mut self, event: GameEvent) {
        if !self.enabled {
            return;
        }
        self.pending.push(BusEvent {
            time_ms: self.elapsed_ms,
            event,
        });
    }

    /// Get pending events for consumption (does not drain)
    pub fn peek(&self) -> &[BusEvent] {
        &self.pending
    }

    /// Drain pending events
    pub fn drain(&mut self) -> Vec<BusEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Get the number of pending events
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Check if the bus has any pending events
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Check if the bus is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get current elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

/// System to update the event bus time each frame
pub fn update_event_bus_time(mut bus: ResMut<EventBus>, time: Res<Time>) {
    bus.update_time(time.elapsed_secs());
}

/// Drain the bus and write each event to the log as a compact JSON line
pub fn log_drained_events(mut bus: ResMut<EventBus>) {
    for BusEvent { time_ms, event } in bus.drain() {
        match serde_json::to_string(&event) {
            Ok(json) => info!("[{}ms] {} {}", time_ms, event.type_code(), json),
            Err(e) => warn!("Failed to serialize event: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::Lane;

    #[test]
    fn test_emit_and_drain() {
        let mut bus = EventBus::new();
        bus.update_time(1.5);

        bus.emit(GameEvent::LaneChange {
            from: Lane::Middle,
            to: Lane::Right,
        });

        assert_eq!(bus.pending_count(), 1);
        assert!(bus.has_pending());

        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time_ms, 1500);
        assert_eq!(events[0].event.type_code(), "LC");
        assert_eq!(bus.pending_count(), 0);
    }

    #[test]
    fn test_disabled_bus() {
        let mut bus = EventBus::disabled();
        bus.emit(GameEvent::Jump);
        assert_eq!(bus.pending_count(), 0);
    }

    #[test]
    fn test_death_event_payload() {
        let mut bus = EventBus::new();
        bus.emit(GameEvent::RunnerDeath {
            distance: 4200.0,
            coins: 17,
        });

        let events = bus.drain();
        assert_eq!(events.len(), 1);
        if let GameEvent::RunnerDeath { distance, coins } = &events[0].event {
            assert_eq!(*distance, 4200.0);
            assert_eq!(*coins, 17);
        } else {
            panic!("Wrong event type");
        }
    }
}
