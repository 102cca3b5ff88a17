//! Event system - typed gameplay events and the frame-drained bus

mod bus;
mod types;

pub use bus::{BusEvent, EventBus, log_drained_events, update_event_bus_time};
pub use types::GameEvent;
