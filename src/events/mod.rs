//! Game event logging system
//!
//! Provides a compact text format for logging shots, bounces and captures.
//! The session core emits onto the EventBus; the EventLogger writes `.evlog`
//! files, and scenario tests read the bus directly.

mod bus;
mod format;
mod logger;
mod types;

pub use bus::{BusEvent, EventBus, sync_event_clock};
pub use format::{parse_event, serialize_event};
pub use logger::{EventLogConfig, EventLogger, flush_event_log, start_event_log};
pub use types::GameEvent;
