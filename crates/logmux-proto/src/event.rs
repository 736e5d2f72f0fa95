//! Change notification payload.

use serde::{Deserialize, Serialize};

/// A change notification emitted by the log service.
///
/// Carries the monitored quantity: the number of log bytes currently held by
/// the service's backing buffer. The value is a point-in-time reading taken
/// when the service emitted the event; it is delivered to every local observer
/// active at the moment of delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Log bytes in use at emission time.
    pub used: u64,
}

impl LogEvent {
    /// Create an event for the given used size.
    pub fn new(used: u64) -> Self {
        Self { used }
    }
}
