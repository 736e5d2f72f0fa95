//! Local observer capability.

use logmux_proto::LogEvent;

/// A local observer of log service change events.
///
/// Observers are registered as `Arc<dyn LogObserver>` and identified by the
/// `Arc`'s allocation: clones of the same `Arc` count as one registration,
/// and registering the same allocation twice is a no-op.
///
/// `on_event` runs on the client's delivery thread, serialized with every
/// other delivery. It should return promptly; a slow observer delays each
/// event behind it for all observers.
pub trait LogObserver: Send + Sync {
    /// Handle one change notification.
    fn on_event(&self, event: &LogEvent);
}
