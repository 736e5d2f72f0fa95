//! Service and listener traits.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::event::LogEvent;

/// Selector for the read-only quantities the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatKind {
    /// Log bytes currently held by the backing buffer.
    Used,
    /// Capacity of the backing buffer.
    Total,
}

/// Callback registered with the remote service for change delivery.
///
/// The service invokes `on_change` from a context it owns, typically an
/// IPC worker thread. Implementations must not block and must not assume
/// anything about the calling thread; the client's relay satisfies this by
/// enqueueing the event and returning.
pub trait ChangeListener: Send + Sync {
    /// Deliver one change notification.
    fn on_change(&self, event: LogEvent);
}

/// The remote log service surface.
///
/// All operations are synchronous request/response calls into another
/// process. How they travel is up to the implementation; see the crate docs.
pub trait LogService: Send + Sync {
    /// Register `listener` for change notifications.
    ///
    /// The service holds the listener until [`unsubscribe`](Self::unsubscribe)
    /// and invokes it on its own context for every change.
    fn subscribe(&self, listener: Arc<dyn ChangeListener>) -> Result<(), Error>;

    /// Remove a previously registered listener.
    fn unsubscribe(&self, listener: Arc<dyn ChangeListener>) -> Result<(), Error>;

    /// Read one of the service's monitored quantities.
    fn query(&self, kind: StatKind) -> Result<u64, Error>;

    /// Discard the contents of the service's backing buffer.
    fn flush(&self) -> Result<(), Error>;
}

/// Name-based lookup of remote services.
///
/// The directory is the process's window onto whatever service registry the
/// platform provides. Implementations are out of scope for this workspace;
/// tests supply an in-memory one.
pub trait ServiceDirectory {
    /// Resolve `name` to a live service binding, if one is registered.
    fn lookup(&self, name: &str) -> Option<Arc<dyn LogService>>;
}
