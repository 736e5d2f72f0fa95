//! Remote call error types.

use thiserror::Error;

/// Errors reported by remote log service calls.
///
/// Every operation on [`LogService`](crate::LogService) is a synchronous
/// request/response exchange: it either returns or fails with one of these.
/// Calls are never retried by the client.
#[derive(Debug, Error)]
pub enum Error {
    /// The IPC transport failed while performing the call.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service received the call but rejected it.
    #[error("service error: {0}")]
    Service(String),
}
