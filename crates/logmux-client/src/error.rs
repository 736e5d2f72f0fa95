//! Client error types.

use thiserror::Error;

/// Client errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The remote service could not be located at construction.
    #[error("failed to bind log service [{0}]")]
    Binding(String),

    /// A call to the remote service failed.
    #[error("remote call error: {0}")]
    Remote(#[from] logmux_proto::Error),
}
