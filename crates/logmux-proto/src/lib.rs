//! Logmux service interface definitions.
//!
//! This crate defines the surface of the remote log service: the value types
//! that cross the process boundary and the traits the client binds against.
//! It is shared by the client multiplexer (`logmux-client`) and by whatever
//! IPC layer implements the service side.
//!
//! # Modules
//!
//! - [`event`] - Change notification payload
//! - [`service`] - Service and listener traits, query selectors
//! - [`error`] - Remote call error types
//!
//! # Scope
//!
//! The wire format is deliberately absent. A service implementation decides
//! how `LogService` calls travel between processes; this crate only fixes the
//! shape of those calls.

pub mod error;
pub mod event;
pub mod service;

pub use error::Error;

// Re-export commonly used types at crate root
pub use event::LogEvent;
pub use service::{ChangeListener, LogService, ServiceDirectory, StatKind};

/// Well-known registration name of the log service.
///
/// Clients pass this name to [`ServiceDirectory::lookup`] unless configured
/// otherwise.
pub const SERVICE_NAME: &str = "logmux.LogService";
