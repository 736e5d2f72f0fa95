//! Logmux client - multiplexing client for the logmux log service.
//!
//! This crate lets any number of local observers watch the remote log
//! service's change notifications while the process holds exactly one
//! subscription to the service, no matter how many observers exist. The
//! remote subscription is created when the first observer registers and torn
//! down when the last one leaves.
//!
//! Remote callbacks arrive on a thread the IPC layer owns; the client
//! re-delivers them on its own dedicated thread, in arrival order, so
//! observer code never runs in the callback context.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use logmux_client::{Client, ClientConfig, LogObserver};
//! use logmux_client::proto::LogEvent;
//!
//! struct Printer;
//!
//! impl LogObserver for Printer {
//!     fn on_event(&self, event: &LogEvent) {
//!         println!("log size changed: {}", event.used);
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // `directory` comes from the platform's IPC layer.
//!     let client = Client::connect(&directory, ClientConfig::default())?;
//!
//!     let printer: Arc<dyn LogObserver> = Arc::new(Printer);
//!     client.register(&printer)?;
//!
//!     println!("{} of {} bytes used", client.used_size()?, client.total_size()?);
//!
//!     client.unregister(&printer)?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod dispatch;
mod error;
mod observer;
mod registry;

#[cfg(test)]
mod testing;

pub use client::Client;
pub use config::ClientConfig;
pub use error::Error;
pub use observer::LogObserver;

/// Re-export interface types.
pub use logmux_proto as proto;
