//! Logmux client API.
//!
//! This module provides the main `Client` struct: the one object a process
//! needs in order to observe and query the remote log service.

use std::fmt;
use std::sync::Arc;

use logmux_proto::{ChangeListener, LogService, ServiceDirectory, StatKind};

use crate::config::ClientConfig;
use crate::dispatch::EventDispatcher;
use crate::error::Error;
use crate::observer::LogObserver;
use crate::registry::ObserverRegistry;

/// A client for the remote log service.
///
/// Construct one per process (or per test context) with [`Client::connect`];
/// the client binds to the service exactly once and never rebinds. Any number
/// of observers can then be registered; the client keeps exactly one remote
/// subscription alive while at least one observer is present, and none
/// otherwise.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use logmux_client::{Client, ClientConfig, LogObserver};
///
/// let client = Client::connect(&directory, ClientConfig::default())?;
///
/// let watcher: Arc<dyn LogObserver> = Arc::new(MyWatcher);
/// client.register(&watcher)?;
/// // ... events arrive on the client's delivery thread ...
/// client.unregister(&watcher)?;
/// ```
pub struct Client {
    service: Arc<dyn LogService>,
    registry: Arc<ObserverRegistry>,
    relay: Arc<dyn ChangeListener>,
    config: ClientConfig,
    // Keeps the delivery thread alive; shut down and joined on drop.
    _dispatcher: EventDispatcher,
}

impl Client {
    /// Bind to the log service and start the delivery thread.
    ///
    /// Returns [`Error::Binding`] if the directory has no service registered
    /// under `config.service_name`; no partially usable client is produced.
    pub fn connect(directory: &dyn ServiceDirectory, config: ClientConfig) -> Result<Self, Error> {
        tracing::debug!(
            service = %config.service_name,
            client_id = %config.client_id,
            "binding log service"
        );
        let service = directory
            .lookup(&config.service_name)
            .ok_or_else(|| Error::Binding(config.service_name.clone()))?;

        let registry = Arc::new(ObserverRegistry::new(Arc::clone(&service)));
        let dispatcher = EventDispatcher::start(Arc::clone(&registry));
        let relay = dispatcher.relay();

        Ok(Self {
            service,
            registry,
            relay,
            config,
            _dispatcher: dispatcher,
        })
    }

    /// Register an observer for change notifications.
    ///
    /// The first observer triggers the remote subscription. Registering an
    /// observer twice is a warning-logged no-op, and a failed remote
    /// subscribe is rolled back before the error is returned.
    pub fn register(&self, observer: &Arc<dyn LogObserver>) -> Result<(), Error> {
        self.registry.register(observer, &self.relay)
    }

    /// Unregister a previously registered observer.
    ///
    /// Removing the last observer tears the remote subscription down.
    pub fn unregister(&self, observer: &Arc<dyn LogObserver>) -> Result<(), Error> {
        self.registry.unregister(observer)
    }

    /// Log bytes currently held by the service.
    pub fn used_size(&self) -> Result<u64, Error> {
        Ok(self.service.query(StatKind::Used)?)
    }

    /// Capacity of the service's backing buffer.
    pub fn total_size(&self) -> Result<u64, Error> {
        Ok(self.service.query(StatKind::Total)?)
    }

    /// Discard the contents of the service's backing buffer.
    pub fn flush(&self) -> Result<(), Error> {
        Ok(self.service.flush()?)
    }

    /// Number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.registry.len()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("service_name", &self.config.service_name)
            .field("client_id", &self.config.client_id)
            .field("observers", &self.registry.len())
            .finish()
    }
}
