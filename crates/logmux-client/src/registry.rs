//! Thread-safe observer registry with lazy remote (un)subscription.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use logmux_proto::{ChangeListener, LogService};

use crate::error::Error;
use crate::observer::LogObserver;

/// Registry of local observers.
///
/// One mutex makes "check size, mutate the set, issue the remote call" a
/// single atomic unit, so two concurrent calls can never both observe an
/// empty registry and both subscribe (or both unsubscribe). The remote
/// subscription is created on the transition to one observer and torn down on
/// the transition back to none; the retained listener doubles as the
/// subscription handle passed back to the service.
pub struct ObserverRegistry {
    service: Arc<dyn LogService>,
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    /// Observers keyed by `Arc` data-pointer identity.
    observers: HashMap<usize, Arc<dyn LogObserver>>,
    /// Listener registered with the remote service; `Some` iff the remote
    /// subscription is live.
    remote: Option<Arc<dyn ChangeListener>>,
}

/// Identity of an observer registration: the `Arc` allocation address.
fn observer_id(observer: &Arc<dyn LogObserver>) -> usize {
    Arc::as_ptr(observer) as *const () as usize
}

impl ObserverRegistry {
    /// Create an empty registry over the given service binding.
    pub fn new(service: Arc<dyn LogService>) -> Self {
        Self {
            service,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Add an observer.
    ///
    /// Registering an observer that is already present logs a warning and
    /// returns `Ok`. Adding the first observer registers the relay listener
    /// with the remote service; if that call fails, the observer is rolled
    /// back out of the registry before the error is returned, so a failed
    /// `register` leaves nothing behind.
    pub fn register(
        &self,
        observer: &Arc<dyn LogObserver>,
        relay: &Arc<dyn ChangeListener>,
    ) -> Result<(), Error> {
        let mut inner = self.inner.lock();
        let id = observer_id(observer);

        if inner.observers.contains_key(&id) {
            tracing::warn!(observer = id, "already registered");
            return Ok(());
        }

        let first = inner.observers.is_empty();
        inner.observers.insert(id, Arc::clone(observer));
        tracing::debug!(observer = id, "registered local observer");

        // `remote` can still be `Some` here if a previous unsubscribe call
        // failed; the service then still holds the listener, so no second
        // subscribe call is issued.
        if first && inner.remote.is_none() {
            tracing::debug!("registering remote listener");
            if let Err(e) = self.service.subscribe(Arc::clone(relay)) {
                inner.observers.remove(&id);
                return Err(e.into());
            }
            inner.remote = Some(Arc::clone(relay));
        }

        Ok(())
    }

    /// Remove an observer.
    ///
    /// Removing an observer that is not present logs a warning; the emptiness
    /// check below still runs. When the registry empties while a remote
    /// subscription is live, the listener is unregistered from the service.
    /// If that call fails the local removal stands, the listener stays
    /// retained, and the error is returned; a later call that finds the
    /// registry empty retries the remote unsubscribe.
    pub fn unregister(&self, observer: &Arc<dyn LogObserver>) -> Result<(), Error> {
        let mut inner = self.inner.lock();
        let id = observer_id(observer);

        if inner.observers.remove(&id).is_none() {
            tracing::warn!(observer = id, "not registered");
        } else {
            tracing::debug!(observer = id, "unregistered local observer");
        }

        if inner.observers.is_empty() {
            if let Some(relay) = inner.remote.clone() {
                tracing::debug!("unregistering remote listener");
                self.service.unsubscribe(relay)?;
                inner.remote = None;
            }
        }

        Ok(())
    }

    /// Snapshot of the current observers, taken under the registry lock.
    ///
    /// Dispatch iterates the snapshot, never the live map, so deliveries do
    /// not contend with registration beyond the copy itself.
    pub fn snapshot(&self) -> Vec<Arc<dyn LogObserver>> {
        self.inner.lock().observers.values().cloned().collect()
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.inner.lock().observers.len()
    }

    /// Whether the remote subscription is currently held.
    #[cfg(test)]
    pub fn is_subscribed(&self) -> bool {
        self.inner.lock().remote.is_some()
    }
}
