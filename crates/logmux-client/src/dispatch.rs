//! Event dispatch onto a dedicated delivery thread.
//!
//! Remote change callbacks arrive on whatever thread the IPC layer owns, and
//! observer code must not run there: the callback context carries re-entrancy
//! and blocking restrictions the client cannot impose on arbitrary observers.
//! [`EventDispatcher`] owns one named thread and an unbounded queue feeding
//! it; every event is re-delivered on that thread, in arrival order, one at a
//! time.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use logmux_proto::{ChangeListener, LogEvent};

use crate::registry::ObserverRegistry;

/// Messages consumed by the delivery thread.
enum DeliveryMsg {
    Deliver(LogEvent),
    Shutdown,
}

/// Owns the delivery thread and the queue feeding it.
pub struct EventDispatcher {
    sender: mpsc::Sender<DeliveryMsg>,
    handle: Option<JoinHandle<()>>,
}

impl EventDispatcher {
    /// Spawn the delivery thread over `registry`.
    pub fn start(registry: Arc<ObserverRegistry>) -> Self {
        let (tx, rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("logmux-dispatch".into())
            .spawn(move || delivery_loop(registry, rx))
            .expect("failed to spawn dispatch thread");

        Self {
            sender: tx,
            handle: Some(handle),
        }
    }

    /// Create the listener handed to the remote service.
    ///
    /// The relay enqueues the event and returns immediately, which is all
    /// the remote callback context is allowed to do.
    pub fn relay(&self) -> Arc<dyn ChangeListener> {
        Arc::new(ChangeRelay {
            sender: self.sender.clone(),
        })
    }
}

impl Drop for EventDispatcher {
    fn drop(&mut self) {
        let _ = self.sender.send(DeliveryMsg::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Remote-side listener that hands events off to the delivery thread.
struct ChangeRelay {
    sender: mpsc::Sender<DeliveryMsg>,
}

impl ChangeListener for ChangeRelay {
    fn on_change(&self, event: LogEvent) {
        // The queue is unbounded, so this never blocks the IPC thread. The
        // send only fails once the delivery thread has exited, i.e. the
        // client is already tearing down.
        if self.sender.send(DeliveryMsg::Deliver(event)).is_err() {
            tracing::error!(used = event.used, "delivery thread is gone; dropping change event");
        }
    }
}

fn delivery_loop(registry: Arc<ObserverRegistry>, rx: mpsc::Receiver<DeliveryMsg>) {
    while let Ok(msg) = rx.recv() {
        match msg {
            DeliveryMsg::Deliver(event) => deliver(&registry, &event),
            DeliveryMsg::Shutdown => break,
        }
    }
}

/// Deliver one event to every observer in the current snapshot.
///
/// A panicking observer is isolated: the panic is caught and logged, and the
/// remaining observers in the same delivery still run.
fn deliver(registry: &ObserverRegistry, event: &LogEvent) {
    let observers = registry.snapshot();
    tracing::trace!(
        used = event.used,
        observers = observers.len(),
        "delivering change event"
    );

    for observer in observers {
        let delivery = panic::catch_unwind(AssertUnwindSafe(|| observer.on_event(event)));
        if let Err(payload) = delivery {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            tracing::error!(reason = %reason, "observer panicked during delivery");
        }
    }
}
