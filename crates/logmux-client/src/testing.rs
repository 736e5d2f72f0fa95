//! Shared test doubles for the client unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};

use parking_lot::Mutex;

use logmux_proto::{ChangeListener, Error, LogEvent, LogService, ServiceDirectory, StatKind};

use crate::observer::LogObserver;

/// Scriptable in-memory log service that records call counts.
///
/// Each failure flag makes the corresponding operation fail until cleared;
/// the call is still counted. `emit` plays the service side of a change
/// notification by invoking the captured listener on the calling thread.
#[derive(Default)]
pub struct MockService {
    pub subscribes: AtomicUsize,
    pub unsubscribes: AtomicUsize,
    pub flushes: AtomicUsize,
    pub fail_subscribe: AtomicBool,
    pub fail_unsubscribe: AtomicBool,
    pub fail_query: AtomicBool,
    pub used: AtomicU64,
    pub total: AtomicU64,
    listener: Mutex<Option<Arc<dyn ChangeListener>>>,
}

impl MockService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Emit a change event through the currently captured listener, if any.
    pub fn emit(&self, used: u64) {
        let listener = self.listener.lock().clone();
        if let Some(listener) = listener {
            listener.on_change(LogEvent::new(used));
        }
    }

    pub fn has_listener(&self) -> bool {
        self.listener.lock().is_some()
    }
}

impl LogService for MockService {
    fn subscribe(&self, listener: Arc<dyn ChangeListener>) -> Result<(), Error> {
        self.subscribes.fetch_add(1, Ordering::SeqCst);
        if self.fail_subscribe.load(Ordering::SeqCst) {
            return Err(Error::Transport("subscribe refused".into()));
        }
        *self.listener.lock() = Some(listener);
        Ok(())
    }

    fn unsubscribe(&self, _listener: Arc<dyn ChangeListener>) -> Result<(), Error> {
        self.unsubscribes.fetch_add(1, Ordering::SeqCst);
        if self.fail_unsubscribe.load(Ordering::SeqCst) {
            return Err(Error::Transport("unsubscribe refused".into()));
        }
        *self.listener.lock() = None;
        Ok(())
    }

    fn query(&self, kind: StatKind) -> Result<u64, Error> {
        if self.fail_query.load(Ordering::SeqCst) {
            return Err(Error::Service("query refused".into()));
        }
        Ok(match kind {
            StatKind::Used => self.used.load(Ordering::SeqCst),
            StatKind::Total => self.total.load(Ordering::SeqCst),
        })
    }

    fn flush(&self) -> Result<(), Error> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// In-memory service directory.
#[derive(Default)]
pub struct MockDirectory {
    services: HashMap<String, Arc<dyn LogService>>,
}

impl MockDirectory {
    pub fn with_service(name: &str, service: Arc<dyn LogService>) -> Self {
        let mut services = HashMap::new();
        services.insert(name.to_string(), service);
        Self { services }
    }
}

impl ServiceDirectory for MockDirectory {
    fn lookup(&self, name: &str) -> Option<Arc<dyn LogService>> {
        self.services.get(name).cloned()
    }
}

/// Listener stub for tests that exercise subscription bookkeeping only.
pub struct SinkListener;

impl ChangeListener for SinkListener {
    fn on_change(&self, _event: LogEvent) {}
}

/// Observer that does nothing; used where only registration matters.
pub struct NoopObserver;

impl LogObserver for NoopObserver {
    fn on_event(&self, _event: &LogEvent) {}
}

/// Observer that records every received value and signals each delivery.
pub struct RecordingObserver {
    seen: Mutex<Vec<u64>>,
    notify: mpsc::Sender<u64>,
}

impl RecordingObserver {
    /// Returns the observer plus a receiver yielding one message per delivery.
    pub fn new() -> (Arc<Self>, mpsc::Receiver<u64>) {
        let (tx, rx) = mpsc::channel();
        let observer = Arc::new(Self {
            seen: Mutex::new(Vec::new()),
            notify: tx,
        });
        (observer, rx)
    }

    pub fn seen(&self) -> Vec<u64> {
        self.seen.lock().clone()
    }
}

impl LogObserver for RecordingObserver {
    fn on_event(&self, event: &LogEvent) {
        self.seen.lock().push(event.used);
        let _ = self.notify.send(event.used);
    }
}

/// Observer that panics on every delivery.
pub struct PanickingObserver;

impl LogObserver for PanickingObserver {
    fn on_event(&self, _event: &LogEvent) {
        panic!("observer failure");
    }
}
