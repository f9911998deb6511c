//! The session controller.
//!
//! Owns all connection, navigation, and document state for one dashboard
//! session and exposes the operations that transition between them.
//! Presentation layers hold a clone of the controller, call operations, and
//! render snapshots plus the event stream.

mod connection;
mod documents;
mod navigation;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::connection::{Backend, SimulatedBackend};
use crate::error::Error;
use crate::state::{SessionEvent, SessionState};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Explicitly constructed, cloneable session store.
///
/// Clones share the same underlying session. Every operation applies its
/// state transition under a single lock acquisition, so observers see either
/// the pre-state or the fully applied post-state.
pub struct SessionController<B: Backend = SimulatedBackend> {
    inner: Arc<Inner<B>>,
}

struct Inner<B> {
    state: Arc<Mutex<SessionState>>,
    events: broadcast::Sender<SessionEvent>,
    backend: B,
    connect_in_flight: AtomicBool,
}

impl SessionController<SimulatedBackend> {
    /// Controller backed by the default simulation (demo dataset, real latencies).
    pub fn new() -> Self {
        Self::with_backend(SimulatedBackend::new())
    }
}

impl Default for SessionController<SimulatedBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> SessionController<B> {
    pub fn with_backend(backend: B) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                state: Arc::new(Mutex::new(SessionState::new())),
                events,
                backend,
                connect_in_flight: AtomicBool::new(false),
            }),
        }
    }

    /// Subscribe to session events. Each consumer gets its own receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.inner.state.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.lock().is_loading()
    }

    pub(crate) fn backend(&self) -> &B {
        &self.inner.backend
    }

    pub(crate) fn lock_state(&self) -> parking_lot::MutexGuard<'_, SessionState> {
        self.inner.state.lock()
    }

    pub(crate) fn connect_flag(&self) -> &AtomicBool {
        &self.inner.connect_in_flight
    }

    /// Record the event's status message and broadcast it.
    pub(crate) fn emit(&self, event: SessionEvent) {
        self.inner.state.lock().update_status_from_event(&event);
        // Send only fails when nobody is subscribed, which is fine.
        let _ = self.inner.events.send(event);
    }

    /// Enter the uniform operation pattern: raise the loading flag and clear
    /// the previous error. The guard releases the flag on every exit path.
    pub(crate) fn begin_op(&self) -> LoadingGuard {
        let mut state = self.inner.state.lock();
        state.loading_ops += 1;
        state.last_error = None;
        LoadingGuard { state: Arc::clone(&self.inner.state) }
    }

    /// Record a failure as `last_error`, emit its notification, and hand the
    /// error back for propagation.
    pub(crate) fn operation_failed(
        &self,
        error: Error,
        event: fn(String) -> SessionEvent,
    ) -> Error {
        let text = error.to_string();
        log::error!("{text}");
        self.inner.state.lock().last_error = Some(text.clone());
        self.emit(event(text));
        error
    }
}

impl<B: Backend> Clone for SessionController<B> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

/// Decrements the loading counter when dropped.
pub(crate) struct LoadingGuard {
    state: Arc<Mutex<SessionState>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        state.loading_ops = state.loading_ops.saturating_sub(1);
    }
}

/// Clears an in-flight marker when dropped.
pub(crate) struct InFlightGuard<'a>(pub(crate) &'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
