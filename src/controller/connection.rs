//! Connection lifecycle operations.

use std::sync::atomic::Ordering;

use crate::connection::Backend;
use crate::controller::{InFlightGuard, SessionController};
use crate::error::{Error, Result};
use crate::helpers::validate::redact_uri_password;
use crate::state::{ConnectionStatus, SessionEvent};

impl<B: Backend> SessionController<B> {
    /// Set the connection target. Ignored while connected or loading; the UI
    /// disables the input in those states, so a call here is a precondition
    /// violation we treat as a no-op.
    pub fn set_connection_target(&self, value: impl Into<String>) {
        let mut state = self.lock_state();
        if state.is_connected() || state.is_loading() {
            log::debug!("Ignoring connection target change while connected or loading");
            return;
        }
        state.connection_target = value.into();
    }

    /// Validate the connection target and establish the simulated session.
    ///
    /// On success the database list is populated and the status becomes
    /// `Connected`; on failure the status reverts to `Disconnected` with the
    /// error recorded. A second call while one is in flight is rejected.
    pub async fn connect(&self) -> Result<()> {
        if self.connect_flag().swap(true, Ordering::SeqCst) {
            return Err(Error::OperationInFlight("connect"));
        }
        let _in_flight = InFlightGuard(self.connect_flag());

        if self.lock_state().is_connected() {
            log::debug!("connect() while already connected is a no-op");
            return Ok(());
        }

        let _loading = self.begin_op();
        let (target, token) = {
            let mut state = self.lock_state();
            state.status = ConnectionStatus::Connecting;
            state.generation += 1;
            (state.connection_target.clone(), state.generation)
        };

        log::info!("Connecting to {}", redact_uri_password(&target));
        self.emit(SessionEvent::Connecting);

        match self.backend().connect(&target).await {
            Ok(databases) => {
                {
                    let mut state = self.lock_state();
                    if state.generation != token {
                        log::debug!("Discarding superseded connect result");
                        return Ok(());
                    }
                    state.status = ConnectionStatus::Connected;
                    state.databases = databases.clone();
                }
                self.emit(SessionEvent::Connected { databases });
                Ok(())
            }
            Err(error) => {
                {
                    let mut state = self.lock_state();
                    if state.generation != token {
                        log::debug!("Discarding superseded connect failure");
                        return Ok(());
                    }
                    state.status = ConnectionStatus::Disconnected;
                }
                Err(self.operation_failed(error, |error| SessionEvent::ConnectionFailed { error }))
            }
        }
    }

    /// Tear the session down to its initial runtime state. No precondition;
    /// safe to call in any state. Invalidates any in-flight operation.
    pub fn disconnect(&self) {
        {
            let mut state = self.lock_state();
            state.generation += 1;
            state.reset_runtime_state();
        }
        log::info!("Disconnected");
        self.emit(SessionEvent::Disconnected);
    }
}
