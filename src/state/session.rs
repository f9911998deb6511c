//! Session state owned by the controller.

use crate::models::Document;
use crate::state::StatusMessage;

/// Connection lifecycle state.
///
/// `Connecting` exists only while a connect attempt is in flight; a failed
/// attempt reverts to `Disconnected` with the error recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// The single session tracked by a controller instance.
///
/// Consumers receive clones of this via `SessionController::state()`; all
/// mutation goes through controller operations.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub connection_target: String,
    pub status: ConnectionStatus,
    pub databases: Vec<String>,
    pub collections: Vec<String>,
    pub current_database: Option<String>,
    pub current_collection: Option<String>,
    pub documents: Vec<Document>,
    pub last_error: Option<String>,

    status_message: Option<StatusMessage>,
    pub(crate) loading_ops: usize,
    /// Bumped by every mutating operation; in-flight results carrying an older
    /// generation are discarded on arrival.
    pub(crate) generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    pub fn is_loading(&self) -> bool {
        self.loading_ops > 0
    }

    /// The most recent user-facing notification, if any.
    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status_message.as_ref()
    }

    pub(crate) fn set_status_message(&mut self, message: Option<StatusMessage>) {
        self.status_message = message;
    }

    /// Reset all runtime state (used on disconnect). The connection target is
    /// user input and survives the reset.
    pub(crate) fn reset_runtime_state(&mut self) {
        self.status = ConnectionStatus::Disconnected;
        self.databases.clear();
        self.collections.clear();
        self.current_database = None;
        self.current_collection = None;
        self.documents.clear();
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_reset_clears_everything_but_target() {
        let mut state = SessionState::new();
        state.connection_target = "mongodb://localhost".into();
        state.status = ConnectionStatus::Connected;
        state.databases = vec!["sample_mflix".into()];
        state.collections = vec!["movies".into()];
        state.current_database = Some("sample_mflix".into());
        state.current_collection = Some("movies".into());
        state.documents = vec![Document::new(doc! { "name": "Sample 0" })];
        state.last_error = Some("boom".into());

        state.reset_runtime_state();

        assert_eq!(state.status, ConnectionStatus::Disconnected);
        assert!(state.databases.is_empty());
        assert!(state.collections.is_empty());
        assert!(state.current_database.is_none());
        assert!(state.current_collection.is_none());
        assert!(state.documents.is_empty());
        assert!(state.last_error.is_none());
        assert_eq!(state.connection_target, "mongodb://localhost");
    }
}
