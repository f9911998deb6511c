//! Session events for reactive UI updates

/// Events emitted by the session controller for UI reactivity.
///
/// Every operation's success or failure is observable here; consumers render
/// them as one-shot, auto-dismissing notifications.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    // Connection lifecycle
    Connecting,
    Connected { databases: Vec<String> },
    ConnectionFailed { error: String },
    Disconnected,

    // Navigation
    CollectionsLoaded { database: String, collections: Vec<String> },
    CollectionsFailed { error: String },

    // Documents
    DocumentsLoaded { collection: String, count: usize },
    DocumentsFetchFailed { error: String },
    DocumentInserted { id: String },
    DocumentInsertFailed { error: String },
    DocumentUpdated { id: String },
    DocumentUpdateFailed { error: String },
    DocumentDeleted { id: String },
    DocumentDeleteFailed { error: String },
}
