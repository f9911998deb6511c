//! Status messages for UI feedback.

use crate::state::SessionState;
use crate::state::events::SessionEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Error, text: text.into() }
    }
}

impl SessionState {
    pub(crate) fn update_status_from_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Connecting => {
                self.set_status_message(Some(StatusMessage::info("Connecting...")));
            }
            SessionEvent::Connected { .. } => {
                self.set_status_message(Some(StatusMessage::success(
                    "Successfully connected to MongoDB",
                )));
            }
            SessionEvent::ConnectionFailed { error } => {
                self.set_status_message(Some(StatusMessage::error(format!(
                    "Failed to connect: {error}"
                ))));
            }
            SessionEvent::Disconnected => {
                self.set_status_message(Some(StatusMessage::info("Disconnected from MongoDB")));
            }
            SessionEvent::CollectionsLoaded { collections, .. } => {
                self.set_status_message(Some(StatusMessage::info(format!(
                    "Loaded {} collections",
                    collections.len()
                ))));
            }
            SessionEvent::CollectionsFailed { error } => {
                self.set_status_message(Some(StatusMessage::error(format!(
                    "Failed to select database: {error}"
                ))));
            }
            SessionEvent::DocumentsLoaded { count, .. } => {
                self.set_status_message(Some(StatusMessage::info(format!(
                    "Loaded {count} documents"
                ))));
            }
            SessionEvent::DocumentsFetchFailed { error } => {
                self.set_status_message(Some(StatusMessage::error(format!(
                    "Failed to fetch documents: {error}"
                ))));
            }
            SessionEvent::DocumentInserted { .. } => {
                self.set_status_message(Some(StatusMessage::success(
                    "Document added successfully",
                )));
            }
            SessionEvent::DocumentInsertFailed { error } => {
                self.set_status_message(Some(StatusMessage::error(format!(
                    "Failed to add document: {error}"
                ))));
            }
            SessionEvent::DocumentUpdated { .. } => {
                self.set_status_message(Some(StatusMessage::success(
                    "Document updated successfully",
                )));
            }
            SessionEvent::DocumentUpdateFailed { error } => {
                self.set_status_message(Some(StatusMessage::error(format!(
                    "Failed to update document: {error}"
                ))));
            }
            SessionEvent::DocumentDeleted { .. } => {
                self.set_status_message(Some(StatusMessage::success(
                    "Document deleted successfully",
                )));
            }
            SessionEvent::DocumentDeleteFailed { error } => {
                self.set_status_message(Some(StatusMessage::error(format!(
                    "Failed to delete document: {error}"
                ))));
            }
        }
    }
}
