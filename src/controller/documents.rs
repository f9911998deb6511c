//! Document operations on the current collection.

use crate::connection::Backend;
use crate::controller::SessionController;
use crate::error::{Error, Result};
use crate::models::Document;
use crate::state::SessionEvent;

impl<B: Backend> SessionController<B> {
    /// Replace the document list with a fresh fetch for the current
    /// collection. With no collection selected this is a quiet no-op.
    pub async fn fetch_documents(&self) -> Result<()> {
        let _loading = self.begin_op();

        let (database, collection, token) = {
            let mut state = self.lock_state();
            let (Some(database), Some(collection)) =
                (state.current_database.clone(), state.current_collection.clone())
            else {
                log::debug!("fetch_documents with no collection selected; nothing to do");
                return Ok(());
            };
            state.generation += 1;
            (database, collection, state.generation)
        };

        match self.backend().fetch_documents(&database, &collection).await {
            Ok(documents) => {
                let count = documents.len();
                {
                    let mut state = self.lock_state();
                    if state.generation != token {
                        log::debug!("Discarding superseded fetch for {database}.{collection}");
                        return Ok(());
                    }
                    state.documents = documents;
                }
                self.emit(SessionEvent::DocumentsLoaded { collection, count });
                Ok(())
            }
            Err(error) => {
                if self.lock_state().generation != token {
                    log::debug!("Discarding superseded fetch failure");
                    return Ok(());
                }
                Err(self.operation_failed(error, |error| SessionEvent::DocumentsFetchFailed {
                    error,
                }))
            }
        }
    }

    /// Insert a new document built from `fields`, prepending it to the list
    /// (newest first). The id and creation timestamp are assigned here.
    pub async fn add_document(&self, fields: bson::Document) -> Result<()> {
        let _loading = self.begin_op();

        let (database, collection, token) = {
            let mut state = self.lock_state();
            let (Some(database), Some(collection)) =
                (state.current_database.clone(), state.current_collection.clone())
            else {
                drop(state);
                return Err(self.operation_failed(Error::NoCollectionSelected, |error| {
                    SessionEvent::DocumentInsertFailed { error }
                }));
            };
            state.generation += 1;
            (database, collection, state.generation)
        };

        let document = Document::new(fields);
        match self.backend().insert_document(&database, &collection, document).await {
            Ok(stored) => {
                let id = stored.id.clone();
                {
                    let mut state = self.lock_state();
                    if state.generation != token {
                        log::debug!("Discarding superseded insert of {id}");
                        return Ok(());
                    }
                    state.documents.insert(0, stored);
                }
                self.emit(SessionEvent::DocumentInserted { id });
                Ok(())
            }
            Err(error) => {
                if self.lock_state().generation != token {
                    log::debug!("Discarding superseded insert failure");
                    return Ok(());
                }
                Err(self.operation_failed(error, |error| SessionEvent::DocumentInsertFailed {
                    error,
                }))
            }
        }
    }

    /// Shallow-merge `fields` into the document with the given id and stamp
    /// its update time. Fails with `DocumentNotFound` for an unknown id.
    pub async fn update_document(&self, id: &str, fields: bson::Document) -> Result<()> {
        let _loading = self.begin_op();

        let (database, collection, token) = {
            let mut state = self.lock_state();
            let (Some(database), Some(collection)) =
                (state.current_database.clone(), state.current_collection.clone())
            else {
                drop(state);
                return Err(self.operation_failed(Error::NoCollectionSelected, |error| {
                    SessionEvent::DocumentUpdateFailed { error }
                }));
            };
            if !state.documents.iter().any(|document| document.id == id) {
                drop(state);
                return Err(self.operation_failed(
                    Error::DocumentNotFound(id.to_string()),
                    |error| SessionEvent::DocumentUpdateFailed { error },
                ));
            }
            state.generation += 1;
            (database, collection, state.generation)
        };

        match self.backend().update_document(&database, &collection, id, fields.clone()).await {
            Ok(()) => {
                {
                    let mut state = self.lock_state();
                    if state.generation != token {
                        log::debug!("Discarding superseded update of {id}");
                        return Ok(());
                    }
                    if let Some(document) =
                        state.documents.iter_mut().find(|document| document.id == id)
                    {
                        document.merge_fields(fields);
                    }
                }
                self.emit(SessionEvent::DocumentUpdated { id: id.to_string() });
                Ok(())
            }
            Err(error) => {
                if self.lock_state().generation != token {
                    log::debug!("Discarding superseded update failure");
                    return Ok(());
                }
                Err(self.operation_failed(error, |error| SessionEvent::DocumentUpdateFailed {
                    error,
                }))
            }
        }
    }

    /// Remove the document with the given id. Deleting an absent id is an
    /// idempotent no-op.
    pub async fn delete_document(&self, id: &str) -> Result<()> {
        let _loading = self.begin_op();

        let (database, collection, token) = {
            let mut state = self.lock_state();
            let (Some(database), Some(collection)) =
                (state.current_database.clone(), state.current_collection.clone())
            else {
                log::debug!("delete_document with no collection selected; nothing to do");
                return Ok(());
            };
            state.generation += 1;
            (database, collection, state.generation)
        };

        match self.backend().delete_document(&database, &collection, id).await {
            Ok(()) => {
                let removed = {
                    let mut state = self.lock_state();
                    if state.generation != token {
                        log::debug!("Discarding superseded delete of {id}");
                        return Ok(());
                    }
                    let before = state.documents.len();
                    state.documents.retain(|document| document.id != id);
                    state.documents.len() != before
                };
                if removed {
                    self.emit(SessionEvent::DocumentDeleted { id: id.to_string() });
                } else {
                    log::debug!("Delete of missing document {id} is a no-op");
                }
                Ok(())
            }
            Err(error) => {
                if self.lock_state().generation != token {
                    log::debug!("Discarding superseded delete failure");
                    return Ok(());
                }
                Err(self.operation_failed(error, |error| SessionEvent::DocumentDeleteFailed {
                    error,
                }))
            }
        }
    }
}
