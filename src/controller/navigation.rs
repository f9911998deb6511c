//! Database and collection selection.

use crate::connection::Backend;
use crate::controller::SessionController;
use crate::error::{Error, Result};
use crate::state::SessionEvent;

impl<B: Backend> SessionController<B> {
    /// Select a database and load its collection list.
    ///
    /// The new selection is applied atomically with clearing the previous
    /// collection, collection list, and documents, so a later failure leaves
    /// those empty rather than stale. Unknown database names resolve to an
    /// empty collection list.
    pub async fn select_database(&self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let _loading = self.begin_op();

        let token = {
            let mut state = self.lock_state();
            if !state.is_connected() {
                drop(state);
                return Err(self.operation_failed(Error::NotConnected, |error| {
                    SessionEvent::CollectionsFailed { error }
                }));
            }
            state.current_database = Some(name.clone());
            state.current_collection = None;
            state.collections.clear();
            state.documents.clear();
            state.generation += 1;
            state.generation
        };

        match self.backend().list_collections(&name).await {
            Ok(collections) => {
                {
                    let mut state = self.lock_state();
                    if state.generation != token {
                        log::debug!("Discarding superseded collection list for {name}");
                        return Ok(());
                    }
                    state.collections = collections.clone();
                }
                self.emit(SessionEvent::CollectionsLoaded { database: name, collections });
                Ok(())
            }
            Err(error) => {
                if self.lock_state().generation != token {
                    log::debug!("Discarding superseded collection list failure for {name}");
                    return Ok(());
                }
                Err(self.operation_failed(error, |error| SessionEvent::CollectionsFailed {
                    error,
                }))
            }
        }
    }

    /// Select a collection and fetch its documents as a dependent step.
    ///
    /// A fetch failure propagates as this operation's failure, but the
    /// selection itself stays applied.
    pub async fn select_collection(&self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let _loading = self.begin_op();

        {
            let mut state = self.lock_state();
            if state.current_database.is_none() {
                drop(state);
                return Err(self.operation_failed(Error::NoDatabaseSelected, |error| {
                    SessionEvent::DocumentsFetchFailed { error }
                }));
            }
            state.current_collection = Some(name);
            state.documents.clear();
            state.generation += 1;
        }

        self.fetch_documents().await
    }
}
