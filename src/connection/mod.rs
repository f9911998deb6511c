//! Backend abstraction for the dashboard session controller.
//!
//! The controller talks to its data source through [`Backend`] so the
//! simulated implementation can be swapped for a real driver later. The
//! simulation is the only implementation shipped today.

mod simulated;

pub use simulated::{LatencyProfile, SampleDataset, SimulatedBackend};

use crate::error::Result;
use crate::models::Document;

/// Data-source operations the session controller depends on.
///
/// All methods are async; the simulated implementation suspends only for its
/// artificial latency. Mutation methods return whatever the store recorded so
/// a real backend can report server-assigned attributes.
pub trait Backend {
    /// Validate the target and return the database names visible to it.
    fn connect(&self, target: &str) -> impl Future<Output = Result<Vec<String>>>;

    /// List collection names in a database. Unknown databases yield an empty
    /// list, not an error.
    fn list_collections(&self, database: &str) -> impl Future<Output = Result<Vec<String>>>;

    /// Fetch all documents in a collection.
    fn fetch_documents(
        &self,
        database: &str,
        collection: &str,
    ) -> impl Future<Output = Result<Vec<Document>>>;

    /// Insert a document, returning it as stored.
    fn insert_document(
        &self,
        database: &str,
        collection: &str,
        document: Document,
    ) -> impl Future<Output = Result<Document>>;

    /// Apply a partial update to the document with the given id.
    fn update_document(
        &self,
        database: &str,
        collection: &str,
        id: &str,
        fields: bson::Document,
    ) -> impl Future<Output = Result<()>>;

    /// Delete the document with the given id.
    fn delete_document(
        &self,
        database: &str,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<()>>;
}
