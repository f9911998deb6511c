//! In-memory simulated backend with artificial latencies.

use std::time::Duration;

use bson::doc;
use chrono::Utc;
use rand::Rng;

use crate::connection::Backend;
use crate::error::{Error, Result};
use crate::helpers::validate::validate_connection_target;
use crate::models::Document;

/// Artificial delays applied before each simulated operation resolves.
///
/// Defaults mirror the latencies the dashboard was designed around; tests use
/// [`LatencyProfile::none`] to run instantly.
#[derive(Debug, Clone, Copy)]
pub struct LatencyProfile {
    pub connect: Duration,
    pub list_collections: Duration,
    pub fetch: Duration,
    pub write: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            connect: Duration::from_millis(1500),
            list_collections: Duration::from_millis(800),
            fetch: Duration::from_millis(1000),
            write: Duration::from_millis(800),
        }
    }
}

impl LatencyProfile {
    /// Zero latency everywhere.
    pub fn none() -> Self {
        Self {
            connect: Duration::ZERO,
            list_collections: Duration::ZERO,
            fetch: Duration::ZERO,
            write: Duration::ZERO,
        }
    }

    /// The same latency for every operation.
    pub fn uniform(delay: Duration) -> Self {
        Self { connect: delay, list_collections: delay, fetch: delay, write: delay }
    }
}

/// The fixed demonstration hierarchy served by the simulation.
#[derive(Debug, Clone)]
pub struct SampleDataset {
    databases: Vec<(String, Vec<String>)>,
}

impl Default for SampleDataset {
    fn default() -> Self {
        let databases = [
            ("sample_analytics", vec!["accounts", "customers", "transactions"]),
            ("sample_mflix", vec!["movies", "users", "comments", "theaters"]),
            ("sample_training", vec!["companies", "inspections", "trips", "posts"]),
            ("sample_weatherdata", vec!["data", "stations"]),
        ];
        Self {
            databases: databases
                .into_iter()
                .map(|(db, colls)| {
                    (db.to_string(), colls.into_iter().map(String::from).collect())
                })
                .collect(),
        }
    }
}

impl SampleDataset {
    /// Build a dataset from explicit (database, collections) pairs.
    pub fn new(databases: Vec<(String, Vec<String>)>) -> Self {
        Self { databases }
    }

    pub fn database_names(&self) -> Vec<String> {
        self.databases.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Collections for a database; unknown names resolve to an empty list.
    pub fn collections_for(&self, database: &str) -> Vec<String> {
        self.databases
            .iter()
            .find(|(name, _)| name == database)
            .map(|(_, collections)| collections.clone())
            .unwrap_or_default()
    }
}

/// Simulated data source: fixed hierarchy, synthetic documents, fake latency.
pub struct SimulatedBackend {
    dataset: SampleDataset,
    latency: LatencyProfile,
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self { dataset: SampleDataset::default(), latency: LatencyProfile::default() }
    }

    /// Backend with zero latency (for tests).
    pub fn instant() -> Self {
        Self::new().with_latency(LatencyProfile::none())
    }

    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_dataset(mut self, dataset: SampleDataset) -> Self {
        self.dataset = dataset;
        self
    }

    async fn delay(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of synthetic documents returned by every fetch.
pub(crate) const SYNTHETIC_DOCUMENT_COUNT: usize = 10;

/// Generate the synthetic document set served for any collection fetch.
fn synthetic_documents() -> Vec<Document> {
    let mut rng = rand::rng();
    let millis = Utc::now().timestamp_millis();

    (0..SYNTHETIC_DOCUMENT_COUNT)
        .map(|i| {
            let fields = doc! {
                "name": format!("Sample {i}"),
                "value": rng.random_range(0..1000),
                "is_active": rng.random_bool(0.7),
            };
            Document::with_id(format!("doc_{i}_{millis}"), fields)
        })
        .collect()
}

impl Backend for SimulatedBackend {
    async fn connect(&self, target: &str) -> Result<Vec<String>> {
        self.delay(self.latency.connect).await;
        validate_connection_target(target).map_err(Error::InvalidTarget)?;
        Ok(self.dataset.database_names())
    }

    async fn list_collections(&self, database: &str) -> Result<Vec<String>> {
        self.delay(self.latency.list_collections).await;
        Ok(self.dataset.collections_for(database))
    }

    async fn fetch_documents(&self, _database: &str, _collection: &str) -> Result<Vec<Document>> {
        self.delay(self.latency.fetch).await;
        Ok(synthetic_documents())
    }

    async fn insert_document(
        &self,
        _database: &str,
        _collection: &str,
        document: Document,
    ) -> Result<Document> {
        self.delay(self.latency.write).await;
        Ok(document)
    }

    async fn update_document(
        &self,
        _database: &str,
        _collection: &str,
        _id: &str,
        _fields: bson::Document,
    ) -> Result<()> {
        self.delay(self.latency.write).await;
        Ok(())
    }

    async fn delete_document(&self, _database: &str, _collection: &str, _id: &str) -> Result<()> {
        self.delay(self.latency.write).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_mapping() {
        let dataset = SampleDataset::default();
        assert_eq!(
            dataset.database_names(),
            vec!["sample_analytics", "sample_mflix", "sample_training", "sample_weatherdata"]
        );
        assert_eq!(
            dataset.collections_for("sample_mflix"),
            vec!["movies", "users", "comments", "theaters"]
        );
        assert!(dataset.collections_for("nonexistent").is_empty());
    }

    #[test]
    fn test_synthetic_documents_shape() {
        let documents = synthetic_documents();
        assert_eq!(documents.len(), SYNTHETIC_DOCUMENT_COUNT);
        for document in &documents {
            assert!(document.id.starts_with("doc_"));
            assert!(document.get("name").is_some());
            assert!(document.get("value").is_some());
            assert!(document.get("is_active").is_some());
        }
    }
}
