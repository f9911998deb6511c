// Document model

use bson::Bson;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A schema-less record identified by a unique id within its collection.
///
/// `fields` is an ordered mapping of field names to BSON values; any shape is
/// permitted. `id` and the timestamps are controller-assigned and live outside
/// the field mapping so a merge can never clobber them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: bson::Document,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Create a document with a freshly generated id and creation timestamp.
    pub fn new(fields: bson::Document) -> Self {
        Self {
            id: generate_document_id(),
            fields,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Create a document with a caller-supplied id (used by the simulated backend).
    pub fn with_id(id: impl Into<String>, fields: bson::Document) -> Self {
        Self { id: id.into(), fields, created_at: Utc::now(), updated_at: None }
    }

    pub fn get(&self, key: &str) -> Option<&Bson> {
        self.fields.get(key)
    }

    /// Shallow-merge `fields` into this document's mapping and stamp `updated_at`.
    /// Keys not present in `fields` are preserved.
    pub fn merge_fields(&mut self, fields: bson::Document) {
        for (key, value) in fields {
            self.fields.insert(key, value);
        }
        self.updated_at = Some(Utc::now());
    }
}

/// Generate a unique document id.
pub fn generate_document_id() -> String {
    format!("doc_{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_merge_preserves_untouched_fields() {
        let mut document = Document::new(doc! { "name": "Sample 0", "value": 42 });
        document.merge_fields(doc! { "value": 5 });

        assert_eq!(document.get("value"), Some(&Bson::Int32(5)));
        assert_eq!(document.get("name"), Some(&Bson::String("Sample 0".into())));
        assert!(document.updated_at.is_some());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Document::new(doc! {});
        let b = Document::new(doc! {});
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("doc_"));
    }
}
