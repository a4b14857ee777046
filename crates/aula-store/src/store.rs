use std::sync::Arc;

use crate::error::StoreError;

/// A single record: field name to JSON value, in insertion order.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Whole-document persistence for named collections.
///
/// A collection is always read and written in one piece. Implementations
/// must make `save_all` all-or-nothing: on error the previously saved
/// document is still the one `load_all` returns.
pub trait DocumentStore: Send + Sync {
    fn load_all(&self, collection: &str) -> Result<Vec<Record>, StoreError>;
    fn save_all(&self, collection: &str, records: &[Record]) -> Result<(), StoreError>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    fn load_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        (**self).load_all(collection)
    }

    fn save_all(&self, collection: &str, records: &[Record]) -> Result<(), StoreError> {
        (**self).save_all(collection, records)
    }
}
