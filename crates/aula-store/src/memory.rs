use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use arc_swap::ArcSwap;

use crate::error::{DocumentError, StoreError};
use crate::store::{DocumentStore, Record};

type Collection = Arc<ArcSwap<Vec<Record>>>;

/// In-process document store. Loads hand out a clone of the current
/// snapshot; saves swap the whole snapshot at once.
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Builder-style seeding, mostly for tests.
    pub fn with_collection(self, name: &str, records: Vec<Record>) -> Self {
        self.collections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), Arc::new(ArcSwap::from_pointee(records)));
        self
    }

    /// Creates an empty collection if `name` does not exist yet.
    pub fn create_collection(&self, name: &str) -> Result<(), StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|e| StoreError::write(name, poisoned(e)))?;
        collections
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(ArcSwap::from_pointee(Vec::new())));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.collections
            .read()
            .map(|collections| collections.contains_key(name))
            .unwrap_or(false)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn load_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|e| StoreError::read(collection, poisoned(e)))?;
        let data = collections
            .get(collection)
            .ok_or_else(|| StoreError::read(collection, DocumentError::Missing))?;
        Ok((**data.load()).clone())
    }

    fn save_all(&self, collection: &str, records: &[Record]) -> Result<(), StoreError> {
        {
            let collections = self
                .collections
                .read()
                .map_err(|e| StoreError::write(collection, poisoned(e)))?;
            if let Some(data) = collections.get(collection) {
                data.store(Arc::new(records.to_vec()));
                return Ok(());
            }
        }

        let mut collections = self
            .collections
            .write()
            .map_err(|e| StoreError::write(collection, poisoned(e)))?;
        collections.insert(
            collection.to_string(),
            Arc::new(ArcSwap::from_pointee(records.to_vec())),
        );
        Ok(())
    }
}

fn poisoned<T>(e: PoisonError<T>) -> DocumentError {
    DocumentError::Backend(format!("lock poisoned: {e}"))
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;

    fn poison(store: &MemoryStore) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            let _guard = store.collections.write().unwrap();
            panic!("poison the collections lock");
        }));
        assert!(store.collections.is_poisoned());
    }

    #[test]
    fn with_collection_seeds_through_a_poisoned_lock() {
        let store = MemoryStore::new();
        poison(&store);

        let mut seed = Record::new();
        seed.insert("id".into(), 1.into());
        let store = store.with_collection("Estudiantes", vec![seed.clone()]);

        let collections = store
            .collections
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let data = collections.get("Estudiantes").expect("seeded collection");
        assert_eq!(**data.load(), vec![seed]);
    }
}
