use std::sync::{Mutex, MutexGuard, PoisonError};

use aula_store::DocumentStore;
use tracing::{debug, info};

use crate::Record;
use crate::error::RecordError;
use crate::kind::{EntityKind, KIND_COUNT};
use crate::payload::{id_matches, is_active};

/// CRUD over whole-collection documents, shared by every entity kind.
///
/// Each call loads the collection from `store`, works on it, and for
/// mutations saves it back. Nothing is cached between calls.
///
/// Mutations on the same kind are serialized by a per-kind lock, so two
/// overlapping writers cannot drop each other's changes. Reads are not
/// locked; backends replace a document atomically, so a reader sees the
/// collection either before or after a write.
pub struct RecordStore<S: DocumentStore> {
    store: S,
    locks: [Mutex<()>; KIND_COUNT],
}

impl<S: DocumentStore> RecordStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: Default::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Records whose `activo` field is absent or not `false`, in insertion order.
    pub fn list_active(&self, kind: EntityKind) -> Result<Vec<Record>, RecordError> {
        let mut records = self.load(kind)?;
        records.retain(is_active);
        Ok(records)
    }

    /// Records whose `activo` field is exactly `false`.
    pub fn list_inactive(&self, kind: EntityKind) -> Result<Vec<Record>, RecordError> {
        let mut records = self.load(kind)?;
        records.retain(|r| !is_active(r));
        Ok(records)
    }

    /// Appends `record` as given. Identifiers are neither assigned nor
    /// checked for duplicates.
    pub fn create(&self, kind: EntityKind, record: Record) -> Result<Record, RecordError> {
        let created = self.mutate(kind, |records| {
            records.push(record.clone());
            Ok(record)
        })?;
        info!(%kind, "record created");
        Ok(created)
    }

    /// Shallow-merges `fields` into the first record with a matching `id`.
    /// Existing keys keep their position; new keys are appended. A
    /// deactivated record stays deactivated whatever `fields` holds.
    pub fn update(
        &self,
        kind: EntityKind,
        id: i64,
        fields: Record,
    ) -> Result<Record, RecordError> {
        let updated = self.mutate(kind, |records| {
            let index = find(records, kind, id)?;
            let record = &mut records[index];
            let was_active = is_active(record);
            for (key, value) in fields {
                record.insert(key, value);
            }
            if !was_active {
                record.insert("activo".into(), false.into());
            }
            Ok(record.clone())
        })?;
        info!(%kind, id, "record updated");
        Ok(updated)
    }

    /// Sets `activo` to `false` on the first record with a matching `id`.
    pub fn deactivate(&self, kind: EntityKind, id: i64) -> Result<(), RecordError> {
        self.mutate(kind, |records| {
            let index = find(records, kind, id)?;
            records[index].insert("activo".into(), false.into());
            Ok(())
        })?;
        info!(%kind, id, "record deactivated");
        Ok(())
    }

    fn load(&self, kind: EntityKind) -> Result<Vec<Record>, RecordError> {
        let records = self.store.load_all(kind.collection())?;
        debug!(%kind, count = records.len(), "collection loaded");
        Ok(records)
    }

    /// Runs one load -> modify -> save cycle under the kind's lock.
    /// When `f` fails nothing is saved.
    fn mutate<T>(
        &self,
        kind: EntityKind,
        f: impl FnOnce(&mut Vec<Record>) -> Result<T, RecordError>,
    ) -> Result<T, RecordError> {
        let _guard = self.lock(kind);
        let mut records = self.load(kind)?;
        let outcome = f(&mut records)?;
        self.store.save_all(kind.collection(), &records)?;
        Ok(outcome)
    }

    fn lock(&self, kind: EntityKind) -> MutexGuard<'_, ()> {
        self.locks[kind.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn find(records: &[Record], kind: EntityKind, id: i64) -> Result<usize, RecordError> {
    records
        .iter()
        .position(|r| id_matches(r, id))
        .ok_or_else(|| RecordError::not_found(kind, id))
}
