#![cfg(feature = "memory")]

use std::sync::Arc;

use aula_store::{DocumentError, DocumentStore, MemoryStore, Record, StoreError};
use serde_json::{Value, json};

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn load_missing_collection_is_read_error() {
    let store = MemoryStore::new();
    let err = store.load_all("Estudiantes").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Read {
            source: DocumentError::Missing,
            ..
        }
    ));
}

#[test]
fn create_collection_starts_empty() {
    let store = MemoryStore::new();
    store.create_collection("Profesores").unwrap();
    assert!(store.contains("Profesores"));
    assert!(store.load_all("Profesores").unwrap().is_empty());
}

#[test]
fn create_collection_keeps_existing_records() {
    let store =
        MemoryStore::new().with_collection("Profesores", vec![record(json!({ "id": 7 }))]);
    store.create_collection("Profesores").unwrap();
    assert_eq!(store.load_all("Profesores").unwrap().len(), 1);
}

#[test]
fn save_replaces_whole_collection() {
    let store = MemoryStore::new().with_collection(
        "Materias",
        vec![record(json!({ "id": 1 })), record(json!({ "id": 2 }))],
    );
    store
        .save_all("Materias", &[record(json!({ "id": 3 }))])
        .unwrap();
    assert_eq!(
        store.load_all("Materias").unwrap(),
        vec![record(json!({ "id": 3 }))]
    );
}

#[test]
fn save_creates_missing_collection() {
    let store = MemoryStore::new();
    store
        .save_all("Reportes", &[record(json!({ "id": 1 }))])
        .unwrap();
    assert!(store.contains("Reportes"));
}

#[test]
fn loaded_records_are_detached_snapshots() {
    let store = MemoryStore::new().with_collection("Materias", vec![record(json!({ "id": 1 }))]);
    let mut loaded = store.load_all("Materias").unwrap();
    loaded[0].insert("activo".into(), json!(false));

    assert!(!store.load_all("Materias").unwrap()[0].contains_key("activo"));
}

#[test]
fn arc_store_delegates() {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    store
        .save_all("Estudiantes", &[record(json!({ "id": 1 }))])
        .unwrap();
    assert_eq!(store.load_all("Estudiantes").unwrap().len(), 1);
}
