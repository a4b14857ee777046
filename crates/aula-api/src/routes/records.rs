use std::sync::Arc;

use aula_records::{EntityKind, Record, RecordError, parse_id, parse_payload};
use axum::Json;
use axum::body::Bytes;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::{AppState, Records};

pub async fn list_active(state: AppState, kind: EntityKind) -> Result<Json<Vec<Record>>, ApiError> {
    let records = blocking(&state, move |records| records.list_active(kind)).await?;
    Ok(Json(records))
}

pub async fn list_inactive(
    state: AppState,
    kind: EntityKind,
) -> Result<Json<Vec<Record>>, ApiError> {
    let records = blocking(&state, move |records| records.list_inactive(kind)).await?;
    Ok(Json(records))
}

pub async fn create(state: AppState, kind: EntityKind, body: Bytes) -> Result<Json<Value>, ApiError> {
    let record = parse_payload(&body)?;
    let created = blocking(&state, move |records| records.create(kind, record)).await?;
    Ok(Json(confirmation(kind.created_message(), Some((kind, created)))))
}

pub async fn update(
    state: AppState,
    kind: EntityKind,
    raw_id: String,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let fields = parse_payload(&body)?;
    let Some(id) = parse_id(&raw_id) else {
        return Err(RecordError::not_found(kind, raw_id).into());
    };
    let updated = blocking(&state, move |records| records.update(kind, id, fields)).await?;
    Ok(Json(confirmation(kind.updated_message(), Some((kind, updated)))))
}

pub async fn deactivate(
    state: AppState,
    kind: EntityKind,
    raw_id: String,
) -> Result<Json<Value>, ApiError> {
    let Some(id) = parse_id(&raw_id) else {
        return Err(RecordError::not_found(kind, raw_id).into());
    };
    blocking(&state, move |records| records.deactivate(kind, id)).await?;
    Ok(Json(confirmation(kind.deactivated_message(), None)))
}

/// Runs a store call on the blocking pool; every call touches the filesystem.
async fn blocking<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Records) -> Result<T, RecordError> + Send + 'static,
    T: Send + 'static,
{
    let records = Arc::clone(&state.records);
    let outcome = tokio::task::spawn_blocking(move || f(records.as_ref()))
        .await
        .map_err(|e| ApiError::Internal(format!("store task failed: {e}")))?;
    Ok(outcome?)
}

fn confirmation(message: &str, record: Option<(EntityKind, Record)>) -> Value {
    let mut body = Record::new();
    body.insert("message".into(), message.into());
    if let Some((kind, record)) = record {
        body.insert(kind.payload_key().into(), Value::Object(record));
    }
    Value::Object(body)
}
