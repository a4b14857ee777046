use aula_store::StoreError;

use crate::kind::EntityKind;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("{kind} has no record with id {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RecordError {
    pub fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        RecordError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn status_code(&self) -> http::StatusCode {
        match self {
            RecordError::NotFound { .. } => http::StatusCode::NOT_FOUND,
            RecordError::MalformedPayload(_) => http::StatusCode::BAD_REQUEST,
            RecordError::Store(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_storage_read(&self) -> bool {
        matches!(self, RecordError::Store(e) if e.is_read())
    }

    pub fn is_storage_write(&self) -> bool {
        matches!(self, RecordError::Store(e) if e.is_write())
    }
}
