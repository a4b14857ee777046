/// Failure reading or writing a whole collection document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read collection {collection}: {source}")]
    Read {
        collection: String,
        #[source]
        source: DocumentError,
    },

    #[error("failed to write collection {collection}: {source}")]
    Write {
        collection: String,
        #[source]
        source: DocumentError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("collection does not exist")]
    Missing,

    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn read(collection: &str, source: impl Into<DocumentError>) -> Self {
        StoreError::Read {
            collection: collection.to_string(),
            source: source.into(),
        }
    }

    pub fn write(collection: &str, source: impl Into<DocumentError>) -> Self {
        StoreError::Write {
            collection: collection.to_string(),
            source: source.into(),
        }
    }

    pub fn collection(&self) -> &str {
        match self {
            StoreError::Read { collection, .. } | StoreError::Write { collection, .. } => collection,
        }
    }

    pub fn is_read(&self) -> bool {
        matches!(self, StoreError::Read { .. })
    }

    pub fn is_write(&self) -> bool {
        matches!(self, StoreError::Write { .. })
    }
}
