mod error;
mod kind;
mod payload;
mod service;

pub use aula_store::Record;
pub use error::RecordError;
pub use kind::EntityKind;
pub use payload::{id_matches, is_active, parse_id, parse_payload};
pub use service::RecordStore;
