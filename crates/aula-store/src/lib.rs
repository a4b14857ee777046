mod error;
mod store;

pub use error::{DocumentError, StoreError};
pub use store::{DocumentStore, Record};

#[cfg(feature = "file")]
mod file;

#[cfg(feature = "file")]
pub use file::FileStore;

#[cfg(feature = "memory")]
mod memory;

#[cfg(feature = "memory")]
pub use memory::MemoryStore;
