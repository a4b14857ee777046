use std::sync::Arc;

use aula_records::RecordStore;
use aula_store::DocumentStore;

pub type Records = RecordStore<Arc<dyn DocumentStore>>;

#[derive(Clone)]
pub struct AppState {
    pub records: Arc<Records>,
}

impl AppState {
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        let store: Arc<dyn DocumentStore> = Arc::new(store);
        Self {
            records: Arc::new(RecordStore::new(store)),
        }
    }
}
