use crate::clock::Clock;
use crate::storage::StreakBackend;
use crate::store::StreakStore;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;
use tracing::debug;

const DEFAULT_STORE_LIMIT: usize = 1024;

#[derive(Clone)]
pub struct AppState {
    backend: Arc<dyn StreakBackend>,
    clock: Arc<dyn Clock>,
    stores: Arc<Mutex<HashMap<String, Arc<StreakStore>>>>,
    store_limit: usize,
}

impl AppState {
    pub fn new(backend: Arc<dyn StreakBackend>, clock: Arc<dyn Clock>) -> Self {
        Self::with_store_limit(backend, clock, DEFAULT_STORE_LIMIT)
    }

    pub fn with_store_limit(
        backend: Arc<dyn StreakBackend>,
        clock: Arc<dyn Clock>,
        store_limit: usize,
    ) -> Self {
        Self {
            backend,
            clock,
            stores: Arc::new(Mutex::new(HashMap::new())),
            store_limit,
        }
    }

    /// Returns the single live store for `user_id`, creating it on first use.
    ///
    /// Once `store_limit` users are registered, stores that no request still
    /// holds are dropped before a new one is added. A store keeps no record
    /// between calls, so a dropped store is rebuilt from the backend on the
    /// user's next request. Records themselves are never removed.
    pub async fn store_for(&self, user_id: &str) -> Arc<StreakStore> {
        let mut stores = self.stores.lock().await;
        if !stores.contains_key(user_id) && stores.len() >= self.store_limit {
            let before = stores.len();
            stores.retain(|_, store| Arc::strong_count(store) > 1);
            debug!(dropped = before - stores.len(), "pruned idle streak stores");
        }
        let store = stores.entry(user_id.to_string()).or_insert_with(|| {
            Arc::new(StreakStore::new(
                user_id,
                Arc::clone(&self.backend),
                Arc::clone(&self.clock),
            ))
        });
        Arc::clone(store)
    }
}
