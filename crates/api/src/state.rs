use std::sync::Arc;

use shelf_db::kind::RecordKind;
use shelf_db::repositories::RecordStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState<K>>`.
///
/// Cheap to clone: the store wraps a pool handle and the config sits behind an `Arc`.
pub struct AppState<K: RecordKind> {
    /// Bookmark storage for the configured variant.
    pub store: RecordStore<K>,
    pub config: Arc<ServerConfig>,
}

impl<K: RecordKind> Clone for AppState<K> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            config: Arc::clone(&self.config),
        }
    }
}
