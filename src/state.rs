use std::{path::PathBuf, sync::Arc};

use bb8::Pool;
use bb8_redis::RedisConnectionManager;

use crate::db::PortalStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PortalStore>,
    /// Directory holding the catalog images.
    pub catalog_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(store: Arc<dyn PortalStore>, catalog_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            catalog_dir: Arc::new(catalog_dir.into()),
        }
    }
}

pub type RedisClient = Pool<RedisConnectionManager>;
