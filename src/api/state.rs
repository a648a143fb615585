use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::pipeline::cache::EnrichedCache;

#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
}

pub struct AppStateInner {
    pub data_dir: PathBuf,
    pub cache: EnrichedCache,
}

impl AppStateInner {
    pub fn uploads_dir(&self) -> PathBuf {
        self.data_dir.join("uploads")
    }

    pub fn upload_path(&self, upload_id: &str) -> PathBuf {
        self.uploads_dir().join(format!("{upload_id}.csv"))
    }
}

impl AppState {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner {
                data_dir,
                cache: EnrichedCache::default(),
            })),
        }
    }
}
