use crate::loader::{load_dataset, modified_time, LoadedFile};
use altvendor_core::{Dataset, Result};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};
use std::time::{Duration, SystemTime};
use tracing::{error, info};

struct StoreState {
    dataset: Arc<Dataset>,
    modified: Option<SystemTime>,
    loaded_at: DateTime<Utc>,
}

impl StoreState {
    fn new(dataset: Dataset, modified: Option<SystemTime>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            modified,
            loaded_at: Utc::now(),
        }
    }
}

/// Summary of the active dataset
#[derive(Debug, Clone)]
pub struct DatasetStats {
    pub queries: usize,
    pub vendors: usize,
    pub loaded_at: DateTime<Utc>,
    pub source: Option<PathBuf>,
}

/// Process-wide read-only dataset cache.
///
/// Readers take an `Arc<Dataset>` snapshot; a reload builds a new dataset
/// off-lock and swaps it in, so in-flight lookups keep the snapshot they
/// started with.
pub struct DatasetStore {
    state: Arc<RwLock<StoreState>>,
    source: Option<PathBuf>,
}

impl DatasetStore {
    /// Load the dataset backed by the JSON file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let LoadedFile { dataset, modified } = load_dataset(&path)?;
        info!(
            path = %path.display(),
            queries = dataset.len(),
            vendors = dataset.vendor_count(),
            "dataset loaded"
        );

        Ok(Self {
            state: Arc::new(RwLock::new(StoreState::new(dataset, modified))),
            source: Some(path),
        })
    }

    /// In-memory store with no backing file
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::new(dataset, None))),
            source: None,
        }
    }

    #[inline]
    pub fn snapshot(&self) -> Arc<Dataset> {
        self.state.read().dataset.clone()
    }

    #[inline]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Re-read the backing file. On failure the current dataset stays
    /// active. Returns the number of query buckets now loaded.
    pub fn reload(&self) -> Result<usize> {
        match &self.source {
            Some(path) => reload_state(&self.state, path),
            None => Ok(self.state.read().dataset.len()),
        }
    }

    /// Reload only if the backing file's modification time changed
    pub fn refresh_if_modified(&self) -> Result<bool> {
        match &self.source {
            Some(path) => refresh_state(&self.state, path),
            None => Ok(false),
        }
    }

    #[must_use]
    pub fn stats(&self) -> DatasetStats {
        let state = self.state.read();
        DatasetStats {
            queries: state.dataset.len(),
            vendors: state.dataset.vendor_count(),
            loaded_at: state.loaded_at,
            source: self.source.clone(),
        }
    }

    /// Start background refresh thread. The thread exits once the store is
    /// dropped.
    pub fn start_background_refresh(&self, interval: Duration) {
        let Some(path) = self.source.clone() else {
            return;
        };
        let state: Weak<RwLock<StoreState>> = Arc::downgrade(&self.state);

        std::thread::spawn(move || loop {
            std::thread::sleep(interval);

            let Some(state) = state.upgrade() else {
                break;
            };
            if let Err(e) = refresh_state(&state, &path) {
                error!(path = %path.display(), "background dataset refresh failed: {}", e);
            }
        });
    }
}

fn reload_state(state: &RwLock<StoreState>, path: &Path) -> Result<usize> {
    let LoadedFile { dataset, modified } = load_dataset(path)?;
    let queries = dataset.len();
    info!(
        path = %path.display(),
        queries,
        vendors = dataset.vendor_count(),
        "dataset reloaded"
    );

    *state.write() = StoreState::new(dataset, modified);
    Ok(queries)
}

fn refresh_state(state: &RwLock<StoreState>, path: &Path) -> Result<bool> {
    if modified_time(path) == state.read().modified {
        return Ok(false);
    }
    reload_state(state, path)?;
    Ok(true)
}
