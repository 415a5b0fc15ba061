//! Persistent on-disk cache for the exploration dataset with a TTL.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::HousingRecord;

const CACHE_DIR: &str = "california-housing-portal";
const CACHE_FILENAME: &str = "housing_dataset.json";

/// The census extract never changes; a month keeps refreshes rare.
pub const DATASET_CACHE_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Derived dataset records plus where and when they were fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetCache {
    /// Unix timestamp (seconds) when this cache was created.
    pub cached_at: u64,
    pub source: String,
    pub records: Vec<HousingRecord>,
}

impl DatasetCache {
    pub fn new(source: String, records: Vec<HousingRecord>) -> Self {
        Self {
            cached_at: unix_now(),
            source,
            records,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.age() > DATASET_CACHE_TTL
    }

    pub fn age(&self) -> Duration {
        Duration::from_secs(unix_now().saturating_sub(self.cached_at))
    }

    pub fn age_string(&self) -> String {
        let secs = self.age().as_secs();
        if secs < 60 {
            format!("{secs}s")
        } else if secs < 3600 {
            format!("{}m", secs / 60)
        } else if secs < 86400 {
            format!("{}h", secs / 3600)
        } else {
            format!("{}d", secs / 86400)
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Cache file path inside the platform's local data directory.
pub fn cache_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CACHE_DIR);
        if let Err(err) = fs::create_dir_all(&base) {
            warn!("Could not create cache directory {}: {err}", base.display());
        }
        base.join(CACHE_FILENAME)
    })
    .clone()
}

/// Loads the dataset cache, expired or not; callers decide what to do with age.
pub fn load_dataset_cache(path: &Path) -> Option<DatasetCache> {
    if !path.exists() {
        debug!("No dataset cache at {}", path.display());
        return None;
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<DatasetCache>(&content) {
            Ok(cache) => {
                info!(
                    "Loaded dataset cache ({} records, age {}) from {}",
                    cache.records.len(),
                    cache.age_string(),
                    path.display()
                );
                Some(cache)
            }
            Err(err) => {
                warn!("Failed to parse dataset cache: {err}");
                None
            }
        },
        Err(err) => {
            warn!("Failed to read dataset cache: {err}");
            None
        }
    }
}

pub fn save_dataset_cache(path: &Path, cache: &DatasetCache) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    // compact, the record list is large
    let content = serde_json::to_string(cache)?;
    fs::write(path, content)?;
    info!(
        "Saved dataset cache ({} records) to {}",
        cache.records.len(),
        path.display()
    );
    Ok(())
}
