//! Thin asynchronous client for the public California housing extract.
//!
//! - Downloads the CSV once and derives records in the model's feature space.
//! - Keeps an in-memory copy plus a disk cache, serving stale data when offline.

use std::{
    path::PathBuf,
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use log::{info, warn};
use reqwest::{Client, Url};
use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tokio::sync::Mutex;

use crate::domain::{HousingRecord, RawHousingRow};
use crate::infra::cache::{cache_path, load_dataset_cache, save_dataset_cache, DatasetCache};
use crate::util::version::user_agent;

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/ageron/handson-ml2/master/datasets/housing/housing.csv";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset contains no usable rows")]
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Fresh,
    Cached,
    Stale,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CachedPayload<T> {
    pub data: T,
    pub fetched_at: SystemTime,
    pub status: CacheStatus,
}

impl<T> CachedPayload<T> {
    fn new(data: T, fetched_at: SystemTime, status: CacheStatus) -> Self {
        Self {
            data,
            fetched_at,
            status,
        }
    }

    /// RFC 3339 timestamp of when the data was downloaded.
    pub fn fetched_at_label(&self) -> Option<String> {
        OffsetDateTime::from(self.fetched_at).format(&Rfc3339).ok()
    }
}

pub type DatasetPayload = CachedPayload<Arc<Vec<HousingRecord>>>;

#[derive(Clone)]
pub struct DatasetClient {
    http: Client,
    source: Url,
    cache_file: PathBuf,
    memory: Arc<Mutex<Option<DatasetCache>>>,
}

impl DatasetClient {
    pub fn new() -> Result<Self, DatasetError> {
        Self::with_source(DEFAULT_SOURCE_URL, cache_path())
    }

    pub fn with_source(source: &str, cache_file: PathBuf) -> Result<Self, DatasetError> {
        let source = Url::parse(source)?;
        let http = Client::builder()
            .user_agent(user_agent())
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            source,
            cache_file,
            memory: Arc::new(Mutex::new(None)),
        })
    }

    pub async fn get_dataset(&self) -> Result<DatasetPayload, DatasetError> {
        {
            let memory = self.memory.lock().await;
            if let Some(cache) = memory.as_ref().filter(|cache| !cache.is_expired()) {
                return Ok(payload(cache, CacheStatus::Cached));
            }
        }

        let on_disk = load_dataset_cache(&self.cache_file);
        if let Some(cache) = on_disk.as_ref().filter(|cache| !cache.is_expired()) {
            let result = payload(cache, CacheStatus::Cached);
            *self.memory.lock().await = Some(cache.clone());
            return Ok(result);
        }

        match self.fetch().await {
            Ok(records) => {
                let cache = DatasetCache::new(self.source.to_string(), records);
                if let Err(err) = save_dataset_cache(&self.cache_file, &cache) {
                    warn!("Failed to save dataset cache: {err}");
                }
                let result = payload(&cache, CacheStatus::Fresh);
                *self.memory.lock().await = Some(cache);
                Ok(result)
            }
            Err(err) => {
                let stale = self.memory.lock().await.clone().or(on_disk);
                match stale {
                    Some(cache) => {
                        warn!(
                            "Dataset download failed ({err}); serving cache aged {}",
                            cache.age_string()
                        );
                        Ok(payload(&cache, CacheStatus::Stale))
                    }
                    None => Err(err),
                }
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<HousingRecord>, DatasetError> {
        info!("Downloading housing dataset from {}", self.source);
        let body = self
            .http
            .get(self.source.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let records = parse_housing_csv(&body)?;
        info!("Parsed {} housing records", records.len());
        Ok(records)
    }
}

fn payload(cache: &DatasetCache, status: CacheStatus) -> DatasetPayload {
    let fetched_at = UNIX_EPOCH + Duration::from_secs(cache.cached_at);
    CachedPayload::new(Arc::new(cache.records.clone()), fetched_at, status)
}

/// Parses the housing CSV, dropping rows that cannot be derived.
pub fn parse_housing_csv(content: &str) -> Result<Vec<HousingRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    let mut skipped = 0_usize;
    for row in reader.deserialize::<RawHousingRow>() {
        match HousingRecord::from_raw(&row?) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        info!("Skipped {skipped} incomplete housing rows");
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(records)
}
