//! Thin asynchronous client for the REST Countries directory.
//!
//! - Fetches ISO alpha-2 codes and common names for the country selects.
//! - Keeps a 60-minute in-memory cache and a 7-day disk cache.
//! - Never leaves the form without options: falls back to the static list.

use std::{
    sync::Arc,
    time::{Duration, SystemTime},
};

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::{fallback_countries, sort_countries, Country};
use crate::infra::cache::{load_country_cache, save_country_cache, CountryCache};

const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1/";
const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("cargo-cover/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum CountryClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("country directory returned no entries")]
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Fresh,
    Cached,
    Stale,
    /// Built-in list; the directory was unreachable and nothing was cached.
    Fallback,
}

#[derive(Clone, Debug)]
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
}

#[derive(Default)]
struct CountryCacheState {
    countries: Option<Cached<Vec<Country>>>,
}

#[derive(Clone)]
pub struct CountryClient {
    http: Client,
    base_url: Url,
    cache: Arc<Mutex<CountryCacheState>>,
    ttl: Duration,
    use_disk: bool,
}

impl CountryClient {
    pub fn new() -> Result<Self, CountryClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base: &str) -> Result<Self, CountryClientError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url,
            cache: Arc::new(Mutex::new(CountryCacheState::default())),
            ttl: DEFAULT_TTL,
            use_disk: true,
        })
    }

    #[cfg(test)]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Skip the on-disk cache entirely (reads and writes).
    #[cfg(test)]
    pub fn without_disk_cache(mut self) -> Self {
        self.use_disk = false;
        self
    }

    /// Country list for the selects. Always succeeds; see [`CacheStatus`] for
    /// where the data came from.
    pub async fn load_countries(&self) -> CachedPayload<Vec<Country>> {
        match self.get_countries().await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!("using fallback country list: {err}");
                CachedPayload::new(
                    fallback_country_list(),
                    SystemTime::now(),
                    CacheStatus::Fallback,
                )
            }
        }
    }

    pub async fn get_countries(&self) -> Result<CachedPayload<Vec<Country>>, CountryClientError> {
        if let Some(payload) = self.cached_countries().await {
            return Ok(payload);
        }

        let disk = if self.use_disk {
            load_country_cache()
        } else {
            None
        };
        if let Some(disk_cache) = disk.as_ref().filter(|c| !c.is_expired()) {
            tracing::debug!(age = %disk_cache.age_string(), "serving countries from disk cache");
            let payload = self
                .store_countries(disk_cache.countries.clone(), disk_cache.fetched_at(), CacheStatus::Cached)
                .await;
            return Ok(payload);
        }

        match self.fetch_countries().await {
            Ok(data) => {
                tracing::info!(countries = data.len(), "fetched country directory");
                if self.use_disk {
                    if let Err(e) = save_country_cache(&CountryCache::new(data.clone())) {
                        tracing::warn!("failed to save country cache: {e}");
                    }
                }
                Ok(self
                    .store_countries(data, SystemTime::now(), CacheStatus::Fresh)
                    .await)
            }
            Err(error) => {
                tracing::warn!("country directory request failed: {error}");
                if let Some(stale) = self.cached_countries_stale().await {
                    return Ok(stale);
                }
                if let Some(disk_cache) = disk {
                    return Ok(CachedPayload::new(
                        disk_cache.countries.clone(),
                        disk_cache.fetched_at(),
                        CacheStatus::Stale,
                    ));
                }
                Err(error)
            }
        }
    }

    pub async fn clear_cache(&self) {
        self.cache.lock().await.countries = None;
    }

    async fn fetch_countries(&self) -> Result<Vec<Country>, CountryClientError> {
        let mut url = self.url("all")?;
        url.query_pairs_mut().append_pair("fields", "name,cca2");
        tracing::debug!(%url, "requesting country directory");

        let entries: Vec<CountryDto> = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let countries = countries_from_dtos(entries);
        if countries.is_empty() {
            return Err(CountryClientError::Empty);
        }
        Ok(countries)
    }

    async fn cached_countries(&self) -> Option<CachedPayload<Vec<Country>>> {
        let cache = self.cache.lock().await;
        cache
            .countries
            .as_ref()
            .and_then(|entry| entry.if_fresh(self.ttl))
    }

    async fn cached_countries_stale(&self) -> Option<CachedPayload<Vec<Country>>> {
        let cache = self.cache.lock().await;
        cache.countries.as_ref().map(Cached::stale)
    }

    async fn store_countries(
        &self,
        data: Vec<Country>,
        fetched_at: SystemTime,
        status: CacheStatus,
    ) -> CachedPayload<Vec<Country>> {
        let payload = CachedPayload::new(data.clone(), fetched_at, status);
        let mut cache = self.cache.lock().await;
        cache.countries = Some(Cached::new(data, fetched_at));
        payload
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

struct Cached<T> {
    value: T,
    fetched_at: SystemTime,
}

impl<T: Clone> Cached<T> {
    fn new(value: T, fetched_at: SystemTime) -> Self {
        Self { value, fetched_at }
    }

    fn if_fresh(&self, ttl: Duration) -> Option<CachedPayload<T>> {
        if self
            .fetched_at
            .elapsed()
            .map(|elapsed| elapsed <= ttl)
            .unwrap_or(false)
        {
            Some(CachedPayload::new(
                self.value.clone(),
                self.fetched_at,
                CacheStatus::Cached,
            ))
        } else {
            None
        }
    }

    fn stale(&self) -> CachedPayload<T> {
        CachedPayload::new(self.value.clone(), self.fetched_at, CacheStatus::Stale)
    }
}

pub fn fallback_country_list() -> Vec<Country> {
    fallback_countries()
        .into_iter()
        .map(|(code, label)| Country::new(code, label))
        .collect()
}

#[derive(Debug, Deserialize)]
struct CountryDto {
    #[serde(default)]
    cca2: Option<String>,
    #[serde(default)]
    name: Option<CountryNameDto>,
}

#[derive(Debug, Deserialize)]
struct CountryNameDto {
    #[serde(default)]
    common: Option<String>,
}

fn countries_from_dtos(entries: Vec<CountryDto>) -> Vec<Country> {
    let mut countries: Vec<Country> = entries
        .into_iter()
        .filter_map(|dto| {
            let code = dto.cca2?.trim().to_ascii_uppercase();
            if code.is_empty() {
                return None;
            }
            let label = dto
                .name
                .and_then(|name| name.common)
                .map(|common| common.trim().to_string())
                .filter(|common| !common.is_empty())
                .unwrap_or_else(|| code.clone());
            Some(Country { code, label })
        })
        .collect();
    sort_countries(&mut countries);
    countries
}
