//! Persistent on-disk caching for the country directory with a TTL.

use std::{
    fs,
    path::PathBuf,
    sync::OnceLock,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::domain::Country;

const CACHE_DIR: &str = "cargo-cover";
const CACHE_FILENAME: &str = "country_cache.json";

/// Cache TTL: 7 days. The country list practically never changes.
pub const COUNTRY_CACHE_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryCache {
    /// Unix timestamp (seconds) when this cache was created.
    pub cached_at: u64,
    pub countries: Vec<Country>,
}

impl CountryCache {
    pub fn new(countries: Vec<Country>) -> Self {
        let cached_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            cached_at,
            countries,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.age() > COUNTRY_CACHE_TTL
    }

    pub fn age(&self) -> Duration {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Duration::from_secs(now.saturating_sub(self.cached_at))
    }

    pub fn fetched_at(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.cached_at)
    }

    /// Human-readable age string.
    pub fn age_string(&self) -> String {
        humanize_secs(self.age().as_secs())
    }

    pub fn cached_at_rfc3339(&self) -> Option<String> {
        let secs = i64::try_from(self.cached_at).ok()?;
        OffsetDateTime::from_unix_timestamp(secs)
            .ok()?
            .format(&Rfc3339)
            .ok()
    }
}

pub fn humanize_secs(secs: u64) -> String {
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

fn cache_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CACHE_DIR)
            .join(CACHE_FILENAME)
    })
    .clone()
}

/// Load the country cache from disk, if it exists. Expired copies are still
/// returned; callers decide whether a stale list beats no list.
pub fn load_country_cache() -> Option<CountryCache> {
    let path = cache_path();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no country cache on disk");
        return None;
    }

    match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str::<CountryCache>(&content) {
            Ok(cache) => {
                tracing::debug!(
                    countries = cache.countries.len(),
                    age = %cache.age_string(),
                    "loaded country cache"
                );
                Some(cache)
            }
            Err(e) => {
                tracing::warn!("failed to parse country cache: {e}");
                None
            }
        },
        Err(e) => {
            tracing::warn!("failed to read country cache: {e}");
            None
        }
    }
}

pub fn save_country_cache(cache: &CountryCache) -> Result<(), std::io::Error> {
    let path = cache_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string(cache)?;
    fs::write(&path, content)?;
    tracing::info!(
        countries = cache.countries.len(),
        path = %path.display(),
        "saved country cache"
    );
    Ok(())
}

pub fn clear_country_cache() -> Result<(), std::io::Error> {
    let path = cache_path();
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}
