//! IP-based geolocation
//!
//! Uses ip-api.com with file-based caching. Accuracy is city-level, which
//! is good enough to seed a 50 km search radius.

use crate::constants::api::IP_API_URL;
use crate::constants::cache::{IP_LOCATION_CACHE_FILE, IP_LOCATION_TTL_SECS};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::geo::{LocationSource, ResolvedLocation};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

/// IP location service with caching
#[derive(Debug)]
pub struct IpLocator {
    client: reqwest::Client,
    endpoint: String,
    cache_path: Option<PathBuf>,
}

/// ip-api.com response
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    country: Option<String>,
}

/// Cached location data
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedLocation {
    coords: Coordinates,
    label: String,
    timestamp: u64,
}

impl IpLocator {
    /// Create a new IP locator with default cache path
    pub fn new() -> Self {
        let cache_path = dirs::cache_dir()
            .map(|p| p.join("justicaa-discovery").join(IP_LOCATION_CACHE_FILE));

        Self {
            client: reqwest::Client::new(),
            endpoint: IP_API_URL.to_string(),
            cache_path,
        }
    }

    /// Create an IP locator with a specific cache path
    pub fn with_cache_path(cache_path: PathBuf) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: IP_API_URL.to_string(),
            cache_path: Some(cache_path),
        }
    }

    /// Create an IP locator without caching
    pub fn without_cache() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: IP_API_URL.to_string(),
            cache_path: None,
        }
    }

    /// Override the geolocation endpoint (tests, self-hosted mirrors)
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Get current location based on IP address
    ///
    /// Failure here is terminal for the automatic fallback chain; callers
    /// surface manual entry, they do not retry.
    pub async fn locate(&self) -> Result<ResolvedLocation> {
        if let Some(cached) = self.load_cache() {
            return Ok(cached);
        }

        let location = self.fetch_location().await?;
        self.save_cache(&location);

        Ok(location)
    }

    /// Fetch location from ip-api.com
    async fn fetch_location(&self) -> Result<ResolvedLocation> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| Error::LocationUnavailable(format!("IP location request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::LocationUnavailable(format!(
                "IP location API returned status: {}",
                response.status()
            )));
        }

        let data: IpApiResponse = response.json().await.map_err(|e| {
            Error::LocationUnavailable(format!("Failed to parse IP location response: {}", e))
        })?;

        if data.status != "success" {
            return Err(Error::LocationUnavailable(
                "IP location lookup failed".to_string(),
            ));
        }

        let lat = data
            .lat
            .ok_or_else(|| Error::LocationUnavailable("No latitude in response".to_string()))?;
        let lng = data
            .lon
            .ok_or_else(|| Error::LocationUnavailable("No longitude in response".to_string()))?;

        let label = [data.city, data.region_name, data.country]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");

        Ok(ResolvedLocation {
            coords: Coordinates::new(lat, lng),
            source: LocationSource::Ip,
            label: if label.is_empty() {
                "Unknown Location".to_string()
            } else {
                label
            },
        })
    }

    /// Load cached location if valid
    fn load_cache(&self) -> Option<ResolvedLocation> {
        let cache_path = self.cache_path.as_ref()?;

        if !cache_path.exists() {
            return None;
        }

        let content = fs::read_to_string(cache_path).ok()?;
        let cached: CachedLocation = serde_json::from_str(&content).ok()?;

        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .ok()?
            .as_secs();

        // saturating: a future timestamp (clock rollback, hand-edited file)
        // must not underflow
        if now.saturating_sub(cached.timestamp) < IP_LOCATION_TTL_SECS {
            Some(ResolvedLocation {
                coords: cached.coords,
                source: LocationSource::Ip,
                label: cached.label,
            })
        } else {
            None
        }
    }

    /// Save location to cache
    fn save_cache(&self, location: &ResolvedLocation) {
        let Some(cache_path) = &self.cache_path else {
            return;
        };

        if let Some(parent) = cache_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        let timestamp = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let cached = CachedLocation {
            coords: location.coords,
            label: location.label.clone(),
            timestamp,
        };

        if let Ok(content) = serde_json::to_string_pretty(&cached) {
            let _ = fs::write(cache_path, content);
        }
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        if let Some(cache_path) = &self.cache_path {
            let _ = fs::remove_file(cache_path);
        }
    }

    /// Get cache duration
    pub fn cache_duration() -> Duration {
        Duration::from_secs(IP_LOCATION_TTL_SECS)
    }
}

impl Default for IpLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ip_locator_creation() {
        let locator = IpLocator::new();
        assert!(locator.cache_path.is_some());
    }

    #[test]
    fn test_ip_locator_without_cache() {
        let locator = IpLocator::without_cache();
        assert!(locator.cache_path.is_none());
    }

    #[test]
    fn test_cache_operations() {
        let temp_dir = TempDir::new().unwrap();
        let cache_path = temp_dir.path().join("test_cache.json");
        let locator = IpLocator::with_cache_path(cache_path.clone());

        assert!(locator.load_cache().is_none());

        let location = ResolvedLocation {
            coords: Coordinates::new(26.2183, 78.1828),
            source: LocationSource::Ip,
            label: "Gwalior, Madhya Pradesh, India".to_string(),
        };
        locator.save_cache(&location);

        let loaded = locator.load_cache().unwrap();
        assert_eq!(loaded.coords.lat, 26.2183);
        assert_eq!(loaded.source, LocationSource::Ip);
        assert_eq!(loaded.label, "Gwalior, Madhya Pradesh, India");

        locator.clear_cache();
        assert!(locator.load_cache().is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_location_unavailable() {
        // Port 9 (discard) is closed on any sane host; the request fails
        // fast without touching the real service
        let locator = IpLocator::without_cache().with_endpoint("http://127.0.0.1:9/json");
        let err = locator.locate().await.unwrap_err();
        assert!(matches!(err, crate::error::Error::LocationUnavailable(_)));
    }

    #[test]
    fn test_future_timestamp_does_not_underflow() {
        let temp_dir = TempDir::new().unwrap();
        let cache_path = temp_dir.path().join("future_cache.json");
        let locator = IpLocator::with_cache_path(cache_path.clone());

        let cached = CachedLocation {
            coords: Coordinates::new(26.2183, 78.1828),
            label: "Gwalior".to_string(),
            timestamp: u64::MAX,
        };
        fs::write(&cache_path, serde_json::to_string(&cached).unwrap()).unwrap();

        // A clock-rollback cache entry counts as fresh rather than panicking
        let loaded = locator.load_cache().unwrap();
        assert_eq!(loaded.coords.lat, 26.2183);
    }

    #[test]
    fn test_stale_cache_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let cache_path = temp_dir.path().join("stale_cache.json");
        let locator = IpLocator::with_cache_path(cache_path.clone());

        let cached = CachedLocation {
            coords: Coordinates::new(26.2183, 78.1828),
            label: "Gwalior".to_string(),
            timestamp: 0,
        };
        fs::write(&cache_path, serde_json::to_string(&cached).unwrap()).unwrap();

        assert!(locator.load_cache().is_none());
    }

    #[test]
    fn test_cache_duration() {
        assert_eq!(IpLocator::cache_duration().as_secs(), 3600);
    }
}
