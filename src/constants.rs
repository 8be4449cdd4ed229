//! Centralized constants for the justicaa-discovery crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers (WGS84 approximation)
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
}

/// Search constants
pub mod search {
    /// Radius applied when the query has resolved origin coordinates.
    ///
    /// Fixed by design; not user-configurable.
    pub const SEARCH_RADIUS_KM: f64 = 50.0;
}

/// External API endpoints
pub mod api {
    /// IP geolocation API (free, no key required)
    pub const IP_API_URL: &str = "http://ip-api.com/json";
}

/// Location resolution settings
pub mod resolve {
    /// Device geolocation timeout in seconds before falling back to IP
    pub const DEVICE_TIMEOUT_SECS: u64 = 10;
}

/// Cache settings
pub mod cache {
    /// IP location cache duration in seconds (1 hour)
    pub const IP_LOCATION_TTL_SECS: u64 = 3600;

    /// IP location cache file name
    pub const IP_LOCATION_CACHE_FILE: &str = "ip_location_cache.json";
}
