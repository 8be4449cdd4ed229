//! Location resolution
//!
//! Turns ambiguous user location input into coordinates usable by the
//! query engine. Sources, in fallback order: device geolocation, IP
//! geolocation, then manual entry (city name or pincode). Manual entry is
//! always an explicit user action; the automatic chain stops at IP.

pub mod cities;
pub mod device;
pub mod ip;

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use device::{DeviceError, DeviceLocator};
use ip::IpLocator;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

/// How a location was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    /// Live device geolocation
    Device,
    /// IP geolocation (city-level accuracy)
    Ip,
    /// Supported-city table (named city or pincode)
    City,
}

impl std::fmt::Display for LocationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationSource::Device => write!(f, "device"),
            LocationSource::Ip => write!(f, "ip"),
            LocationSource::City => write!(f, "city"),
        }
    }
}

/// A resolved location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub coords: Coordinates,
    pub source: LocationSource,
    /// Human-readable description of the resolved place
    pub label: String,
}

/// Get the IP location service, honoring the configured cache toggle
pub fn get_ip_locator(config: &crate::config::Config) -> IpLocator {
    if config.location.ip_cache {
        IpLocator::new()
    } else {
        IpLocator::without_cache()
    }
}

/// Resolve via device geolocation, falling back to IP geolocation
///
/// Applies the default device timeout; see [`resolve_auto_with`] for the
/// config-driven variant.
pub async fn resolve_auto<L: DeviceLocator>(
    device: &L,
    ip: &IpLocator,
) -> Result<ResolvedLocation> {
    let timeout =
        std::time::Duration::from_secs(crate::constants::resolve::DEVICE_TIMEOUT_SECS);
    resolve_auto_with(device, ip, timeout).await
}

/// Resolve via device geolocation, falling back to IP geolocation
///
/// The only automatic chaining in the resolver: each device failure kind
/// (permission denied, position unavailable, timeout) falls through to the
/// IP lookup. If that also fails the chain is terminal and the caller must
/// offer manual entry. A device permission denial is only surfaced when
/// both steps fail.
pub async fn resolve_auto_with<L: DeviceLocator>(
    device: &L,
    ip: &IpLocator,
    timeout: std::time::Duration,
) -> Result<ResolvedLocation> {
    let denied = match device::resolve_from_device_with(device, timeout).await {
        Ok(location) => return Ok(location),
        Err(e) => {
            warn!(error = %e, "device geolocation failed, falling back to IP");
            matches!(e, DeviceError::PermissionDenied)
        }
    };

    match ip.locate().await {
        Ok(location) => {
            info!(label = %location.label, "resolved location via IP");
            Ok(location)
        }
        Err(e) => {
            // The denial stays quiet while the chain can still recover; it
            // is only surfaced once the chain is exhausted.
            if denied {
                warn!(error = %e, "IP fallback failed after permission denial");
                Err(Error::PermissionDenied)
            } else {
                Err(Error::LocationUnavailable(format!(
                    "IP lookup failed: {}",
                    e
                )))
            }
        }
    }
}

/// Last-request-wins guard for in-flight location requests
///
/// A new request supersedes any older one: a late result carrying a
/// superseded ticket is discarded rather than overwriting newer state.
/// In-flight calls are not cancelled, only their results dropped.
#[derive(Debug, Default)]
pub struct RequestSequence {
    current: AtomicU64,
}

/// Ticket identifying one location request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier tickets
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the ticket still belongs to the newest request
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }

    /// Accept a result only if its ticket has not been superseded
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            None
        }
    }
}
