//! Device geolocation seam
//!
//! The platform (browser, mobile shell) owns the actual geolocation
//! capability; this module defines the trait the host implements and the
//! timeout policy applied on top of it.

use crate::constants::resolve::DEVICE_TIMEOUT_SECS;
use crate::coord::Coordinates;
use crate::geo::{LocationSource, ResolvedLocation};
use std::time::Duration;
use thiserror::Error;

/// Device geolocation failure kinds
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("timed out")]
    Timeout,
}

/// Trait for the platform geolocation capability
pub trait DeviceLocator: Send + Sync {
    /// Request the current position
    fn current_position(
        &self,
    ) -> impl std::future::Future<Output = Result<Coordinates, DeviceError>> + Send;
}

/// Resolve the current location from the device with the default timeout
///
/// A call that outlives [`DEVICE_TIMEOUT_SECS`] is treated as
/// [`DeviceError::Timeout`]; it is never left pending indefinitely.
pub async fn resolve_from_device<L: DeviceLocator>(
    device: &L,
) -> Result<ResolvedLocation, DeviceError> {
    resolve_from_device_with(device, Duration::from_secs(DEVICE_TIMEOUT_SECS)).await
}

/// Resolve the current location from the device, bounded by `timeout`
///
/// The timeout comes from `location.timeout_secs` in config
/// ([`LocationConfig::device_timeout`](crate::config::LocationConfig::device_timeout)).
pub async fn resolve_from_device_with<L: DeviceLocator>(
    device: &L,
    timeout: Duration,
) -> Result<ResolvedLocation, DeviceError> {
    let position = tokio::time::timeout(timeout, device.current_position())
        .await
        .map_err(|_| DeviceError::Timeout)??;

    Ok(ResolvedLocation {
        coords: position,
        source: LocationSource::Device,
        label: "Current location".to_string(),
    })
}

/// A locator that always reports a fixed position
///
/// Useful for UI previews and tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticDevice {
    coords: Coordinates,
}

impl StaticDevice {
    pub fn at(coords: Coordinates) -> Self {
        Self { coords }
    }
}

impl DeviceLocator for StaticDevice {
    async fn current_position(&self) -> Result<Coordinates, DeviceError> {
        Ok(self.coords)
    }
}

/// A locator that always fails with a fixed error
#[derive(Debug, Clone, Copy)]
pub struct FailingDevice {
    error: DeviceError,
}

impl FailingDevice {
    pub fn with(error: DeviceError) -> Self {
        Self { error }
    }
}

impl DeviceLocator for FailingDevice {
    async fn current_position(&self) -> Result<Coordinates, DeviceError> {
        Err(self.error)
    }
}
