//! Device geolocation seam
//!
//! The engine only ever asks for a one-shot position fix; continuous
//! watches are the consumer's business. Every failure mode is recoverable:
//! the engine logs and leaves the camera where it was.

use crate::core::geo::LatLng;
use crate::prelude::Duration;

/// Parameters for a one-shot position request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocateOptions {
    /// How long a fix may take before it counts as failed
    pub timeout: Duration,
    /// A cached fix younger than this is reused without touching the GPS
    pub max_age: Duration,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(7),
            max_age: Duration::from_secs(120),
        }
    }
}

/// Ways a position request can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeolocateError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("position request timed out")]
    Timeout,

    #[error("geolocation unavailable on this device")]
    Unavailable,
}

/// One-shot device positioning
pub trait Geolocator {
    fn current_position(
        &mut self,
        options: &LocateOptions,
    ) -> std::result::Result<LatLng, GeolocateError>;
}

/// Null locator for environments without a geolocation API
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl Geolocator for Unsupported {
    fn current_position(
        &mut self,
        _options: &LocateOptions,
    ) -> std::result::Result<LatLng, GeolocateError> {
        Err(GeolocateError::Unavailable)
    }
}
