use crate::core::geo::{LatLng, Point};
use crate::geolocate::LocateOptions;
use crate::spatial::clustering::ClusteringConfig;
use serde::{Deserialize, Serialize};

/// A previously persisted camera position, restored on init unless the
/// consumer asks for it to be ignored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedViewport {
    pub center: LatLng,
    pub zoom: f64,
}

/// Options recognized at engine init time
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Initial camera center, used when no saved viewport applies
    pub center: LatLng,
    /// Initial zoom level
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Container size in pixels
    pub size: Point,
    /// Camera position persisted by the consumer from a previous session
    pub saved_viewport: Option<SavedViewport>,
    /// Ignore the saved viewport in favor of the supplied center, e.g. when
    /// centering on a single freshly picked location
    pub ignore_saved_viewport: bool,
    /// Client is a mobile device; triggers an opportunistic best-effort
    /// geolocation fix on first load
    pub mobile: bool,
    pub clustering: ClusteringConfig,
    pub locate: LocateOptions,
    /// Zoom applied when recentering on a geolocation fix; current zoom is
    /// kept when unset
    pub locate_zoom: Option<f64>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            center: LatLng::new(0.0, 0.0),
            zoom: 2.0,
            min_zoom: 2.0,
            max_zoom: 18.0,
            size: Point::new(800.0, 600.0),
            saved_viewport: None,
            ignore_saved_viewport: false,
            mobile: false,
            clustering: ClusteringConfig::default(),
            locate: LocateOptions::default(),
            locate_zoom: None,
        }
    }
}

impl EngineOptions {
    /// The camera the engine starts with: the saved viewport when present
    /// and not ignored, otherwise the configured center and zoom
    pub fn initial_camera(&self) -> (LatLng, f64) {
        match self.saved_viewport {
            Some(saved) if !self.ignore_saved_viewport => (saved.center, saved.zoom),
            _ => (self.center, self.zoom),
        }
    }
}
