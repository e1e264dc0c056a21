//! # cragmap
//!
//! A clustered marker map engine for climbing-crag catalogs.
//!
//! The engine renders geo-located crag markers on a pan/zoomable map,
//! re-clusters them by screen-space proximity whenever the viewport
//! settles, and reconciles the rendered marker set across rebuilds
//! without leaking native widget handles. The native map widget, the
//! coordinate projection, and device geolocation sit behind small traits
//! so the algorithmic core runs in tests without a rendered map.

pub mod core;
pub mod engine;
pub mod geolocate;
pub mod markers;
pub mod prelude;
pub mod spatial;
pub mod widget;

// Re-export public API
pub use crate::core::{
    config::{EngineOptions, SavedViewport},
    geo::{LatLng, LatLngBounds, Point},
    item::GeoItem,
    viewport::Viewport,
};

pub use engine::{callbacks::MapCallbacks, EngineState, MapEngine};

pub use geolocate::{GeolocateError, Geolocator, LocateOptions};

pub use markers::{
    lifecycle::MarkerLifecycle, MarkerAppearance, MarkerSpec, RenderedKind, RenderedMarker,
};

pub use spatial::{
    clustering::{ClusterGroup, Clusterer, ClusteringConfig},
    filter::items_in_bounds,
    Projector,
};

pub use widget::{
    events::{Activation, KeyCode, MapEvent},
    MapWidget, MarkerHandle,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("widget error: {0}")]
    Widget(String),

    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
