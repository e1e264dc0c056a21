//! Prelude module for common cragmap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use cragmap::prelude::*;`

pub use crate::core::{
    config::{EngineOptions, SavedViewport},
    geo::{LatLng, LatLngBounds, Point},
    item::GeoItem,
    viewport::Viewport,
};

pub use crate::engine::{callbacks::MapCallbacks, EngineState, MapEngine};

pub use crate::geolocate::{GeolocateError, Geolocator, LocateOptions};

pub use crate::markers::{
    lifecycle::MarkerLifecycle, MarkerAppearance, MarkerSpec, RenderedKind, RenderedMarker,
};

pub use crate::spatial::{
    clustering::{ClusterGroup, Clusterer, ClusteringConfig},
    filter::items_in_bounds,
    Projector,
};

pub use crate::widget::{
    events::{Activation, KeyCode, MapEvent},
    MapWidget, MarkerHandle,
};

pub use crate::{Error, Result};

pub use std::time::Duration;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
