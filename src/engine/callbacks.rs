use crate::core::geo::LatLngBounds;
use crate::core::item::GeoItem;

type ItemSelectedFn = Box<dyn Fn(Option<&GeoItem>) + Send + Sync>;
type InteractionStartFn = Box<dyn Fn() + Send + Sync>;
type ViewportChangeFn = Box<dyn Fn(&LatLngBounds, f64) + Send + Sync>;
type MapClickedFn = Box<dyn Fn() + Send + Sync>;

/// Typed bag of consumer callbacks
///
/// All callbacks fire synchronously from within widget event handling.
/// Unset callbacks are simply skipped.
#[derive(Default)]
pub struct MapCallbacks {
    /// A singleton marker was activated, or selection was cleared by a
    /// bare map click (`None`)
    pub on_item_selected: Option<ItemSelectedFn>,
    /// A pan or zoom gesture began
    pub on_interaction_start: Option<InteractionStartFn>,
    /// A pan or zoom gesture completed; consumers typically re-query
    /// their item supply for the new bounds
    pub on_viewport_change: Option<ViewportChangeFn>,
    /// A bare click on the map background
    pub on_map_clicked: Option<MapClickedFn>,
}

impl MapCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_item_selected<F>(mut self, callback: F) -> Self
    where
        F: Fn(Option<&GeoItem>) + Send + Sync + 'static,
    {
        self.on_item_selected = Some(Box::new(callback));
        self
    }

    pub fn on_interaction_start<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_interaction_start = Some(Box::new(callback));
        self
    }

    pub fn on_viewport_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&LatLngBounds, f64) + Send + Sync + 'static,
    {
        self.on_viewport_change = Some(Box::new(callback));
        self
    }

    pub fn on_map_clicked<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_map_clicked = Some(Box::new(callback));
        self
    }

    pub(crate) fn emit_item_selected(&self, item: Option<&GeoItem>) {
        if let Some(callback) = &self.on_item_selected {
            callback(item);
        }
    }

    pub(crate) fn emit_interaction_start(&self) {
        if let Some(callback) = &self.on_interaction_start {
            callback();
        }
    }

    pub(crate) fn emit_viewport_change(&self, bounds: &LatLngBounds, zoom: f64) {
        if let Some(callback) = &self.on_viewport_change {
            callback(bounds, zoom);
        }
    }

    pub(crate) fn emit_map_clicked(&self) {
        if let Some(callback) = &self.on_map_clicked {
            callback();
        }
    }
}
