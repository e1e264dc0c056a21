//! Map engine orchestration
//!
//! Owns the native widget's lifecycle and wires its events into the
//! rebuild pipeline: viewport filter → clustering → marker
//! reconciliation. One engine instance serves one mounted map view;
//! construct a fresh instance per mount and call [`MapEngine::destroy`]
//! before tearing the view down.

pub mod callbacks;

use crate::core::{config::EngineOptions, geo::LatLng, item::GeoItem, viewport::Viewport};
use crate::geolocate::{Geolocator, Unsupported};
use crate::markers::{lifecycle::MarkerLifecycle, MarkerSpec, RenderedKind};
use crate::spatial::{clustering::Clusterer, filter::items_in_bounds};
use crate::widget::{
    events::{Activation, MapEvent},
    MapWidget, MarkerHandle,
};
use callbacks::MapCallbacks;
use instant::Instant;

/// Lifecycle states of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Ready,
    Destroyed,
}

/// The map engine
///
/// All widget mutation happens synchronously inside the operations below;
/// the widget handle and the rendered marker set are owned exclusively by
/// this instance.
pub struct MapEngine {
    state: EngineState,
    options: EngineOptions,
    viewport: Viewport,
    widget: Option<Box<dyn MapWidget>>,
    locator: Box<dyn Geolocator>,
    items: Vec<GeoItem>,
    selection: Option<String>,
    callbacks: MapCallbacks,
    clusterer: Clusterer,
    lifecycle: MarkerLifecycle,
    location_marker: Option<MarkerHandle>,
    last_fix: Option<(LatLng, Instant)>,
}

impl MapEngine {
    /// Creates an engine without geolocation support
    pub fn new(options: EngineOptions) -> Self {
        Self::with_locator(options, Box::new(Unsupported))
    }

    /// Creates an engine backed by the given device locator
    pub fn with_locator(options: EngineOptions, locator: Box<dyn Geolocator>) -> Self {
        let (center, zoom) = options.initial_camera();
        let mut viewport = Viewport::new(center, zoom, options.size);
        viewport.set_zoom_limits(options.min_zoom, options.max_zoom);

        let clusterer = Clusterer::new(options.clustering.clone());

        Self {
            state: EngineState::Uninitialized,
            options,
            viewport,
            widget: None,
            locator,
            items: Vec::new(),
            selection: None,
            callbacks: MapCallbacks::default(),
            clusterer,
            lifecycle: MarkerLifecycle::new(),
            location_marker: None,
            last_fix: None,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The engine's view of the camera; updated from confirmed widget
    /// events and programmatic requests
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Number of markers currently rendered from cluster groups
    pub fn marker_count(&self) -> usize {
        self.lifecycle.len()
    }

    /// Takes ownership of the widget and performs the initial rebuild
    ///
    /// Executes at most once: calling `init` while already Ready or after
    /// `destroy` is a logged no-op. On a mobile profile a single
    /// best-effort geolocation fix is attempted after the first render;
    /// its failure is ignored.
    pub fn init(
        &mut self,
        widget: Box<dyn MapWidget>,
        items: Vec<GeoItem>,
        selection: Option<String>,
        callbacks: MapCallbacks,
    ) {
        if self.state != EngineState::Uninitialized {
            log::debug!("init called in state {:?}, ignoring", self.state);
            return;
        }

        self.widget = Some(widget);
        self.items = items;
        self.selection = selection;
        self.callbacks = callbacks;

        let (center, zoom) = (self.viewport.center, self.viewport.zoom);
        self.push_camera_to_widget(center, zoom);
        self.rebuild();
        self.state = EngineState::Ready;

        if self.options.mobile {
            self.go_to_current_location();
        }
    }

    /// Replaces the working item set and selection, then rebuilds without
    /// touching the camera
    pub fn update_data(&mut self, items: Vec<GeoItem>, selection: Option<String>) {
        if self.state != EngineState::Ready {
            log::debug!("update_data called in state {:?}, ignoring", self.state);
            return;
        }

        self.items = items;
        self.selection = selection;
        self.rebuild();
    }

    /// Replaces the consumer callbacks
    pub fn set_callbacks(&mut self, callbacks: MapCallbacks) {
        self.callbacks = callbacks;
    }

    /// Feeds one widget event through the engine
    pub fn handle_event(&mut self, event: MapEvent) {
        if self.state != EngineState::Ready {
            log::debug!("event {event:?} in state {:?}, ignoring", self.state);
            return;
        }

        match event {
            MapEvent::MoveStart | MapEvent::ZoomStart => {
                self.callbacks.emit_interaction_start();
            }
            MapEvent::MoveEnd { center, zoom } | MapEvent::ZoomEnd { center, zoom } => {
                self.viewport.set_center(center);
                self.viewport.set_zoom(zoom);
                self.rebuild();
                self.callbacks
                    .emit_viewport_change(&self.viewport.bounds(), self.viewport.zoom);
            }
            MapEvent::Click { .. } => {
                self.callbacks.emit_item_selected(None);
                self.callbacks.emit_map_clicked();
            }
            MapEvent::MarkerActivated { handle, activation } => {
                self.activate_marker(handle, activation);
            }
            MapEvent::Resize { size } => {
                self.viewport.set_size(size);
                self.rebuild();
            }
        }
    }

    /// Programmatic camera move, e.g. "zoom to this item"
    ///
    /// The rebuild follows when the widget confirms with its own
    /// move/zoom-end event.
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        if self.state != EngineState::Ready {
            log::debug!("set_view called in state {:?}, ignoring", self.state);
            return;
        }
        self.viewport.set_center(center);
        self.viewport.set_zoom(zoom);
        let (center, zoom) = (self.viewport.center, self.viewport.zoom);
        self.push_camera_to_widget(center, zoom);
    }

    /// Recenters the camera on the device position, best effort
    ///
    /// A fix younger than the configured maximum age is reused without a
    /// new request. Denied permission, timeouts, and missing geolocation
    /// support all degrade to "the camera does not move"; this never
    /// returns an error. Racing requests are harmless: the last fix to
    /// resolve recenters again.
    pub fn go_to_current_location(&mut self) {
        if self.state != EngineState::Ready {
            log::debug!("go_to_current_location in state {:?}, ignoring", self.state);
            return;
        }

        let locate = self.options.locate;
        let fix = match self.fresh_cached_fix() {
            Some(cached) => cached,
            None => match self.locator.current_position(&locate) {
                Ok(fix) => {
                    self.last_fix = Some((fix, Instant::now()));
                    fix
                }
                Err(e) => {
                    log::debug!("geolocation failed: {e}");
                    return;
                }
            },
        };

        let zoom = self.options.locate_zoom.unwrap_or(self.viewport.zoom);
        self.viewport.set_center(fix);
        self.viewport.set_zoom(zoom);
        let (center, zoom) = (self.viewport.center, self.viewport.zoom);
        self.push_camera_to_widget(center, zoom);
        self.place_location_marker(fix);
    }

    /// Releases every marker, the geolocation state, and the widget
    ///
    /// Idempotent: repeated calls are no-ops. A destroyed engine is never
    /// revived; mount a fresh instance instead.
    pub fn destroy(&mut self) {
        if self.state == EngineState::Destroyed {
            return;
        }

        if let Some(mut widget) = self.widget.take() {
            self.lifecycle.clear(widget.as_mut());
            if let Some(handle) = self.location_marker.take() {
                if let Err(e) = widget.remove_marker(handle) {
                    log::debug!("ignoring location marker removal failure: {e}");
                }
            }
            widget.destroy();
        }

        self.last_fix = None;
        self.state = EngineState::Destroyed;
    }

    /// Full rebuild: filter to the viewport, cluster at the current zoom,
    /// reconcile markers
    fn rebuild(&mut self) {
        let Some(widget) = self.widget.as_mut() else {
            return;
        };

        let visible = items_in_bounds(&self.items, &self.viewport.bounds());
        let viewport = &self.viewport;
        let project = |position: &LatLng| viewport.lat_lng_to_pixel(position);
        let groups = self.clusterer.cluster(&visible, &project, viewport.zoom);
        self.lifecycle
            .rebuild(widget.as_mut(), &groups, self.selection.as_deref());
    }

    fn activate_marker(&mut self, handle: MarkerHandle, activation: Activation) {
        let Some(rendered) = self.lifecycle.find(handle) else {
            // Stale handle from a previous rebuild, or the location marker
            return;
        };

        match rendered.kind.clone() {
            RenderedKind::Item { item } => {
                let activates = match activation {
                    Activation::Pointer => true,
                    Activation::Key(key) => key.activates(),
                };
                if activates {
                    self.callbacks.emit_item_selected(Some(&item));
                }
            }
            RenderedKind::Cluster { bounds, .. } => {
                // Clusters are pointer-only; keyboard activation is ignored
                if activation == Activation::Pointer {
                    let mut target = self.viewport.clone();
                    target.fit_bounds(&bounds, None);
                    let (center, zoom) = (target.center, target.zoom);
                    self.viewport.set_center(center);
                    self.viewport.set_zoom(zoom);
                    self.push_camera_to_widget(center, zoom);
                }
            }
        }
    }

    fn push_camera_to_widget(&mut self, center: LatLng, zoom: f64) {
        if let Some(widget) = self.widget.as_mut() {
            if let Err(e) = widget.set_view(center, zoom) {
                log::warn!("camera request rejected by widget: {e}");
            }
        }
    }

    fn fresh_cached_fix(&self) -> Option<LatLng> {
        let (fix, taken_at) = self.last_fix?;
        (taken_at.elapsed() <= self.options.locate.max_age).then_some(fix)
    }

    fn place_location_marker(&mut self, position: LatLng) {
        let Some(widget) = self.widget.as_mut() else {
            return;
        };

        if let Some(handle) = self.location_marker.take() {
            if let Err(e) = widget.remove_marker(handle) {
                log::debug!("ignoring location marker removal failure: {e}");
            }
        }

        match widget.add_marker(&MarkerSpec::location_dot(position)) {
            Ok(handle) => self.location_marker = Some(handle),
            Err(e) => log::warn!("location marker creation failed: {e}"),
        }
    }
}
