pub mod events;

use crate::core::geo::LatLng;
use crate::markers::MarkerSpec;
use crate::Result;

/// Opaque handle to a marker created by the native widget
///
/// Issued by the widget on `add_marker` and quoted back in
/// `MapEvent::MarkerActivated`; carries no meaning beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// The native map-library seam
///
/// The engine owns exactly one widget and is the only component allowed
/// to mutate it. Implementations wrap a concrete map library; tests use a
/// recording fake. Camera changes requested here are confirmed by the
/// widget through [`events::MapEvent`] move/zoom-end events.
pub trait MapWidget {
    /// Creates a marker and returns its handle
    fn add_marker(&mut self, spec: &MarkerSpec) -> Result<MarkerHandle>;

    /// Removes a marker; may fail if the underlying element is already
    /// detached, in which case callers are expected to proceed
    fn remove_marker(&mut self, handle: MarkerHandle) -> Result<()>;

    /// Requests a camera move; the widget confirms with a move/zoom-end
    /// event once the gesture or animation completes
    fn set_view(&mut self, center: LatLng, zoom: f64) -> Result<()>;

    /// Releases the underlying widget and all its resources
    fn destroy(&mut self);
}
