use crate::core::geo::{LatLng, Point};
use crate::widget::MarkerHandle;

/// Keyboard key codes relevant to marker activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Enter,
    Space,
    Other(u32),
}

impl KeyCode {
    /// Enter and Space activate a focused marker
    pub fn activates(&self) -> bool {
        matches!(self, KeyCode::Enter | KeyCode::Space)
    }
}

/// How a marker was activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Click or tap
    Pointer,
    /// Key pressed while the marker has focus
    Key(KeyCode),
}

/// Events emitted by the native widget and fed to the engine
///
/// Move/zoom end events fire once per settled gesture, not per frame, and
/// carry the confirmed camera so the engine never reads widget internals.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// A pan gesture began
    MoveStart,
    /// A pan gesture completed
    MoveEnd { center: LatLng, zoom: f64 },
    /// A zoom gesture began
    ZoomStart,
    /// A zoom gesture completed
    ZoomEnd { center: LatLng, zoom: f64 },
    /// Bare click on the map background, not on a marker
    Click { position: LatLng },
    /// A marker was activated by pointer or keyboard
    MarkerActivated {
        handle: MarkerHandle,
        activation: Activation,
    },
    /// The container was resized
    Resize { size: Point },
}
