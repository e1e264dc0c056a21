pub mod clustering;
pub mod filter;

use crate::core::geo::{LatLng, Point};

/// Maps a geographic coordinate to screen pixels for the current map state
///
/// Implemented for any `Fn(&LatLng) -> Point`, so the clustering algorithm
/// can be driven by a closure over the live viewport in production and by
/// a plain fake projection in tests.
pub trait Projector {
    fn project(&self, position: &LatLng) -> Point;
}

impl<F> Projector for F
where
    F: Fn(&LatLng) -> Point,
{
    fn project(&self, position: &LatLng) -> Point {
        self(position)
    }
}
