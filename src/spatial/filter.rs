//! Viewport filtering
//!
//! Narrows the full candidate set to the items visible in the current
//! viewport, without server round-trips while panning.

use crate::core::{geo::LatLngBounds, item::GeoItem};

/// Returns the items whose point lies within the given bounds
///
/// Pure function of its inputs. Items with missing or non-finite
/// coordinates are dropped silently. Bounds crossing the antimeridian
/// (west > east) are handled by the wrap-aware containment test.
pub fn items_in_bounds(items: &[GeoItem], bounds: &LatLngBounds) -> Vec<GeoItem> {
    items
        .iter()
        .filter(|item| item.has_valid_position() && bounds.contains(&item.position()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn item(id: &str, lat: f64, lng: f64) -> GeoItem {
        GeoItem::new(id, lat, lng, id)
    }

    #[test]
    fn test_filter_basic() {
        let bounds = LatLngBounds::from_coords(0.0, 0.0, 10.0, 10.0);
        let items = vec![item("inside", 5.0, 5.0), item("outside", 20.0, 5.0)];

        let visible = items_in_bounds(&items, &bounds);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "inside");
    }

    #[test]
    fn test_filter_edges_inclusive() {
        let bounds = LatLngBounds::from_coords(0.0, 0.0, 10.0, 10.0);
        let items = vec![item("sw", 0.0, 0.0), item("ne", 10.0, 10.0)];

        assert_eq!(items_in_bounds(&items, &bounds).len(), 2);
    }

    #[test]
    fn test_filter_drops_invalid_coordinates() {
        let bounds = LatLngBounds::from_coords(0.0, 0.0, 10.0, 10.0);
        let items = vec![
            item("ok", 5.0, 5.0),
            item("nan-lat", f64::NAN, 5.0),
            item("inf-lng", 5.0, f64::INFINITY),
        ];

        let visible = items_in_bounds(&items, &bounds);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "ok");
    }

    #[test]
    fn test_filter_wrapping_viewport() {
        // west=170, east=-170 crosses the antimeridian
        let bounds = LatLngBounds::from_coords(-10.0, 170.0, 10.0, -170.0);
        let items = vec![
            item("near-dateline-east", 0.0, 175.0),
            item("near-dateline-west", 0.0, -178.0),
            item("greenwich", 0.0, 0.0),
        ];

        let visible = items_in_bounds(&items, &bounds);

        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|i| i.id != "greenwich"));
    }

    #[test]
    fn test_filter_is_pure() {
        let bounds = LatLngBounds::from_coords(0.0, 0.0, 10.0, 10.0);
        let items = vec![item("a", 5.0, 5.0)];

        let first = items_in_bounds(&items, &bounds);
        let second = items_in_bounds(&items, &bounds);

        assert_eq!(first, second);
        assert_eq!(items.len(), 1);
    }
}
