pub mod lifecycle;

use crate::core::geo::{LatLng, LatLngBounds};
use crate::core::item::GeoItem;
use crate::spatial::clustering::ClusterGroup;
use crate::widget::MarkerHandle;

/// Visual form of a marker
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerAppearance {
    /// Single item: labelled pin, keyboard-focusable
    Pin {
        label: String,
        selected: bool,
        favorite: bool,
    },
    /// Aggregated items: count badge at the group centroid, pointer-only
    ClusterBadge { count: usize },
    /// The "you are here" dot, distinct from all item markers
    LocationDot,
}

/// Everything the native widget needs to create one marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: LatLng,
    pub appearance: MarkerAppearance,
}

impl MarkerSpec {
    /// Pin for a single item, flagged selected when its id matches the
    /// current selection
    pub fn pin(item: &GeoItem, selected: bool) -> Self {
        Self {
            position: item.position(),
            appearance: MarkerAppearance::Pin {
                label: item.name.clone(),
                selected,
                favorite: item.favorite,
            },
        }
    }

    /// Count badge at a cluster's centroid
    pub fn cluster(group: &ClusterGroup) -> Self {
        Self {
            position: group.centroid(),
            appearance: MarkerAppearance::ClusterBadge {
                count: group.count(),
            },
        }
    }

    /// The device-position marker
    pub fn location_dot(position: LatLng) -> Self {
        Self {
            position,
            appearance: MarkerAppearance::LocationDot,
        }
    }
}

/// What a rendered marker stands for
#[derive(Debug, Clone)]
pub enum RenderedKind {
    /// A singleton group; activation selects the item
    Item { item: GeoItem },
    /// A multi-member group; activation zooms to the member bounds
    Cluster { bounds: LatLngBounds, count: usize },
}

/// A live widget marker plus the group it represents
///
/// Owned exclusively by [`lifecycle::MarkerLifecycle`]; discarded in full
/// at the start of the next rebuild.
#[derive(Debug, Clone)]
pub struct RenderedMarker {
    pub handle: MarkerHandle,
    pub kind: RenderedKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_spec_carries_flags() {
        let item = GeoItem::new("c1", 45.0, 7.0, "Orco").with_favorite(true);
        let spec = MarkerSpec::pin(&item, true);

        assert_eq!(spec.position, LatLng::new(45.0, 7.0));
        assert_eq!(
            spec.appearance,
            MarkerAppearance::Pin {
                label: "Orco".to_string(),
                selected: true,
                favorite: true,
            }
        );
    }

    #[test]
    fn test_cluster_spec_at_centroid() {
        let mut group = ClusterGroup::seed(GeoItem::new("a", 0.0, 0.0, "a"));
        group.push(GeoItem::new("b", 2.0, 4.0, "b"));

        let spec = MarkerSpec::cluster(&group);

        assert_eq!(spec.position, LatLng::new(1.0, 2.0));
        assert_eq!(spec.appearance, MarkerAppearance::ClusterBadge { count: 2 });
    }
}
