use crate::core::{
    geo::{LatLng, LatLngBounds},
    item::GeoItem,
};
use crate::prelude::HashSet;
use crate::spatial::Projector;

/// Configuration for clustering
#[derive(Debug, Clone)]
pub struct ClusteringConfig {
    /// Maximum screen distance between an item and a group's centroid for
    /// the item to join the group (in pixels)
    pub max_cluster_radius: f64,
    /// Zoom level at and above which clustering is disabled and every item
    /// is rendered individually
    pub disable_clustering_at_zoom: f64,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            max_cluster_radius: 50.0,
            disable_clustering_at_zoom: 15.0,
        }
    }
}

/// A group of items close enough on screen to render as one marker
///
/// Ephemeral: rebuilt on every pass, never carried across rebuilds.
#[derive(Debug, Clone)]
pub struct ClusterGroup {
    members: Vec<GeoItem>,
    centroid: LatLng,
}

impl ClusterGroup {
    /// Starts a group containing a single seed item
    pub fn seed(item: GeoItem) -> Self {
        let centroid = item.position();
        Self {
            members: vec![item],
            centroid,
        }
    }

    /// Adds a member, moving the centroid to the exact arithmetic mean of
    /// all member coordinates
    pub fn push(&mut self, item: GeoItem) {
        self.centroid = incremental_mean(&self.centroid, self.members.len(), &item.position());
        self.members.push(item);
    }

    /// Arithmetic mean of the current members' coordinates
    pub fn centroid(&self) -> LatLng {
        self.centroid
    }

    pub fn members(&self) -> &[GeoItem] {
        &self.members
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// A group with one member renders as a labelled pin
    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }

    /// Geographic bounds of all member coordinates, for zoom-to-fit on
    /// cluster activation
    pub fn bounds(&self) -> LatLngBounds {
        let points: Vec<LatLng> = self.members.iter().map(|m| m.position()).collect();
        // members is never empty: a group always starts from a seed item
        LatLngBounds::enclosing(&points)
            .unwrap_or_else(|| LatLngBounds::new(self.centroid, self.centroid))
    }
}

/// Running mean after adding one more coordinate to a set of `count`
/// coordinates averaging `current`
pub fn incremental_mean(current: &LatLng, count: usize, added: &LatLng) -> LatLng {
    let n = count as f64;
    LatLng::new(
        (current.lat * n + added.lat) / (n + 1.0),
        (current.lng * n + added.lng) / (n + 1.0),
    )
}

/// Greedy screen-space proximity clustering
///
/// Groups items whose projected pixel distance to a group's evolving
/// centroid is within the configured radius. Order-dependent but
/// deterministic given stable input order; input order is the tie-break
/// when items are equidistant.
#[derive(Debug, Clone, Default)]
pub struct Clusterer {
    config: ClusteringConfig,
}

impl Clusterer {
    pub fn new(config: ClusteringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// Whether clustering applies at the given zoom level
    pub fn enabled_at(&self, zoom: f64) -> bool {
        zoom < self.config.disable_clustering_at_zoom
    }

    /// Groups the already-filtered items for the current map state
    ///
    /// O(n²) in the number of on-screen items; rebuilds run once per
    /// settled gesture, not per frame, so the candidate count stays low.
    pub fn cluster<P: Projector>(
        &self,
        items: &[GeoItem],
        projector: &P,
        zoom: f64,
    ) -> Vec<ClusterGroup> {
        if !self.enabled_at(zoom) {
            return items.iter().cloned().map(ClusterGroup::seed).collect();
        }

        let mut processed: HashSet<&str> = HashSet::default();
        let mut groups = Vec::new();

        for (index, item) in items.iter().enumerate() {
            if processed.contains(item.id.as_str()) {
                continue;
            }
            processed.insert(item.id.as_str());

            let mut group = ClusterGroup::seed(item.clone());

            for other in &items[index + 1..] {
                if processed.contains(other.id.as_str()) {
                    continue;
                }

                // Compare against the moving centroid, not the seed point
                let centroid_pixel = projector.project(&group.centroid());
                let candidate_pixel = projector.project(&other.position());

                if candidate_pixel.distance_to(&centroid_pixel) <= self.config.max_cluster_radius {
                    processed.insert(other.id.as_str());
                    group.push(other.clone());
                }
            }

            groups.push(group);
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::Point;

    // Projects lat/lng straight to pixels so test geometry is exact
    fn flat_projector() -> impl Projector {
        |position: &LatLng| Point::new(position.lng, position.lat)
    }

    fn item_at(id: &str, pixel_y: f64, pixel_x: f64) -> GeoItem {
        GeoItem::new(id, pixel_y, pixel_x, id)
    }

    #[test]
    fn test_nearby_items_cluster() {
        // Items at projected (10,10), (15,12), (500,500), threshold 50px
        let items = vec![
            item_at("a", 10.0, 10.0),
            item_at("b", 12.0, 15.0),
            item_at("c", 500.0, 500.0),
        ];
        let clusterer = Clusterer::new(ClusteringConfig {
            max_cluster_radius: 50.0,
            disable_clustering_at_zoom: 15.0,
        });

        let groups = clusterer.cluster(&items, &flat_projector(), 10.0);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].count(), 2);
        assert!(groups[1].is_singleton());

        // Centroid of the pair is the midpoint
        let centroid = groups[0].centroid();
        assert!((centroid.lat - 11.0).abs() < 1e-9);
        assert!((centroid.lng - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_clustering_disabled_yields_singletons() {
        let items = vec![
            item_at("a", 10.0, 10.0),
            item_at("b", 12.0, 15.0),
            item_at("c", 500.0, 500.0),
        ];
        let clusterer = Clusterer::default();

        // At or above the disable zoom every item stands alone
        let groups = clusterer.cluster(&items, &flat_projector(), 15.0);

        assert_eq!(groups.len(), items.len());
        assert!(groups.iter().all(|g| g.is_singleton()));
        assert_eq!(groups[0].members()[0].id, "a");
    }

    #[test]
    fn test_every_item_in_exactly_one_group() {
        let items: Vec<GeoItem> = (0..40)
            .map(|i| item_at(&format!("i{i}"), (i % 7) as f64 * 30.0, (i % 5) as f64 * 30.0))
            .collect();
        let clusterer = Clusterer::default();

        let groups = clusterer.cluster(&items, &flat_projector(), 8.0);

        let mut seen: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.members().iter().map(|m| m.id.as_str()))
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        expected.sort_unstable();

        assert_eq!(seen, expected);
    }

    #[test]
    fn test_idempotent_at_fixed_zoom() {
        let items = vec![
            item_at("a", 0.0, 0.0),
            item_at("b", 10.0, 10.0),
            item_at("c", 200.0, 200.0),
            item_at("d", 205.0, 210.0),
        ];
        let clusterer = Clusterer::default();

        let first = clusterer.cluster(&items, &flat_projector(), 9.0);
        let second = clusterer.cluster(&items, &flat_projector(), 9.0);

        assert_eq!(first.len(), second.len());
        for (left, right) in first.iter().zip(second.iter()) {
            let left_ids: Vec<_> = left.members().iter().map(|m| &m.id).collect();
            let right_ids: Vec<_> = right.members().iter().map(|m| &m.id).collect();
            assert_eq!(left_ids, right_ids);
        }
    }

    #[test]
    fn test_moving_centroid_absorbs_chain() {
        // b is within 50px of a; c is within 50px of the a+b centroid but
        // more than 50px from a itself
        let items = vec![
            item_at("a", 0.0, 0.0),
            item_at("b", 0.0, 48.0),
            item_at("c", 0.0, 70.0),
        ];
        let clusterer = Clusterer::default();

        let groups = clusterer.cluster(&items, &flat_projector(), 9.0);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].count(), 3);
    }

    #[test]
    fn test_incremental_mean_exact_at_each_step() {
        let coords = [
            LatLng::new(10.0, 10.0),
            LatLng::new(12.0, 15.0),
            LatLng::new(20.0, 5.0),
            LatLng::new(-4.0, 30.0),
        ];

        let mut group = ClusterGroup::seed(GeoItem::new("0", coords[0].lat, coords[0].lng, "0"));
        for (n, coord) in coords.iter().enumerate().skip(1) {
            group.push(GeoItem::new(format!("{n}"), coord.lat, coord.lng, "x"));

            let count = (n + 1) as f64;
            let mean_lat: f64 = coords[..=n].iter().map(|c| c.lat).sum::<f64>() / count;
            let mean_lng: f64 = coords[..=n].iter().map(|c| c.lng).sum::<f64>() / count;

            assert!((group.centroid().lat - mean_lat).abs() < 1e-9);
            assert!((group.centroid().lng - mean_lng).abs() < 1e-9);
        }
    }

    #[test]
    fn test_group_bounds_cover_members() {
        let items = vec![
            item_at("a", 1.0, 2.0),
            item_at("b", 5.0, -3.0),
            item_at("c", -2.0, 4.0),
        ];
        let mut group = ClusterGroup::seed(items[0].clone());
        group.push(items[1].clone());
        group.push(items[2].clone());

        let bounds = group.bounds();
        for item in &items {
            assert!(bounds.contains(&item.position()));
        }
    }
}
