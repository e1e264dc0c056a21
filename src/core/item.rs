use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// A point-located catalog entity eligible for map display, e.g. a crag
/// or climbing area
///
/// Items are transient inputs: the consumer supplies a fresh list on every
/// data or viewport change and the engine never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoItem {
    /// Stable identifier, unique within a rebuild cycle
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Display name shown on singleton pins
    pub name: String,
    /// Highlighted in the consumer's favorites
    #[serde(default)]
    pub favorite: bool,
    /// Opaque display payload carried through to the consumer on selection
    #[serde(default)]
    pub data: serde_json::Value,
}

impl GeoItem {
    pub fn new(id: impl Into<String>, lat: f64, lng: f64, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
            name: name.into(),
            favorite: false,
            data: serde_json::Value::Null,
        }
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// False for items whose coordinates are missing or not finite; such
    /// items are dropped by the viewport filter rather than rendered
    pub fn has_valid_position(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = GeoItem::new("c1", 45.9, 6.8, "Les Gaillands").with_favorite(true);

        assert_eq!(item.id, "c1");
        assert_eq!(item.name, "Les Gaillands");
        assert!(item.favorite);
        assert_eq!(item.position(), LatLng::new(45.9, 6.8));
        assert!(item.has_valid_position());
    }

    #[test]
    fn test_invalid_position() {
        let item = GeoItem::new("c2", f64::NAN, 6.8, "Broken");
        assert!(!item.has_valid_position());
    }

    #[test]
    fn test_payload_roundtrip() {
        let item = GeoItem::new("c3", 45.0, 7.0, "Orco")
            .with_data(serde_json::json!({ "routes": 120 }));

        let encoded = serde_json::to_string(&item).unwrap();
        let decoded: GeoItem = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, item);
        assert_eq!(decoded.data["routes"], 120);
    }
}
