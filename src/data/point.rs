use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// One map-worthy record: identity, display metadata, and coordinates.
///
/// The engine never mutates a point; it only derives presentation state
/// (group membership, pixel offset, popup content) from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Stable unique identifier.
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub coordinates: LatLng,
}

impl GeoPoint {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        coordinates: LatLng,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            category: None,
            summary: None,
            coordinates,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_builder() {
        let point = GeoPoint::new("a", "Mangrove survey", "Silva", LatLng::new(1.04, -51.07))
            .with_category("survey")
            .with_summary("Baseline mangrove coverage study");

        assert_eq!(point.id, "a");
        assert_eq!(point.category.as_deref(), Some("survey"));
        assert!(point.coordinates.is_valid());
    }

    #[test]
    fn test_point_serde_roundtrip() {
        let point = GeoPoint::new("b", "Station", "Costa", LatLng::new(2.0, -50.0));
        let json = serde_json::to_string(&point).unwrap();
        assert!(!json.contains("category"));
        let back: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }
}
