//! Co-location grouping via coordinate quantization.
//!
//! Points whose coordinates round to the same quantization step form one
//! [`LocationGroup`]. Member order within a group follows input order, and
//! groups are returned in first-appearance order, so the whole pass is
//! deterministic: downstream ring placement derives offsets from the
//! order-derived index.

use crate::core::config::GroupingConfig;
use crate::core::geo::LatLng;
use crate::data::point::GeoPoint;
use crate::prelude::HashMap;

/// Quantized coordinate cell identifying one co-located group.
///
/// Stored as integer quantization steps rather than rounded floats so keys
/// are `Eq + Hash`; the quantized coordinate is recoverable through
/// [`LocationKey::to_lat_lng`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationKey {
    /// Longitude step: `round(lng / precision)`.
    pub x: i64,
    /// Latitude step: `round(lat / precision)`.
    pub y: i64,
}

impl LocationKey {
    fn from_lat_lng(coordinates: &LatLng, precision: f64) -> Self {
        Self {
            x: (coordinates.lng / precision).round() as i64,
            y: (coordinates.lat / precision).round() as i64,
        }
    }

    /// Recovers the quantized coordinate this key stands for.
    pub fn to_lat_lng(&self, precision: f64) -> LatLng {
        LatLng::new(self.y as f64 * precision, self.x as f64 * precision)
    }
}

/// The ordered set of points whose coordinates quantize to the same key.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationGroup {
    pub key: LocationKey,
    /// Members in input order.
    pub points: Vec<GeoPoint>,
}

impl LocationGroup {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check if this is a single-point group (no spreading needed)
    pub fn is_single(&self) -> bool {
        self.points.len() == 1
    }
}

/// A point excluded from grouping because its coordinates failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedPoint {
    pub id: String,
    pub coordinates: LatLng,
}

/// Result of one grouping pass: the groups plus the diagnostic side-channel
/// for excluded points. Exclusion is recoverable and never aborts the pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupingOutcome {
    /// Groups in first-appearance order.
    pub groups: Vec<LocationGroup>,
    /// Points excluded for invalid coordinates.
    pub rejected: Vec<RejectedPoint>,
}

impl GroupingOutcome {
    /// Total number of points that made it into a group.
    pub fn valid_count(&self) -> usize {
        self.groups.iter().map(|group| group.points.len()).sum()
    }
}

/// Buckets `points` into co-located groups at the configured precision.
///
/// Deterministic: the same input list and precision always yield the same
/// groups, in the same order, with the same member order.
pub fn group_points(points: &[GeoPoint], config: &GroupingConfig) -> GroupingOutcome {
    // Quantization needs a positive finite step.
    let precision = if config.precision.is_finite() && config.precision > 0.0 {
        config.precision
    } else {
        crate::core::constants::DEFAULT_GROUP_PRECISION
    };

    let mut slots: HashMap<LocationKey, usize> = HashMap::default();
    let mut outcome = GroupingOutcome::default();

    for point in points {
        if !point.coordinates.is_valid() {
            log::warn!(
                "excluding point '{}' with invalid coordinates ({}, {})",
                point.id,
                point.coordinates.lng,
                point.coordinates.lat
            );
            outcome.rejected.push(RejectedPoint {
                id: point.id.clone(),
                coordinates: point.coordinates,
            });
            continue;
        }

        let key = LocationKey::from_lat_lng(&point.coordinates, precision);
        let slot = *slots.entry(key).or_insert_with(|| {
            outcome.groups.push(LocationGroup {
                key,
                points: Vec::new(),
            });
            outcome.groups.len() - 1
        });
        outcome.groups[slot].points.push(point.clone());
    }

    outcome
}
