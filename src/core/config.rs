//! Configuration structs for the declustering engine.
//!
//! Every empirical constant is a tunable here; the invariants the engine
//! guarantees (distinct offsets, ordered transitions, paired teardown) hold
//! for arbitrary values.

use crate::core::constants::{
    BASE_SPREAD_RADIUS, CENTER_DURATION_MS, DEFAULT_GROUP_PRECISION, DEFAULT_MARKER_COLOR,
    FIT_DELAY_MS, FIT_DURATION_MS, FIT_MAX_ZOOM, FIT_PADDING, POSITIONS_PER_RING,
    SUMMARY_PREVIEW_CHARS,
};
use crate::core::geo::LatLng;
use crate::prelude::HashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default marker palette, keyed by point category.
static DEFAULT_PALETTE: Lazy<HashMap<String, String>> = Lazy::new(|| {
    [
        ("research", "#1e88e5"),
        ("monitoring", "#43a047"),
        ("survey", "#fb8c00"),
        ("archive", "#8e24aa"),
    ]
    .into_iter()
    .map(|(category, color)| (category.to_string(), color.to_string()))
    .collect()
});

/// Configuration for co-location grouping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupingConfig {
    /// Quantization step in degrees; points whose coordinates round to the
    /// same step belong to the same group.
    pub precision: f64,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_GROUP_PRECISION,
        }
    }
}

/// Configuration for spreading co-located markers on concentric rings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Maximum marker positions per ring.
    pub positions_per_ring: usize,
    /// Radius of the innermost ring, in pixels.
    pub base_radius: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            positions_per_ring: POSITIONS_PER_RING,
            base_radius: BASE_SPREAD_RADIUS,
        }
    }
}

/// Configuration for the two-stage viewport framing choreography
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FramingConfig {
    /// Fixed reference coordinate the camera centers on first.
    pub home_center: LatLng,
    /// Zoom level for the centering transition.
    pub home_zoom: f64,
    /// Duration of the centering transition.
    pub center_duration: Duration,
    /// Delay before the fit-bounds transition is issued.
    pub fit_delay: Duration,
    /// Duration of the fit-bounds transition.
    pub fit_duration: Duration,
    /// Padding around the fitted bounding box, in pixels.
    pub fit_padding: f64,
    /// Zoom ceiling for the fit-bounds transition.
    pub fit_max_zoom: f64,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            home_center: LatLng::new(0.0, 0.0),
            home_zoom: 2.0,
            center_duration: Duration::from_millis(CENTER_DURATION_MS),
            fit_delay: Duration::from_millis(FIT_DELAY_MS),
            fit_duration: Duration::from_millis(FIT_DURATION_MS),
            fit_padding: FIT_PADDING,
            fit_max_zoom: FIT_MAX_ZOOM,
        }
    }
}

/// Configuration for marker styling and popup content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyleConfig {
    /// Marker color per point category.
    pub palette: HashMap<String, String>,
    /// Color for points with an unknown or absent category.
    pub default_color: String,
    /// Maximum popup summary length, in characters.
    pub summary_preview_chars: usize,
}

impl Default for MarkerStyleConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.clone(),
            default_color: DEFAULT_MARKER_COLOR.to_string(),
            summary_preview_chars: SUMMARY_PREVIEW_CHARS,
        }
    }
}

/// Top-level options for a [`crate::core::map::MapSurface`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceOptions {
    pub grouping: GroupingConfig,
    pub placement: PlacementConfig,
    pub framing: FramingConfig,
    pub style: MarkerStyleConfig,
    /// Whether point-list changes re-run the framing choreography.
    pub auto_frame: bool,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            grouping: GroupingConfig::default(),
            placement: PlacementConfig::default(),
            framing: FramingConfig::default(),
            style: MarkerStyleConfig::default(),
            auto_frame: true,
        }
    }
}
