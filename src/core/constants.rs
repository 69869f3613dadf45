//! Engine-wide empirical constants. They have no documented derivation in any
//! upstream convention, so they live here as configuration defaults; the
//! structural invariants of the engine hold for arbitrary values.

/// Coordinate quantization step for co-location grouping, in degrees
/// (~10 m at the equator).
pub const DEFAULT_GROUP_PRECISION: f64 = 1e-4;

/// Maximum marker positions per concentric spread ring.
pub const POSITIONS_PER_RING: usize = 8;

/// Radius of the innermost spread ring, in pixels.
pub const BASE_SPREAD_RADIUS: f64 = 25.0;

/// Duration of the center-on-home camera transition.
pub const CENTER_DURATION_MS: u64 = 1000;

/// Delay between the center transition and the fit-bounds transition,
/// chosen so the fit starts after the centering completes.
pub const FIT_DELAY_MS: u64 = 1500;

/// Duration of the fit-bounds camera transition.
pub const FIT_DURATION_MS: u64 = 1500;

/// Padding around the fitted bounding box, in pixels.
pub const FIT_PADDING: f64 = 40.0;

/// Zoom ceiling for fit-bounds, so a tight cluster does not over-zoom.
pub const FIT_MAX_ZOOM: f64 = 12.0;

/// Maximum summary length shown in an info popup, in characters.
pub const SUMMARY_PREVIEW_CHARS: usize = 100;

/// Marker color for points without a recognized category.
pub const DEFAULT_MARKER_COLOR: &str = "#546e7a";
