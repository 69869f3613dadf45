//! Ring placement for co-located markers.
//!
//! Members of a group are fanned out on concentric rings around the shared
//! anchor so no two markers fully coincide. Offsets depend only on the
//! member's order-derived index and the group size; both functions are pure.

use crate::core::config::PlacementConfig;
use crate::core::geo::Point;
use std::f64::consts::PI;

/// Computes the screen-space offset for one member of a group.
///
/// A lone point gets no offset. Larger groups fill rings of at most
/// `positions_per_ring` slots; each full ring pushes the radius out by
/// another `base_radius`.
pub fn offset_for(index_in_group: usize, group_size: usize, config: &PlacementConfig) -> Point {
    if group_size <= 1 {
        return Point::new(0.0, 0.0);
    }

    let per_ring = config.positions_per_ring.max(1);
    let ring = index_in_group / per_ring;
    let slot = index_in_group % per_ring;

    let step = 2.0 * PI / group_size.min(per_ring) as f64;
    let angle = slot as f64 * step;
    let radius = config.base_radius * (ring as f64 + 1.0);

    Point::new(radius * angle.cos(), radius * angle.sin())
}

/// 1-based display number for markers in a multi-point group.
pub fn label_for(index_in_group: usize, group_size: usize) -> Option<String> {
    if group_size > 1 {
        Some((index_in_group + 1).to_string())
    } else {
        None
    }
}
