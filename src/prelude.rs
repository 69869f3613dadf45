//! Prelude module for common decluster types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use decluster::prelude::*;`

pub use crate::core::{
    config::{FramingConfig, GroupingConfig, MarkerStyleConfig, PlacementConfig, SurfaceOptions},
    geo::{LatLng, LatLngBounds, Point},
    map::MapSurface,
};

pub use crate::animation::framing::{CameraState, FramerState, ViewportFramer};

pub use crate::data::point::GeoPoint;

pub use crate::input::events::{MarkerEvent, MarkerEventKind};

pub use crate::layers::marker::{MarkerAppearance, MarkerLifecycle};

pub use crate::spatial::{
    grouping::{group_points, GroupingOutcome, LocationGroup, LocationKey, RejectedPoint},
    placement,
};

pub use crate::traits::{
    CameraOps, EventOps, FitBoundsOptions, Interaction, MapEngine, MarkerId, MarkerOps, PopupId,
    PopupOps, SubscriptionId,
};

pub use crate::ui::popup::PopupContent;

pub use crate::{Error, Result};

pub use std::time::Duration;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
