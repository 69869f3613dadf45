//! # Decluster
//!
//! Marker declustering and viewport framing for interactive maps.
//!
//! Given geo-referenced records that may share identical or near-identical
//! coordinates, this library groups co-located points, fans each group out on
//! concentric pixel rings so every marker stays individually visible and
//! clickable, manages the interactive marker handles (hover popups, click
//! selection) with a paired acquire/release lifecycle, and drives a two-stage
//! camera animation that centers on a home region and then reframes to fit
//! all visible points.
//!
//! The rendering engine itself is an external collaborator: the library
//! depends only on the capability traits in [`traits`].

pub mod animation;
pub mod core;
pub mod data;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod spatial;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{FramingConfig, GroupingConfig, MarkerStyleConfig, PlacementConfig, SurfaceOptions},
    geo::{LatLng, LatLngBounds, Point},
    map::MapSurface,
};

pub use crate::animation::framing::{CameraState, FramerState, ViewportFramer};

pub use crate::data::point::GeoPoint;

pub use crate::input::events::{MarkerEvent, MarkerEventKind};

pub use crate::layers::marker::{MarkerAppearance, MarkerLifecycle};

pub use crate::spatial::grouping::{
    group_points, GroupingOutcome, LocationGroup, LocationKey, RejectedPoint,
};

pub use crate::traits::{
    CameraOps, EventOps, FitBoundsOptions, Interaction, MapEngine, MarkerId, MarkerOps, PopupId,
    PopupOps, SubscriptionId,
};

pub use crate::ui::popup::PopupContent;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, DeclusterError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum DeclusterError {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Unknown engine handle: {0}")]
    UnknownHandle(String),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = DeclusterError;
