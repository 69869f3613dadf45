//! Capability seams between the declustering core and a concrete map engine.
//!
//! The core never talks to a rendering library directly. A host embeds it by
//! implementing these traits for whatever engine it renders with; everything
//! the core needs is a camera, a marker primitive, a popup primitive, and
//! marker event subscriptions.

use crate::{
    core::geo::{LatLng, LatLngBounds, Point},
    layers::marker::MarkerAppearance,
    ui::popup::PopupContent,
    Result,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Opaque engine handle for a placed marker element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerId(pub u64);

/// Opaque engine handle for an open popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PopupId(pub u64);

/// Opaque engine handle for an event subscription on a marker element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

/// Interaction kinds a marker element can be subscribed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interaction {
    Hover,
    Click,
}

/// Options for a fit-bounds camera transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitBoundsOptions {
    /// Padding around the bounding box, in pixels.
    pub padding: f64,
    /// Upper zoom bound so a tight cluster does not over-zoom.
    pub max_zoom: f64,
    /// Transition duration.
    pub duration: Duration,
}

/// Camera control surface of the engine.
pub trait CameraOps {
    /// Animates the camera to the given pose.
    fn ease_to(&mut self, center: LatLng, zoom: f64, pitch: f64, duration: Duration);

    /// Animates the camera to frame the given bounding box.
    fn fit_bounds(&mut self, bounds: &LatLngBounds, options: &FitBoundsOptions);
}

/// Marker placement surface of the engine.
pub trait MarkerOps {
    /// Places a marker element anchored at `anchor`, shifted by `offset`
    /// pixels in screen space.
    fn place_marker(
        &mut self,
        anchor: LatLng,
        offset: Point,
        appearance: &MarkerAppearance,
    ) -> Result<MarkerId>;

    /// Removes a placed marker element.
    fn remove_marker(&mut self, marker: MarkerId) -> Result<()>;
}

/// Popup surface of the engine.
pub trait PopupOps {
    /// Opens an info popup anchored at the given coordinates.
    fn open_popup(&mut self, anchor: LatLng, content: &PopupContent) -> Result<PopupId>;

    /// Closes an open popup.
    fn close_popup(&mut self, popup: PopupId) -> Result<()>;
}

/// Event subscription surface of the engine. Events flow back to the core as
/// [`crate::input::events::MarkerEvent`] values pushed by the host.
pub trait EventOps {
    /// Registers interest in an interaction on a marker element.
    fn subscribe(&mut self, marker: MarkerId, interaction: Interaction) -> Result<SubscriptionId>;

    /// Detaches a previously registered subscription.
    fn unsubscribe(&mut self, subscription: SubscriptionId) -> Result<()>;
}

/// Umbrella trait for a full map engine.
pub trait MapEngine: CameraOps + MarkerOps + PopupOps + EventOps {}

impl<T: CameraOps + MarkerOps + PopupOps + EventOps> MapEngine for T {}
