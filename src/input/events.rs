use crate::traits::MarkerId;
use serde::{Deserialize, Serialize};

/// Marker interactions delivered by the host's rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerEventKind {
    /// Pointer entered the marker element.
    HoverEnter,
    /// Pointer left the marker element.
    HoverLeave,
    /// Marker element was clicked/tapped.
    Click,
}

/// One marker interaction, addressed by the engine's marker handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerEvent {
    pub marker: MarkerId,
    pub kind: MarkerEventKind,
}

impl MarkerEvent {
    pub fn new(marker: MarkerId, kind: MarkerEventKind) -> Self {
        Self { marker, kind }
    }
}
