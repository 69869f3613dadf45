//! Camera choreography for the map surface.

pub mod framing;
