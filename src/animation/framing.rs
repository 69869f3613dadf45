//! Two-stage viewport framing.
//!
//! On every point-list change the camera first centers on a fixed home
//! region, then, after a delay and only when more than one valid point is
//! visible, reframes to fit all points. The delay is a cancellable countdown
//! advanced by the host's frame loop; a superseding point-list change drops
//! the pending fit so no stale reframe is applied to outdated data.

use crate::{
    core::config::FramingConfig,
    core::geo::{LatLng, LatLngBounds},
    data::point::GeoPoint,
    traits::{CameraOps, FitBoundsOptions},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Camera pose tracked by the framer. Mutated only here, in the two
/// framing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub center: LatLng,
    pub zoom: f64,
    pub pitch: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            center: LatLng::new(0.0, 0.0),
            zoom: 0.0,
            pitch: 0.0,
        }
    }
}

/// State of the framing choreography
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramerState {
    /// No transition outstanding.
    Idle,
    /// Center issued, fit-bounds countdown pending.
    Animating,
}

/// A scheduled fit-bounds transition, waiting out the inter-transition delay.
#[derive(Debug, Clone, PartialEq)]
struct PendingFit {
    remaining: Duration,
    bounds: LatLngBounds,
}

/// Sequences the two camera transitions for a point-list change.
pub struct ViewportFramer {
    config: FramingConfig,
    state: FramerState,
    camera: CameraState,
    pending: Option<PendingFit>,
}

impl ViewportFramer {
    pub fn new(config: FramingConfig) -> Self {
        Self {
            config,
            state: FramerState::Idle,
            camera: CameraState::default(),
            pending: None,
        }
    }

    pub fn state(&self) -> FramerState {
        self.state
    }

    /// Current camera pose as last directed by the framer.
    pub fn camera_state(&self) -> CameraState {
        self.camera
    }

    /// True while a fit-bounds countdown is outstanding.
    pub fn has_pending_fit(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts the choreography for a new point list.
    ///
    /// Any countdown from a previous list is superseded (last-write-wins).
    /// The center transition is issued immediately; the fit-bounds step is
    /// scheduled only when more than one valid point yields a
    /// non-degenerate bounding box.
    pub fn frame<C: CameraOps>(&mut self, points: &[GeoPoint], camera: &mut C) {
        if self.pending.take().is_some() {
            log::debug!("superseding pending fit-bounds with a new framing sequence");
        }

        log::debug!(
            "centering on home region ({}, {}) at zoom {}",
            self.config.home_center.lat,
            self.config.home_center.lng,
            self.config.home_zoom
        );
        camera.ease_to(
            self.config.home_center,
            self.config.home_zoom,
            0.0,
            self.config.center_duration,
        );
        self.camera = CameraState {
            center: self.config.home_center,
            zoom: self.config.home_zoom,
            pitch: 0.0,
        };

        let valid: Vec<LatLng> = points
            .iter()
            .map(|point| point.coordinates)
            .filter(LatLng::is_valid)
            .collect();

        if valid.len() > 1 {
            if let Some(bounds) = LatLngBounds::from_points(valid) {
                if !bounds.is_degenerate() {
                    self.pending = Some(PendingFit {
                        remaining: self.config.fit_delay,
                        bounds,
                    });
                    self.state = FramerState::Animating;
                    return;
                }
            }
        }

        self.state = FramerState::Idle;
    }

    /// Advances the fit-bounds countdown by `dt`, issuing the transition
    /// when the delay elapses. Returns true while a fit is still pending.
    pub fn update<C: CameraOps>(&mut self, dt: Duration, camera: &mut C) -> bool {
        let Some(mut fit) = self.pending.take() else {
            return false;
        };

        if dt < fit.remaining {
            fit.remaining -= dt;
            self.pending = Some(fit);
            return true;
        }

        log::debug!(
            "issuing fit-bounds ({}, {}) -> ({}, {})",
            fit.bounds.south_west.lat,
            fit.bounds.south_west.lng,
            fit.bounds.north_east.lat,
            fit.bounds.north_east.lng
        );
        let options = FitBoundsOptions {
            padding: self.config.fit_padding,
            max_zoom: self.config.fit_max_zoom,
            duration: self.config.fit_duration,
        };
        camera.fit_bounds(&fit.bounds, &options);

        // The engine owns the exact fitted zoom; track the clamped ceiling.
        self.camera.center = fit.bounds.center();
        self.camera.zoom = self.camera.zoom.min(self.config.fit_max_zoom);
        self.state = FramerState::Idle;
        false
    }

    /// Drops any pending fit and returns to idle.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("cancelled pending fit-bounds");
        }
        self.state = FramerState::Idle;
    }
}
