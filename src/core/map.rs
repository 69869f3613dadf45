//! The map surface: thin orchestrator over grouping, placement, marker
//! lifecycle, and viewport framing.

use crate::{
    animation::framing::{CameraState, ViewportFramer},
    core::config::SurfaceOptions,
    data::point::GeoPoint,
    input::events::MarkerEvent,
    layers::marker::MarkerLifecycle,
    spatial::grouping::{group_points, RejectedPoint},
    traits::MapEngine,
    Result,
};
use std::time::Duration;

type SelectCallback = Box<dyn Fn(&GeoPoint) + Send + Sync>;

/// Owns the engine and re-derives all presentation state whenever the point
/// list changes: grouping runs synchronously, the previous render pass is
/// torn down, each group is rendered through the marker lifecycle, and the
/// framing choreography restarts when auto-framing is on.
pub struct MapSurface<E: MapEngine> {
    engine: E,
    options: SurfaceOptions,
    lifecycle: MarkerLifecycle,
    framer: ViewportFramer,
    points: Vec<GeoPoint>,
    rejected: Vec<RejectedPoint>,
    auto_frame: bool,
    on_select: Option<SelectCallback>,
}

impl<E: MapEngine> MapSurface<E> {
    pub fn new(engine: E, options: SurfaceOptions) -> Self {
        let lifecycle = MarkerLifecycle::new(options.placement, options.style.clone());
        let framer = ViewportFramer::new(options.framing);
        let auto_frame = options.auto_frame;
        Self {
            engine,
            options,
            lifecycle,
            framer,
            points: Vec::new(),
            rejected: Vec::new(),
            auto_frame,
            on_select: None,
        }
    }

    /// Sets the selection callback invoked when a marker is clicked.
    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: Fn(&GeoPoint) + Send + Sync + 'static,
    {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The current point list.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Points excluded from the last render pass for invalid coordinates.
    pub fn rejected_points(&self) -> &[RejectedPoint] {
        &self.rejected
    }

    /// Number of live marker handles.
    pub fn marker_count(&self) -> usize {
        self.lifecycle.handle_count()
    }

    pub fn camera_state(&self) -> CameraState {
        self.framer.camera_state()
    }

    /// True while the framing choreography has a fit-bounds step pending.
    pub fn is_animating(&self) -> bool {
        self.framer.has_pending_fit()
    }

    /// Replaces the point list.
    ///
    /// Grouping completes synchronously before any marker handle reflecting
    /// the new data is created; the previous pass's handles are destroyed
    /// first, and the framing sequence restarts (superseding any pending
    /// fit) when auto-framing is on.
    pub fn set_points(&mut self, points: Vec<GeoPoint>) -> Result<()> {
        let outcome = group_points(&points, &self.options.grouping);
        log::debug!(
            "rendering {} groups ({} points, {} rejected)",
            outcome.groups.len(),
            outcome.valid_count(),
            outcome.rejected.len()
        );

        self.lifecycle.clear(&mut self.engine);
        for group in &outcome.groups {
            self.lifecycle.render_group(group, &mut self.engine)?;
        }

        self.points = points;
        self.rejected = outcome.rejected;

        if self.auto_frame {
            self.framer.frame(&self.points, &mut self.engine);
        }
        Ok(())
    }

    /// Enables or disables auto-framing. Enabling reframes over the current
    /// points at once; disabling cancels any pending fit.
    pub fn set_auto_frame(&mut self, enabled: bool) {
        if self.auto_frame == enabled {
            return;
        }
        self.auto_frame = enabled;
        if enabled {
            self.framer.frame(&self.points, &mut self.engine);
        } else {
            self.framer.cancel();
        }
    }

    /// Advances the framing countdown by `dt`. Returns true while a
    /// fit-bounds step is still pending.
    pub fn update(&mut self, dt: Duration) -> bool {
        self.framer.update(dt, &mut self.engine)
    }

    /// Routes a marker interaction from the host. Clicks invoke the
    /// selection callback with the clicked point.
    pub fn handle_event(&mut self, event: MarkerEvent) -> Result<()> {
        if let Some(point) = self.lifecycle.handle_event(event, &mut self.engine)? {
            if let Some(ref on_select) = self.on_select {
                on_select(point);
            }
        }
        Ok(())
    }

    /// Synchronous teardown: cancels any pending fit and destroys every
    /// marker handle. Also runs on drop; nothing outlives the surface.
    pub fn shutdown(&mut self) {
        self.framer.cancel();
        self.lifecycle.clear(&mut self.engine);
    }
}

impl<E: MapEngine> Drop for MapSurface<E> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
