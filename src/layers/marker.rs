//! Marker handle lifecycle.
//!
//! One interactive handle per `(point, index-in-group)` pair. Every handle
//! acquired during a render pass is released when the pass is superseded or
//! the surface is torn down: popup closed, both subscriptions detached,
//! marker element removed. The `rendered` set guards duplicate creation
//! across re-renders of the same group.

use crate::{
    core::config::{MarkerStyleConfig, PlacementConfig},
    data::point::GeoPoint,
    input::events::{MarkerEvent, MarkerEventKind},
    prelude::{HashMap, HashSet},
    spatial::{grouping::LocationGroup, placement},
    traits::{Interaction, MapEngine, MarkerId, PopupId, SubscriptionId},
    ui::popup::PopupContent,
    Result,
};

/// Visual attributes for one placed marker element.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerAppearance {
    /// Fill color, selected from the category palette.
    pub color: String,
    /// 1-based display number for members of a multi-point group.
    pub label: Option<String>,
}

/// A live interactive marker: the placed element, its two event
/// subscriptions, and the popup while hovered.
#[derive(Debug)]
pub struct MarkerHandle {
    key: String,
    point: GeoPoint,
    hover: SubscriptionId,
    click: SubscriptionId,
    popup: Option<PopupId>,
    content: PopupContent,
}

impl MarkerHandle {
    pub fn point(&self) -> &GeoPoint {
        &self.point
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Owns every [`MarkerHandle`] on the surface and pairs each acquisition
/// with a release.
pub struct MarkerLifecycle {
    placement: PlacementConfig,
    style: MarkerStyleConfig,
    /// Keys (`"{id}-{index}"`) with a live handle.
    rendered: HashSet<String>,
    handles: HashMap<MarkerId, MarkerHandle>,
}

impl MarkerLifecycle {
    pub fn new(placement: PlacementConfig, style: MarkerStyleConfig) -> Self {
        Self {
            placement,
            style,
            rendered: HashSet::default(),
            handles: HashMap::default(),
        }
    }

    /// Number of live handles.
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Creates one handle per group member: ring offset, category color,
    /// display label, hover + click subscriptions, precomputed popup content.
    ///
    /// Idempotent per `(point.id, index)`: keys already rendered are left
    /// alone. A member with invalid coordinates is skipped with a warning
    /// and the rest of the group proceeds.
    pub fn render_group<E: MapEngine>(
        &mut self,
        group: &LocationGroup,
        engine: &mut E,
    ) -> Result<()> {
        let group_size = group.len();

        for (index, point) in group.points.iter().enumerate() {
            let key = format!("{}-{}", point.id, index);
            if self.rendered.contains(&key) {
                continue;
            }
            if !point.coordinates.is_valid() {
                log::warn!("skipping marker for point '{}': invalid coordinates", point.id);
                continue;
            }

            let offset = placement::offset_for(index, group_size, &self.placement);
            let appearance = MarkerAppearance {
                color: self.color_for(point.category.as_deref()),
                label: placement::label_for(index, group_size),
            };

            let marker = engine.place_marker(point.coordinates, offset, &appearance)?;
            let hover = engine.subscribe(marker, Interaction::Hover)?;
            let click = engine.subscribe(marker, Interaction::Click)?;
            let content = PopupContent::for_point(point, self.style.summary_preview_chars);

            self.rendered.insert(key.clone());
            self.handles.insert(
                marker,
                MarkerHandle {
                    key,
                    point: point.clone(),
                    hover,
                    click,
                    popup: None,
                    content,
                },
            );
        }

        Ok(())
    }

    /// Routes a marker interaction. Hover-enter opens the info popup at the
    /// raw coordinates, hover-leave closes it, click yields the point for
    /// the caller's selection callback. Events for unknown markers (already
    /// torn down) are ignored.
    pub fn handle_event<E: MapEngine>(
        &mut self,
        event: MarkerEvent,
        engine: &mut E,
    ) -> Result<Option<&GeoPoint>> {
        let Some(handle) = self.handles.get_mut(&event.marker) else {
            return Ok(None);
        };

        match event.kind {
            MarkerEventKind::HoverEnter => {
                if handle.popup.is_none() {
                    handle.popup =
                        Some(engine.open_popup(handle.point.coordinates, &handle.content)?);
                }
                Ok(None)
            }
            MarkerEventKind::HoverLeave => {
                if let Some(popup) = handle.popup.take() {
                    engine.close_popup(popup)?;
                }
                Ok(None)
            }
            MarkerEventKind::Click => Ok(Some(&handle.point)),
        }
    }

    /// Destroys every live handle: popup closed, both subscriptions
    /// detached, marker element removed. Best-effort per step so one engine
    /// failure cannot leak the remaining handles.
    pub fn clear<E: MapEngine>(&mut self, engine: &mut E) {
        for (marker, mut handle) in self.handles.drain() {
            if let Some(popup) = handle.popup.take() {
                if let Err(err) = engine.close_popup(popup) {
                    log::warn!("failed to close popup for '{}': {err}", handle.key);
                }
            }
            for subscription in [handle.hover, handle.click] {
                if let Err(err) = engine.unsubscribe(subscription) {
                    log::warn!("failed to unsubscribe '{}': {err}", handle.key);
                }
            }
            if let Err(err) = engine.remove_marker(marker) {
                log::warn!("failed to remove marker for '{}': {err}", handle.key);
            }
        }
        self.rendered.clear();
    }

    fn color_for(&self, category: Option<&str>) -> String {
        category
            .and_then(|category| self.style.palette.get(category))
            .cloned()
            .unwrap_or_else(|| self.style.default_color.clone())
    }
}
