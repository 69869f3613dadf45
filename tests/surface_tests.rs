//! Integration tests for the full map surface: grouping, marker lifecycle,
//! interaction routing, and the two-stage framing choreography, driven
//! against a recording mock engine.

use decluster::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum CameraCall {
    EaseTo {
        center: LatLng,
        zoom: f64,
        pitch: f64,
        duration: Duration,
    },
    FitBounds {
        bounds: LatLngBounds,
        padding: f64,
        max_zoom: f64,
        duration: Duration,
    },
}

#[derive(Debug, Clone)]
struct PlacedMarker {
    anchor: LatLng,
    offset: Point,
    appearance: MarkerAppearance,
}

/// Shared engine state, inspectable after the surface is dropped.
#[derive(Default)]
struct EngineState {
    next_id: u64,
    camera_calls: Vec<CameraCall>,
    live_markers: HashSet<u64>,
    live_popups: HashSet<u64>,
    live_subscriptions: HashSet<u64>,
    placed: Vec<PlacedMarker>,
    opened_popups: Vec<PopupContent>,
}

impl EngineState {
    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn fit_calls(&self) -> Vec<CameraCall> {
        self.camera_calls
            .iter()
            .filter(|call| matches!(call, CameraCall::FitBounds { .. }))
            .cloned()
            .collect()
    }
}

#[derive(Clone, Default)]
struct MockEngine {
    state: Rc<RefCell<EngineState>>,
}

impl CameraOps for MockEngine {
    fn ease_to(&mut self, center: LatLng, zoom: f64, pitch: f64, duration: Duration) {
        self.state.borrow_mut().camera_calls.push(CameraCall::EaseTo {
            center,
            zoom,
            pitch,
            duration,
        });
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds, options: &FitBoundsOptions) {
        self.state
            .borrow_mut()
            .camera_calls
            .push(CameraCall::FitBounds {
                bounds: bounds.clone(),
                padding: options.padding,
                max_zoom: options.max_zoom,
                duration: options.duration,
            });
    }
}

impl MarkerOps for MockEngine {
    fn place_marker(
        &mut self,
        anchor: LatLng,
        offset: Point,
        appearance: &MarkerAppearance,
    ) -> Result<MarkerId> {
        let mut state = self.state.borrow_mut();
        let id = state.next();
        state.live_markers.insert(id);
        state.placed.push(PlacedMarker {
            anchor,
            offset,
            appearance: appearance.clone(),
        });
        Ok(MarkerId(id))
    }

    fn remove_marker(&mut self, marker: MarkerId) -> Result<()> {
        self.state.borrow_mut().live_markers.remove(&marker.0);
        Ok(())
    }
}

impl PopupOps for MockEngine {
    fn open_popup(&mut self, _anchor: LatLng, content: &PopupContent) -> Result<PopupId> {
        let mut state = self.state.borrow_mut();
        let id = state.next();
        state.live_popups.insert(id);
        state.opened_popups.push(content.clone());
        Ok(PopupId(id))
    }

    fn close_popup(&mut self, popup: PopupId) -> Result<()> {
        self.state.borrow_mut().live_popups.remove(&popup.0);
        Ok(())
    }
}

impl EventOps for MockEngine {
    fn subscribe(&mut self, _marker: MarkerId, _interaction: Interaction) -> Result<SubscriptionId> {
        let mut state = self.state.borrow_mut();
        let id = state.next();
        state.live_subscriptions.insert(id);
        Ok(SubscriptionId(id))
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) -> Result<()> {
        self.state
            .borrow_mut()
            .live_subscriptions
            .remove(&subscription.0);
        Ok(())
    }
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn point(id: &str, lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(id, format!("Point {id}"), "Author", LatLng::new(lat, lng))
}

fn surface() -> (MapSurface<MockEngine>, Rc<RefCell<EngineState>>) {
    let engine = MockEngine::default();
    let state = engine.state.clone();
    (MapSurface::new(engine, SurfaceOptions::default()), state)
}

#[test]
fn test_example_scenario() {
    // Two points at one institution, one elsewhere.
    let (mut map, state) = surface();
    map.set_points(vec![
        point("a", 1.04, -51.07),
        point("b", 1.04, -51.07),
        point("c", 2.0, -50.0),
    ])
    .unwrap();

    assert_eq!(map.marker_count(), 3);

    {
        let state = state.borrow();
        // `a` and `b` are spread to opposite sides of the shared anchor.
        assert!((state.placed[0].offset.x - 25.0).abs() < 1e-9);
        assert!(state.placed[0].offset.y.abs() < 1e-9);
        assert!((state.placed[1].offset.x + 25.0).abs() < 1e-9);
        assert_eq!(state.placed[0].appearance.label.as_deref(), Some("1"));
        assert_eq!(state.placed[1].appearance.label.as_deref(), Some("2"));
        // `c` stays on its anchor, unlabeled.
        assert_eq!(state.placed[2].offset, Point::new(0.0, 0.0));
        assert_eq!(state.placed[2].appearance.label, None);
        // Shared anchor for the pair.
        assert_eq!(state.placed[0].anchor, state.placed[1].anchor);

        // Center issued immediately, fit still pending.
        assert_eq!(state.camera_calls.len(), 1);
    }

    assert!(map.is_animating());
    map.update(Duration::from_millis(1500));

    let state = state.borrow();
    let fits = state.fit_calls();
    assert_eq!(fits.len(), 1);
    match &fits[0] {
        CameraCall::FitBounds { bounds, max_zoom, .. } => {
            assert_eq!(bounds.south_west, LatLng::new(1.04, -51.07));
            assert_eq!(bounds.north_east, LatLng::new(2.0, -50.0));
            assert_eq!(*max_zoom, 12.0);
        }
        other => panic!("expected fit-bounds, got {other:?}"),
    }
}

#[test]
fn test_invalid_point_excluded_but_siblings_render() {
    init_logs();
    let (mut map, state) = surface();
    map.set_points(vec![
        point("bad", f64::NAN, 1.0),
        point("a", 1.04, -51.07),
        point("b", 2.0, -50.0),
    ])
    .unwrap();

    assert_eq!(map.marker_count(), 2);
    assert_eq!(map.rejected_points().len(), 1);
    assert_eq!(map.rejected_points()[0].id, "bad");
    assert_eq!(state.borrow().live_markers.len(), 2);
}

#[test]
fn test_rapid_updates_issue_single_fit() {
    let (mut map, state) = surface();

    map.set_points(vec![point("a", 1.04, -51.07), point("b", 2.0, -50.0)])
        .unwrap();
    map.update(Duration::from_millis(600));

    // Second update lands before the first fit-bounds delay elapses.
    map.set_points(vec![point("c", 10.0, 10.0), point("d", 12.0, 14.0)])
        .unwrap();
    map.update(Duration::from_millis(1500));
    map.update(Duration::from_millis(1500));

    let state = state.borrow();
    let fits = state.fit_calls();
    assert_eq!(fits.len(), 1);
    match &fits[0] {
        CameraCall::FitBounds { bounds, .. } => {
            assert_eq!(bounds.south_west, LatLng::new(10.0, 10.0));
            assert_eq!(bounds.north_east, LatLng::new(12.0, 14.0));
        }
        other => panic!("expected fit-bounds, got {other:?}"),
    }
}

#[test]
fn test_point_replacement_rebuilds_markers() {
    let (mut map, state) = surface();

    map.set_points(vec![point("a", 1.04, -51.07), point("b", 1.04, -51.07)])
        .unwrap();
    assert_eq!(map.marker_count(), 2);

    map.set_points(vec![point("c", 2.0, -50.0)]).unwrap();
    assert_eq!(map.marker_count(), 1);

    let state = state.borrow();
    assert_eq!(state.live_markers.len(), 1);
    assert_eq!(state.live_subscriptions.len(), 2);
}

#[test]
fn test_hover_and_click_flow() {
    let clicked: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = clicked.clone();

    let engine = MockEngine::default();
    let state = engine.state.clone();
    let mut map = MapSurface::new(engine, SurfaceOptions::default())
        .on_select(move |point| sink.lock().unwrap().push(point.id.clone()));

    map.set_points(vec![point("a", 1.04, -51.07)
        .with_category("research")
        .with_summary("w".repeat(140))])
        .unwrap();

    let marker = MarkerId(*state.borrow().live_markers.iter().next().unwrap());

    map.handle_event(MarkerEvent::new(marker, MarkerEventKind::HoverEnter))
        .unwrap();
    {
        let state = state.borrow();
        assert_eq!(state.live_popups.len(), 1);
        let popup = &state.opened_popups[0];
        assert_eq!(popup.title, "Point a");
        assert_eq!(popup.category.as_deref(), Some("research"));
        assert_eq!(popup.summary.as_ref().unwrap().chars().count(), 101);
    }

    map.handle_event(MarkerEvent::new(marker, MarkerEventKind::HoverLeave))
        .unwrap();
    assert!(state.borrow().live_popups.is_empty());

    map.handle_event(MarkerEvent::new(marker, MarkerEventKind::Click))
        .unwrap();
    assert_eq!(clicked.lock().unwrap().as_slice(), ["a"]);
}

#[test]
fn test_auto_frame_toggle() {
    let engine = MockEngine::default();
    let state = engine.state.clone();
    let options = SurfaceOptions {
        auto_frame: false,
        ..Default::default()
    };
    let mut map = MapSurface::new(engine, options);

    map.set_points(vec![point("a", 1.04, -51.07), point("b", 2.0, -50.0)])
        .unwrap();
    assert!(state.borrow().camera_calls.is_empty());

    // Enabling reframes over the current points at once.
    map.set_auto_frame(true);
    assert_eq!(state.borrow().camera_calls.len(), 1);
    assert!(map.is_animating());

    // Disabling cancels the pending fit.
    map.set_auto_frame(false);
    assert!(!map.is_animating());
    map.update(Duration::from_secs(10));
    assert_eq!(state.borrow().fit_calls().len(), 0);
}

#[test]
fn test_teardown_releases_all_resources() {
    let (mut map, state) = surface();

    map.set_points(vec![
        point("a", 1.04, -51.07),
        point("b", 1.04, -51.07),
        point("c", 2.0, -50.0),
    ])
    .unwrap();

    // Leave a popup open and a fit pending, then drop the surface.
    let marker = MarkerId(*state.borrow().live_markers.iter().next().unwrap());
    map.handle_event(MarkerEvent::new(marker, MarkerEventKind::HoverEnter))
        .unwrap();
    assert!(map.is_animating());
    drop(map);

    let state = state.borrow();
    assert!(state.live_markers.is_empty());
    assert!(state.live_popups.is_empty());
    assert!(state.live_subscriptions.is_empty());
    // The pending fit never fired.
    assert!(state.fit_calls().is_empty());
}
