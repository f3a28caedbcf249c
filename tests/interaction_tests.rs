//! Vollständiger Regelkreis: Pointer-Controller → Map-Controller → Übersicht.

use geo_viewport::{
    CaptureFlag, ElementPointer, Envelope, HostEvent, InteractionMode, MapController, MapIntent,
    MapSession, MapState, OverviewExtent, PointerInteractionController, ViewportContext,
    ViewportOptions,
};
use glam::DVec2;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn env(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Envelope {
    Envelope::new(minx, miny, maxx, maxy).expect("Envelope sollte gültig sein")
}

/// Führt eine Drag-Geste im aktuellen Modus aus und gibt die Reports zurück.
fn drag(
    state: &MapState,
    pointer: &mut PointerInteractionController,
    capture: &mut CaptureFlag,
    from: (f64, f64),
    to: (f64, f64),
) -> Vec<MapIntent> {
    let transform = state.view.transform().expect("Transformation");
    let mut ctx = ViewportContext {
        mode: state.tool.mode,
        transform: &transform,
        options: &state.options,
        capture,
    };
    let mut events = Vec::new();
    pointer.pointer_down(&mut ctx, &ElementPointer::at(from.0, from.1));
    pointer.pointer_move(&ElementPointer::at(to.0, to.1));
    pointer.pointer_up(&mut ctx, &ElementPointer::at(to.0, to.1), &mut events);
    events
}

#[test]
fn test_zoom_box_drag_closes_the_loop() {
    init_logger();
    let mut state = MapState::new(
        env(0.0, 0.0, 50.0, 50.0),
        [100.0, 100.0],
        ViewportOptions::default(),
    )
    .expect("State");
    let mut controller = MapController::new();
    let mut pointer = PointerInteractionController::new();
    let mut capture = CaptureFlag::default();

    controller
        .handle_intent(
            &mut state,
            MapIntent::InteractionModeSelected {
                mode: InteractionMode::ZoomIn,
            },
        )
        .expect("Modus");

    let events = drag(&state, &mut pointer, &mut capture, (20.0, 20.0), (60.0, 80.0));
    assert_eq!(
        events,
        vec![MapIntent::SetExtentRequested {
            envelope: env(10.0, 10.0, 30.0, 40.0)
        }]
    );
    controller
        .handle_intents(&mut state, events)
        .expect("Reports sollten verarbeitet werden");

    assert_eq!(state.view.envelope, env(10.0, 10.0, 30.0, 40.0));
    assert!(!capture.captured);
    assert_eq!(capture.acquisitions, 1);
    assert_eq!(capture.releases, 1);
    assert_eq!(state.tool.mode, InteractionMode::ZoomIn);
}

#[test]
fn test_consecutive_pans_use_updated_transform() {
    init_logger();
    let mut state = MapState::new(
        env(0.0, 0.0, 50.0, 50.0),
        [100.0, 100.0],
        ViewportOptions::default(),
    )
    .expect("State");
    let mut controller = MapController::new();
    let mut pointer = PointerInteractionController::new();
    let mut capture = CaptureFlag::default();
    state.tool.mode = InteractionMode::Pan;

    for _ in 0..2 {
        let events = drag(&state, &mut pointer, &mut capture, (0.0, 0.0), (20.0, 0.0));
        controller.handle_intents(&mut state, events).expect("Pan");
    }

    assert_eq!(state.view.envelope, env(-20.0, 0.0, 30.0, 50.0));
}

#[test]
fn test_overview_click_recenters_main_view() {
    init_logger();
    let options = ViewportOptions {
        overview_extent: OverviewExtent::Fixed {
            envelope: env(0.0, 0.0, 100.0, 100.0),
        },
        ..ViewportOptions::default()
    };
    let mut session =
        MapSession::new(env(0.0, 0.0, 50.0, 50.0), [100.0, 100.0], options).expect("Session");

    let update = session
        .handle_event(HostEvent::OverviewClick {
            x: Some(160.0),
            y: Some(30.0),
        })
        .expect("Klick");

    // (160, 30) px → (80, 80) geo
    assert_eq!(update.extent, "55;55;105;105");
    assert_eq!(session.state().view.envelope.centroid(), DVec2::new(80.0, 80.0));
}

#[test]
fn test_zoom_out_click_via_json_bridge() {
    init_logger();
    let mut session = MapSession::new(
        env(0.0, 0.0, 50.0, 50.0),
        [100.0, 100.0],
        ViewportOptions::default(),
    )
    .expect("Session");

    session
        .handle_json(r#"{"type":"select_mode","mode":"ZoomOut"}"#)
        .expect("Modus");
    session
        .handle_json(r#"{"type":"pointer_down","x":50,"y":50}"#)
        .expect("Down");
    let update = session
        .handle_json(r#"{"type":"pointer_up","x":50,"y":50}"#)
        .expect("Up");

    let update: geo_viewport::HostUpdate = serde_json::from_str(&update).expect("Update");
    assert_eq!(update.extent, "-6.25;-6.25;56.25;56.25");
    assert_eq!(update.mode, InteractionMode::ZoomOut);
}

#[test]
fn test_idle_mode_never_reports() {
    init_logger();
    let state = MapState::new(
        env(0.0, 0.0, 50.0, 50.0),
        [100.0, 100.0],
        ViewportOptions::default(),
    )
    .expect("State");
    let mut pointer = PointerInteractionController::new();
    let mut capture = CaptureFlag::default();

    let events = drag(&state, &mut pointer, &mut capture, (10.0, 10.0), (90.0, 90.0));

    assert!(events.is_empty());
    assert_eq!(capture.acquisitions, 0);
}
