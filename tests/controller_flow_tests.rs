use approx::assert_relative_eq;
use geo_viewport::{
    Envelope, InteractionMode, MapCommand, MapController, MapIntent, MapState, OverviewExtent,
    PanDirection, PixelRect, ViewportOptions,
};
use glam::DVec2;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn env(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Envelope {
    Envelope::new(minx, miny, maxx, maxy).expect("Envelope sollte gültig sein")
}

fn make_state(options: ViewportOptions) -> MapState {
    MapState::new(env(0.0, 0.0, 50.0, 50.0), [100.0, 100.0], options)
        .expect("State sollte erstellt werden")
}

#[test]
fn test_set_extent_request_updates_view_and_overview() {
    init_logger();
    let mut controller = MapController::new();
    let mut state = make_state(ViewportOptions::default());

    controller
        .handle_intent(
            &mut state,
            MapIntent::SetExtentRequested {
                envelope: env(10.0, 10.0, 30.0, 40.0),
            },
        )
        .expect("SetExtentRequested sollte durchlaufen");

    assert_eq!(state.view.envelope, env(10.0, 10.0, 30.0, 40.0));
    // Übersicht folgt ohne Rand: Highlight füllt das ganze Widget
    assert_eq!(
        state.view.overview.highlight(),
        Some(PixelRect::new(0.0, 0.0, 200.0, 150.0))
    );

    match state.command_log.entries().last() {
        Some(MapCommand::SetExtent { envelope }) => {
            assert_eq!(*envelope, env(10.0, 10.0, 30.0, 40.0))
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_displacement_moves_view_against_pointer() {
    init_logger();
    let mut controller = MapController::new();
    let mut state = make_state(ViewportOptions::default());

    controller
        .handle_intent(
            &mut state,
            MapIntent::DisplacementRequested {
                delta: DVec2::new(15.0, -7.5),
            },
        )
        .expect("DisplacementRequested sollte durchlaufen");

    assert_eq!(state.view.envelope, env(-15.0, 7.5, 35.0, 57.5));
}

#[test]
fn test_degenerate_extent_is_rejected_without_change() {
    init_logger();
    let mut controller = MapController::new();
    let mut state = make_state(ViewportOptions::default());
    let highlight_before = state.view.overview.highlight();

    let result = controller.handle_intent(
        &mut state,
        MapIntent::SetExtentRequested {
            envelope: env(5.0, 5.0, 5.0, 20.0),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.view.envelope, env(0.0, 0.0, 50.0, 50.0));
    assert_eq!(state.view.overview.highlight(), highlight_before);
}

#[test]
fn test_extent_text_input_sets_view() {
    init_logger();
    let mut controller = MapController::new();
    let mut state = make_state(ViewportOptions::default());

    controller
        .handle_intent(
            &mut state,
            MapIntent::ExtentEntered {
                text: "100;200;300;250".to_string(),
            },
        )
        .expect("ExtentEntered sollte durchlaufen");

    assert_eq!(state.view.envelope, env(100.0, 200.0, 300.0, 250.0));

    let result = controller.handle_intent(
        &mut state,
        MapIntent::ExtentEntered {
            text: "100;200;300".to_string(),
        },
    );
    assert!(result.is_err());
    assert_eq!(state.view.envelope, env(100.0, 200.0, 300.0, 250.0));
}

#[test]
fn test_toolbar_zoom_in_then_reset_restores_initial_view() {
    init_logger();
    let mut controller = MapController::new();
    let mut state = make_state(ViewportOptions::default());

    controller
        .handle_intent(&mut state, MapIntent::ZoomInRequested)
        .expect("ZoomInRequested sollte durchlaufen");

    assert_relative_eq!(state.view.envelope.width(), 37.5);
    assert_eq!(state.view.envelope.centroid(), DVec2::new(25.0, 25.0));

    controller
        .handle_intent(&mut state, MapIntent::ResetViewRequested)
        .expect("ResetViewRequested sollte durchlaufen");

    assert_eq!(state.view.envelope, env(0.0, 0.0, 50.0, 50.0));
}

#[test]
fn test_pan_north_east_shifts_by_half_view() {
    init_logger();
    let mut controller = MapController::new();
    let mut state = make_state(ViewportOptions::default());

    controller
        .handle_intent(
            &mut state,
            MapIntent::PanRequested {
                direction: PanDirection::NorthEast,
            },
        )
        .expect("PanRequested sollte durchlaufen");

    assert_eq!(state.view.envelope, env(25.0, 25.0, 75.0, 75.0));
}

#[test]
fn test_pan_by_angle_east() {
    init_logger();
    let mut controller = MapController::new();
    let mut state = make_state(ViewportOptions::default());

    controller
        .handle_intent(&mut state, MapIntent::PanByAngleRequested { degrees: 90.0 })
        .expect("PanByAngleRequested sollte durchlaufen");

    let e = state.view.envelope;
    assert_relative_eq!(e.minx(), 25.0, epsilon = 1e-9);
    assert_relative_eq!(e.miny(), 0.0, epsilon = 1e-9);
}

#[test]
fn test_resize_and_mode_selection() {
    init_logger();
    let mut controller = MapController::new();
    let mut state = make_state(ViewportOptions::default());

    controller
        .handle_intents(
            &mut state,
            [
                MapIntent::MapResized {
                    width: 640.0,
                    height: 480.0,
                },
                MapIntent::InteractionModeSelected {
                    mode: InteractionMode::Pan,
                },
            ],
        )
        .expect("Intents sollten durchlaufen");

    assert_eq!(state.view.map_size, [640.0, 480.0]);
    assert_eq!(state.tool.mode, InteractionMode::Pan);
    assert_eq!(state.command_log.len(), 2);

    let result = controller.handle_intent(
        &mut state,
        MapIntent::MapResized {
            width: 0.0,
            height: 480.0,
        },
    );
    assert!(result.is_err());
    assert_eq!(state.view.map_size, [640.0, 480.0]);
}

#[test]
fn test_fixed_overview_highlight_tracks_main_view() {
    init_logger();
    let options = ViewportOptions {
        overview_extent: OverviewExtent::Fixed {
            envelope: env(0.0, 0.0, 100.0, 100.0),
        },
        ..ViewportOptions::default()
    };
    let mut controller = MapController::new();
    let mut state = make_state(options);

    assert_eq!(
        state.view.overview.highlight(),
        Some(PixelRect::new(0.0, 75.0, 100.0, 150.0))
    );

    controller
        .handle_intent(
            &mut state,
            MapIntent::RecenterRequested {
                center: DVec2::new(50.0, 50.0),
            },
        )
        .expect("RecenterRequested sollte durchlaufen");

    assert_eq!(state.view.envelope, env(25.0, 25.0, 75.0, 75.0));
    assert_eq!(
        state.view.overview.highlight(),
        Some(PixelRect::new(50.0, 37.5, 150.0, 112.5))
    );
}

#[test]
fn test_invalid_options_fall_back_and_keep_navigation_working() {
    init_logger();
    let options = ViewportOptions {
        zoom_step_percent: 150.0,
        pan_step_percent: -5.0,
        overview_extent: OverviewExtent::FollowMain { margin_ratio: -0.3 },
        ..ViewportOptions::default()
    };
    let mut controller = MapController::new();
    let mut state = make_state(options);

    assert_eq!(state.options, ViewportOptions::default());

    controller
        .handle_intents(
            &mut state,
            [
                MapIntent::ZoomInRequested,
                MapIntent::PanRequested {
                    direction: PanDirection::North,
                },
            ],
        )
        .expect("Zoom und Pan sollten mit Standardwerten durchlaufen");

    assert_relative_eq!(state.view.envelope.width(), 37.5);
    assert!(state.view.overview.highlight().is_some());
}

#[test]
fn test_failed_command_is_not_logged() {
    init_logger();
    let mut controller = MapController::new();
    let mut state = make_state(ViewportOptions::default());

    controller
        .handle_intent(&mut state, MapIntent::ResetViewRequested)
        .expect("ResetViewRequested sollte durchlaufen");
    let result = controller.handle_intent(
        &mut state,
        MapIntent::ZoomRequested {
            center: DVec2::new(1.0, 1.0),
            percent: 100.0,
        },
    );

    assert!(result.is_err());
    assert_eq!(state.command_log.len(), 1);
    assert_eq!(
        state.command_log.last_view_change(),
        Some(&MapCommand::ResetView)
    );
}
