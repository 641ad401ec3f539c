use bezier_polar_editor::{AppController, AppIntent, AppState, CurveKind, DirtyState};
use bezier_polar_editor::{ViewportSize, MAX_CONTROL_POINTS};
use glam::{Vec2, Vec3};

fn state_with_points(controller: &mut AppController, positions: &[(f32, f32)]) -> AppState {
    let mut state = AppState::new();
    for (index, &(x, y)) in positions.iter().enumerate() {
        controller
            .handle_intent(&mut state, AppIntent::AddControlPointRequested)
            .expect("Add sollte ohne Fehler durchlaufen");
        controller
            .handle_intent(
                &mut state,
                AppIntent::ControlPointPositionChanged {
                    index,
                    position: Vec2::new(x, y),
                },
            )
            .expect("Positionsänderung sollte ohne Fehler durchlaufen");
    }
    state.dirty = DirtyState::new();
    state
}

fn original_positions(state: &AppState) -> Vec<Vec2> {
    state.curves.original().positions()
}

#[test]
fn test_exit_requested_sets_exit_flag_without_touching_gpu_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert!(!state.dirty.any(), "Beenden darf keine GPU-Ressource markieren");
}

#[test]
fn test_polar_scenario_three_points() {
    let mut controller = AppController::new();
    let state = state_with_points(&mut controller, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);

    assert_eq!(
        state.curves.polar().positions(),
        vec![Vec2::new(0.5, 0.0), Vec2::new(1.0, 0.5)]
    );
}

#[test]
fn test_add_at_capacity_keeps_five_points_and_flags_clean() {
    let mut controller = AppController::new();
    let positions = [(-1.0, 0.0), (-0.5, 0.5), (0.0, 0.0), (0.5, -0.5), (1.0, 0.0)];
    let mut state = state_with_points(&mut controller, &positions);
    let before = original_positions(&state);

    controller
        .handle_intent(&mut state, AppIntent::AddControlPointRequested)
        .expect("Add sollte ohne Fehler durchlaufen");

    assert_eq!(state.original_point_count(), MAX_CONTROL_POINTS);
    assert_eq!(original_positions(&state), before);
    assert!(!state.dirty.any());
}

#[test]
fn test_remove_batch_1_3_leaves_a_c_e() {
    let mut controller = AppController::new();
    let positions = [(-1.0, 0.0), (-0.5, 0.5), (0.0, 0.0), (0.5, -0.5), (1.0, 0.0)];
    let mut state = state_with_points(&mut controller, &positions);

    controller
        .handle_intent(
            &mut state,
            AppIntent::RemoveControlPointsRequested {
                indices: vec![1, 3],
            },
        )
        .expect("Remove sollte ohne Fehler durchlaufen");

    assert_eq!(
        original_positions(&state),
        vec![Vec2::new(-1.0, 0.0), Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]
    );
    assert_eq!(state.polar_point_count(), 2);
    assert!(state.dirty.curve_points(CurveKind::Original));
    assert!(state.dirty.curve_points(CurveKind::Polar));
    assert!(state.dirty.constants());
}

#[test]
fn test_remove_batch_is_order_independent() {
    let mut controller = AppController::new();
    let positions = [(-1.0, 0.0), (-0.5, 0.5), (0.0, 0.0), (0.5, -0.5), (1.0, 0.0)];
    let mut ascending = state_with_points(&mut controller, &positions);
    let mut descending = state_with_points(&mut controller, &positions);

    controller
        .handle_intent(
            &mut ascending,
            AppIntent::RemoveControlPointsRequested {
                indices: vec![0, 2, 4],
            },
        )
        .expect("Remove sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut descending,
            AppIntent::RemoveControlPointsRequested {
                indices: vec![4, 0, 2],
            },
        )
        .expect("Remove sollte ohne Fehler durchlaufen");

    assert_eq!(original_positions(&ascending), original_positions(&descending));
    assert_eq!(
        original_positions(&ascending),
        vec![Vec2::new(-0.5, 0.5), Vec2::new(0.5, -0.5)]
    );
}

#[test]
fn test_remove_last_shortcut_removes_tail() {
    let mut controller = AppController::new();
    let mut state = state_with_points(&mut controller, &[(0.0, 0.0), (0.5, 0.5)]);

    controller
        .handle_intent(&mut state, AppIntent::RemoveLastControlPointRequested)
        .expect("Remove-Last sollte ohne Fehler durchlaufen");

    assert_eq!(original_positions(&state), vec![Vec2::ZERO]);
    assert!(state.curves.polar().is_empty());
}

#[test]
fn test_color_edit_marks_constants_only() {
    let mut controller = AppController::new();
    let mut state = state_with_points(&mut controller, &[(0.0, 0.0), (0.5, 0.5)]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CurveStyleChanged {
                kind: CurveKind::Original,
                color: Vec3::new(0.2, 0.4, 0.6),
                thickness: 2.0,
            },
        )
        .expect("Stiländerung sollte ohne Fehler durchlaufen");

    assert!(state.dirty.constants());
    assert!(!state.dirty.curve_points(CurveKind::Original));
    assert!(!state.dirty.curve_points(CurveKind::Polar));
    assert_eq!(state.curves.original().style().thickness, 2.0);
}

#[test]
fn test_t1_change_rederives_polar_before_render() {
    let mut controller = AppController::new();
    let mut state = state_with_points(&mut controller, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);

    controller
        .handle_intent(&mut state, AppIntent::T1Changed { t1: 0.25 })
        .expect("t1-Änderung sollte ohne Fehler durchlaufen");

    assert!(state.dirty.curve_points(CurveKind::Polar));
    assert_eq!(
        state.curves.polar().positions(),
        vec![Vec2::new(0.25, 0.0), Vec2::new(1.0, 0.25)]
    );
}

#[test]
fn test_sample_count_intent_is_clamped() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::SampleCountChanged { count: 500 })
        .expect("Sampleänderung sollte ohne Fehler durchlaufen");

    assert_eq!(state.settings.sample_count, 100);
    assert!(state.dirty.constants());
}

#[test]
fn test_viewport_resize_marks_only_viewport() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [640.0, 480.0],
            },
        )
        .expect("Resize sollte ohne Fehler durchlaufen");

    assert_eq!(state.view.viewport_size, ViewportSize::new(640, 480));
    assert!(state.dirty.viewport());
    assert!(!state.dirty.constants());

    state.dirty = DirtyState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [640.0, 480.0],
            },
        )
        .expect("Resize sollte ohne Fehler durchlaufen");

    assert!(!state.dirty.viewport());
}

#[test]
fn test_cursor_moved_updates_view_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CursorMoved {
                curve_pos: Some(Vec2::new(0.1, 0.2)),
            },
        )
        .expect("Cursor-Update sollte ohne Fehler durchlaufen");

    assert_eq!(state.view.cursor_curve_pos, Some(Vec2::new(0.1, 0.2)));
    assert!(!state.dirty.any());
}
