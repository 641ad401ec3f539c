//! Use-Cases für Kontrollpunkte der Originalkurve.
//!
//! Jede Änderung an der Originalkurve endet in [`commit_original_points_change`]:
//! Originalpuffer und Konstanten werden als veraltet markiert, danach wird die
//! Polarkurve neu abgeleitet.

use crate::app::AppState;
use crate::core::{ControlPoint, CurveKind};
use glam::{Vec2, Vec3};

/// Hängt einen Kontrollpunkt an. Bei voller Kapazität passiert nichts.
pub fn append_point(state: &mut AppState, point: ControlPoint) {
    if !point.position.is_finite() || !point.color.is_finite() {
        log::warn!("Kontrollpunkt mit ungültigen Werten ignoriert: {:?}", point);
        return;
    }
    if !state.curves.push_original_point(point) {
        log::debug!("Kontrollpunkt-Kapazität erreicht, Add ignoriert");
        return;
    }
    commit_original_points_change(state);
    log::debug!(
        "Kontrollpunkt angehängt ({} Punkte)",
        state.curves.original().len()
    );
}

/// Entfernt alle angegebenen Kontrollpunkte in einem Schritt.
///
/// Indizes beziehen sich auf die Reihenfolge vor dem Entfernen.
pub fn remove_points(state: &mut AppState, indices: &[usize]) {
    let removed = state.curves.remove_original_points(indices);
    if removed == 0 {
        return;
    }
    commit_original_points_change(state);
    log::debug!(
        "{} Kontrollpunkt(e) entfernt ({} verbleibend)",
        removed,
        state.curves.original().len()
    );
}

/// Setzt die Position eines Kontrollpunkts (geklemmt auf [-1, 1]).
pub fn set_position(state: &mut AppState, index: usize, position: Vec2) {
    if !position.is_finite() {
        return;
    }
    if state.curves.set_original_position(index, position) {
        commit_original_points_change(state);
    }
}

/// Setzt die Farbe eines Kontrollpunkts.
///
/// Die Polarkurve hat feste Punktfarben, daher wird nur der Originalpuffer
/// als veraltet markiert.
pub fn set_color(state: &mut AppState, index: usize, color: Vec3) {
    if !color.is_finite() {
        return;
    }
    if state.curves.set_original_point_color(index, color) {
        state.dirty.mark_curve_points(CurveKind::Original);
    }
}

/// Gemeinsamer Abschluss jeder Änderung an der Punktmenge oder Punktpositionen.
pub(crate) fn commit_original_points_change(state: &mut AppState) {
    state.dirty.mark_curve_points(CurveKind::Original);
    state.dirty.mark_constants();
    rederive_polar(state);
}

/// Leitet die Polarkurve mit dem aktuellen t1 neu ab.
pub(crate) fn rederive_polar(state: &mut AppState) {
    state.curves.rederive_polar(state.settings.t1);
    state.dirty.mark_curve_points(CurveKind::Polar);
    state.dirty.mark_constants();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_CONTROL_POINTS;
    use crate::shared::DirtyState;
    use approx::assert_relative_eq;

    fn state_with_points(positions: &[(f32, f32)]) -> AppState {
        let mut state = AppState::new();
        for &(x, y) in positions {
            append_point(&mut state, ControlPoint::at(Vec2::new(x, y)));
        }
        state.dirty = DirtyState::new();
        state
    }

    #[test]
    fn append_marks_both_curves_and_constants() {
        let mut state = AppState::new();

        append_point(&mut state, ControlPoint::default());

        assert_eq!(state.curves.original().len(), 1);
        assert!(state.dirty.curve_points(CurveKind::Original));
        assert!(state.dirty.curve_points(CurveKind::Polar));
        assert!(state.dirty.constants());
        assert!(!state.dirty.viewport());
    }

    #[test]
    fn append_at_capacity_is_noop_without_dirty() {
        let positions = [(0.0, 0.0); MAX_CONTROL_POINTS];
        let mut state = state_with_points(&positions);

        append_point(&mut state, ControlPoint::default());

        assert_eq!(state.curves.original().len(), MAX_CONTROL_POINTS);
        assert!(!state.dirty.any());
    }

    #[test]
    fn append_rederives_polar() {
        let mut state = state_with_points(&[(0.0, 0.0)]);
        assert!(state.curves.polar().is_empty());

        append_point(&mut state, ControlPoint::at(Vec2::new(1.0, 0.0)));

        assert_eq!(state.curves.polar().len(), 1);
        assert_relative_eq!(state.curves.polar().points()[0].position.x, 0.5);
    }

    #[test]
    fn remove_batch_uses_indices_before_removal() {
        let mut state = state_with_points(&[
            (-1.0, 0.0),
            (-0.5, 0.0),
            (0.0, 0.0),
            (0.5, 0.0),
            (1.0, 0.0),
        ]);

        remove_points(&mut state, &[1, 3]);

        let xs: Vec<f32> = state
            .curves
            .original()
            .points()
            .iter()
            .map(|p| p.position.x)
            .collect();
        assert_eq!(xs, vec![-1.0, 0.0, 1.0]);
        assert_eq!(state.curves.polar().len(), 2);
        assert!(state.dirty.curve_points(CurveKind::Original));
        assert!(state.dirty.curve_points(CurveKind::Polar));
    }

    #[test]
    fn remove_with_invalid_indices_is_noop() {
        let mut state = state_with_points(&[(0.0, 0.0)]);

        remove_points(&mut state, &[3, 7]);

        assert_eq!(state.curves.original().len(), 1);
        assert!(!state.dirty.any());
    }

    #[test]
    fn set_position_clamps_and_rederives() {
        let mut state = state_with_points(&[(0.0, 0.0), (0.5, 0.0)]);

        set_position(&mut state, 1, Vec2::new(4.0, -3.0));

        assert_eq!(
            state.curves.original().points()[1].position,
            Vec2::new(1.0, -1.0)
        );
        assert_eq!(
            state.curves.polar().points()[0].position,
            Vec2::new(0.5, -0.5)
        );
        assert!(state.dirty.constants());
    }

    #[test]
    fn set_position_non_finite_is_noop() {
        let mut state = state_with_points(&[(0.0, 0.0)]);

        set_position(&mut state, 0, Vec2::new(f32::NAN, 0.0));

        assert_eq!(state.curves.original().points()[0].position, Vec2::ZERO);
        assert!(!state.dirty.any());
    }

    #[test]
    fn set_color_marks_only_original_points() {
        let mut state = state_with_points(&[(0.0, 0.0), (0.5, 0.5)]);

        set_color(&mut state, 0, Vec3::new(0.0, 1.0, 0.0));

        assert!(state.dirty.curve_points(CurveKind::Original));
        assert!(!state.dirty.curve_points(CurveKind::Polar));
        assert!(!state.dirty.constants());
    }

    #[test]
    fn unchanged_color_does_not_mark_dirty() {
        let mut state = state_with_points(&[(0.0, 0.0)]);

        set_color(&mut state, 0, Vec3::new(1.0, 0.0, 0.0));

        assert!(!state.dirty.any());
    }
}
