//! Use-Cases für globale Einstellungen.

use super::control_points::rederive_polar;
use crate::app::AppState;
use crate::core::settings::{clamp_sample_count, clamp_t1};

/// Schaltet das Zeichnen der Originalkurve.
pub fn set_draw_original(state: &mut AppState, enabled: bool) {
    if state.settings.draw_original != enabled {
        state.settings.draw_original = enabled;
        state.dirty.mark_constants();
    }
}

/// Schaltet das Zeichnen der Polarkurve.
pub fn set_draw_polar(state: &mut AppState, enabled: bool) {
    if state.settings.draw_polar != enabled {
        state.settings.draw_polar = enabled;
        state.dirty.mark_constants();
    }
}

/// Setzt die Sampleanzahl (geklemmt auf [25, 100]).
pub fn set_sample_count(state: &mut AppState, count: u32) {
    let count = clamp_sample_count(count);
    if state.settings.sample_count != count {
        state.settings.sample_count = count;
        state.dirty.mark_constants();
    }
}

/// Setzt t1 (geklemmt auf [0, 1]) und leitet die Polarkurve neu ab.
pub fn set_t1(state: &mut AppState, t1: f32) {
    if !t1.is_finite() {
        return;
    }
    let t1 = clamp_t1(t1);
    if state.settings.t1 == t1 {
        return;
    }
    state.settings.t1 = t1;
    rederive_polar(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::control_points::append_point;
    use crate::core::{ControlPoint, CurveKind};
    use crate::shared::DirtyState;
    use glam::Vec2;

    #[test]
    fn sample_count_is_clamped() {
        let mut state = AppState::new();

        set_sample_count(&mut state, 5);
        assert_eq!(state.settings.sample_count, 25);

        set_sample_count(&mut state, 1000);
        assert_eq!(state.settings.sample_count, 100);
        assert!(state.dirty.constants());
    }

    #[test]
    fn t1_change_rederives_polar_and_marks_it() {
        let mut state = AppState::new();
        append_point(&mut state, ControlPoint::at(Vec2::new(0.0, 0.0)));
        append_point(&mut state, ControlPoint::at(Vec2::new(1.0, 0.0)));
        state.dirty = DirtyState::new();

        set_t1(&mut state, 0.25);

        assert_eq!(state.curves.polar().points()[0].position, Vec2::new(0.25, 0.0));
        assert!(state.dirty.curve_points(CurveKind::Polar));
        assert!(state.dirty.constants());
        assert!(!state.dirty.curve_points(CurveKind::Original));
    }

    #[test]
    fn t1_out_of_range_is_clamped() {
        let mut state = AppState::new();

        set_t1(&mut state, 1.5);
        assert_eq!(state.settings.t1, 1.0);

        set_t1(&mut state, f32::INFINITY);
        assert_eq!(state.settings.t1, 1.0);
    }

    #[test]
    fn toggling_to_same_value_is_noop() {
        let mut state = AppState::new();

        set_draw_polar(&mut state, true);
        set_draw_original(&mut state, true);

        assert!(!state.dirty.any());

        set_draw_polar(&mut state, false);
        assert!(!state.settings.draw_polar);
        assert!(state.dirty.constants());
    }
}
