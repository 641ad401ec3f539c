//! Handler für globale Darstellungs-Einstellungen.

use crate::app::use_cases;
use crate::app::AppState;

/// Schaltet das Zeichnen der Originalkurve.
pub fn set_draw_original(state: &mut AppState, enabled: bool) {
    use_cases::settings::set_draw_original(state, enabled);
}

/// Schaltet das Zeichnen der Polarkurve.
pub fn set_draw_polar(state: &mut AppState, enabled: bool) {
    use_cases::settings::set_draw_polar(state, enabled);
}

/// Setzt die Sampleanzahl.
pub fn set_sample_count(state: &mut AppState, count: u32) {
    use_cases::settings::set_sample_count(state, count);
}

/// Setzt den Polar-Parameter t1.
pub fn set_t1(state: &mut AppState, t1: f32) {
    use_cases::settings::set_t1(state, t1);
}
