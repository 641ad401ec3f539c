//! Use-Case für Farbe und Stärke einer Kurve.

use crate::app::AppState;
use crate::core::{CurveKind, CurveStyle};

/// Setzt den Stil einer Kurve. Werte werden geklemmt, nicht abgelehnt.
pub fn set_curve_style(state: &mut AppState, kind: CurveKind, style: CurveStyle) {
    if !style.color.is_finite() || !style.thickness.is_finite() {
        return;
    }
    if state.curves.set_style(kind, style) {
        state.dirty.mark_constants();
    }
}
