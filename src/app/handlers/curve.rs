//! Handler für Kontrollpunkte und Kurvenstile.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ControlPoint, CurveKind, CurveStyle};
use glam::{Vec2, Vec3};

/// Hängt einen Kontrollpunkt an die Originalkurve an.
pub fn append_point(state: &mut AppState, point: ControlPoint) {
    use_cases::control_points::append_point(state, point);
}

/// Entfernt mehrere Kontrollpunkte in einem Batch.
pub fn remove_points(state: &mut AppState, indices: &[usize]) {
    use_cases::control_points::remove_points(state, indices);
}

/// Setzt die Position eines Kontrollpunkts.
pub fn set_point_position(state: &mut AppState, index: usize, position: Vec2) {
    use_cases::control_points::set_position(state, index, position);
}

/// Setzt die Farbe eines Kontrollpunkts.
pub fn set_point_color(state: &mut AppState, index: usize, color: Vec3) {
    use_cases::control_points::set_color(state, index, color);
}

/// Setzt Farbe und Stärke einer Kurve.
pub fn set_curve_style(state: &mut AppState, kind: CurveKind, style: CurveStyle) {
    use_cases::curve_style::set_curve_style(state, kind, style);
}
