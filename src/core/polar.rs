//! Ableitung der Polarkurve aus der Originalkurve.

use super::ControlPoint;
use glam::Vec3;

/// Feste Farbe abgeleiteter Polar-Punkte (RGB: Blau). Polar-Punkte sind nicht editierbar.
pub const POLAR_POINT_COLOR: Vec3 = Vec3::new(0.1, 0.2, 0.8);

/// Berechnet die Kontrollpunkte der Polarkurve.
///
/// Für jedes benachbarte Paar `(P[i], P[i+1])` entsteht genau ein Punkt
/// `P[i] + (P[i+1] - P[i]) * t1`. Weniger als 2 Originalpunkte ergeben
/// eine leere Folge.
pub fn derive_polar(original: &[ControlPoint], t1: f32) -> Vec<ControlPoint> {
    original
        .windows(2)
        .map(|pair| {
            let direction = pair[1].position - pair[0].position;
            ControlPoint::new(pair[0].position + direction * t1, POLAR_POINT_COLOR)
        })
        .collect()
}
