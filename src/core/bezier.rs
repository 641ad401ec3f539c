//! Bezier-Auswertung (de Casteljau) und Abtastung als Polylinie.
//!
//! CPU-Gegenstück zur Abtastung im Compute-Shader; wird für
//! Statusanzeigen und Tests verwendet.

use glam::Vec2;

/// Wertet die Bezier-Kurve der Kontrollpunkte bei Parameter `t` aus.
///
/// Gibt `None` zurück, wenn keine Punkte vorhanden sind.
pub fn evaluate(points: &[Vec2], t: f32) -> Option<Vec2> {
    let mut scratch: Vec<Vec2> = points.to_vec();
    if scratch.is_empty() {
        return None;
    }

    let mut len = scratch.len();
    while len > 1 {
        for i in 0..len - 1 {
            scratch[i] = scratch[i].lerp(scratch[i + 1], t);
        }
        len -= 1;
    }
    Some(scratch[0])
}

/// Tastet die Kurve an `sample_count` gleichverteilten Parametern ab.
///
/// Liefert eine leere Folge für weniger als 2 Kontrollpunkte oder
/// weniger als 2 Samples.
pub fn sample(points: &[Vec2], sample_count: u32) -> Vec<Vec2> {
    if points.len() < 2 || sample_count < 2 {
        return Vec::new();
    }

    let last = (sample_count - 1) as f32;
    (0..sample_count)
        .filter_map(|i| evaluate(points, i as f32 / last))
        .collect()
}

/// Länge der Polylinie aus aufeinanderfolgenden Samples.
pub fn polyline_length(samples: &[Vec2]) -> f32 {
    samples
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .sum()
}
