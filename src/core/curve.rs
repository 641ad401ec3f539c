//! Kurvenmodell: Original- und Polarkurve mit Kontrollpunkten und Darstellung.

use super::control_point::{clamp_color, clamp_position};
use super::polar::derive_polar;
use super::ControlPoint;
use glam::{Vec2, Vec3};
use std::collections::HashSet;

/// Maximale Anzahl an Kontrollpunkten pro Kurve (GPU-Buffer-Kapazität).
pub const MAX_CONTROL_POINTS: usize = 5;
/// Minimale Linienstärke in Pixeln.
pub const THICKNESS_MIN: f32 = 1.0;
/// Maximale Linienstärke in Pixeln.
pub const THICKNESS_MAX: f32 = 3.0;

/// Rolle einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// Vom Benutzer direkt bearbeitete Kurve
    Original,
    /// Aus der Originalkurve abgeleitete Kurve (nur lesend)
    Polar,
}

impl CurveKind {
    /// Beide Rollen in Buffer-Reihenfolge.
    pub const ALL: [CurveKind; 2] = [CurveKind::Original, CurveKind::Polar];

    /// Index für per-Kurve-Arrays (Dirty-Flags, GPU-Buffer).
    pub const fn index(self) -> usize {
        match self {
            CurveKind::Original => 0,
            CurveKind::Polar => 1,
        }
    }

    /// Anzeigename für UI und Logs.
    pub const fn label(self) -> &'static str {
        match self {
            CurveKind::Original => "Bezier-Kurve",
            CurveKind::Polar => "Polarkurve",
        }
    }
}

/// Darstellungsattribute einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStyle {
    /// Linienfarbe (RGB)
    pub color: Vec3,
    /// Linienstärke in Pixeln
    pub thickness: f32,
}

impl CurveStyle {
    /// Erstellt einen Stil mit geklemmten Werten.
    pub fn new(color: Vec3, thickness: f32) -> Self {
        Self {
            color: clamp_color(color),
            thickness: clamp_thickness(thickness),
        }
    }
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            thickness: THICKNESS_MIN,
        }
    }
}

/// Begrenzt eine Linienstärke auf den erlaubten Bereich.
pub fn clamp_thickness(thickness: f32) -> f32 {
    thickness.clamp(THICKNESS_MIN, THICKNESS_MAX)
}

/// Eine Kurve mit geordneter, begrenzter Kontrollpunktfolge.
#[derive(Debug, Clone)]
pub struct Curve {
    kind: CurveKind,
    style: CurveStyle,
    points: Vec<ControlPoint>,
}

impl Curve {
    fn new(kind: CurveKind, style: CurveStyle) -> Self {
        Self {
            kind,
            style,
            points: Vec::with_capacity(MAX_CONTROL_POINTS),
        }
    }

    /// Rolle der Kurve.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Aktueller Darstellungsstil.
    pub fn style(&self) -> CurveStyle {
        self.style
    }

    /// Kontrollpunkte in Parametrisierungs-Reihenfolge.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Kurve keine Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gibt `true` zurück, wenn die Kapazitätsgrenze erreicht ist.
    pub fn is_full(&self) -> bool {
        self.points.len() >= MAX_CONTROL_POINTS
    }

    /// Nur die Positionen (für Auswertung/Sampling).
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }
}

/// Container für beide Kurven.
///
/// Die Polarkurve hat keine öffentlichen Punkt-Mutatoren: ihre Punkte
/// ändern sich ausschließlich über [`CurveSet::rederive_polar`].
#[derive(Debug, Clone)]
pub struct CurveSet {
    original: Curve,
    polar: Curve,
}

impl CurveSet {
    /// Erstellt beide Kurven mit den übergebenen Stilen und ohne Punkte.
    pub fn new(original_style: CurveStyle, polar_style: CurveStyle) -> Self {
        Self {
            original: Curve::new(CurveKind::Original, original_style),
            polar: Curve::new(CurveKind::Polar, polar_style),
        }
    }

    /// Originalkurve (lesend).
    pub fn original(&self) -> &Curve {
        &self.original
    }

    /// Polarkurve (lesend).
    pub fn polar(&self) -> &Curve {
        &self.polar
    }

    /// Kurve nach Rolle.
    pub fn curve(&self, kind: CurveKind) -> &Curve {
        match kind {
            CurveKind::Original => &self.original,
            CurveKind::Polar => &self.polar,
        }
    }

    /// Hängt einen Punkt an die Originalkurve an.
    ///
    /// Gibt `false` zurück (ohne Änderung), wenn die Kapazität erreicht ist.
    pub fn push_original_point(&mut self, point: ControlPoint) -> bool {
        if self.original.is_full() {
            return false;
        }
        self.original.points.push(ControlPoint::new(
            clamp_position(point.position),
            clamp_color(point.color),
        ));
        true
    }

    /// Entfernt mehrere Punkte der Originalkurve in einem Schritt.
    ///
    /// Die Indizes beziehen sich auf die Reihenfolge vor dem Entfernen;
    /// Reihenfolge und Duplikate der Indexliste spielen keine Rolle,
    /// ungültige Indizes werden ignoriert. Gibt die Anzahl entfernter Punkte zurück.
    pub fn remove_original_points(&mut self, indices: &[usize]) -> usize {
        let to_remove: HashSet<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.original.points.len())
            .collect();
        if to_remove.is_empty() {
            return 0;
        }

        let mut index = 0;
        self.original.points.retain(|_| {
            let keep = !to_remove.contains(&index);
            index += 1;
            keep
        });
        to_remove.len()
    }

    /// Setzt die Position eines Originalpunkts (geklemmt auf [-1, 1]).
    ///
    /// Gibt `false` zurück bei ungültigem Index oder unveränderter Position.
    pub fn set_original_position(&mut self, index: usize, position: Vec2) -> bool {
        let Some(point) = self.original.points.get_mut(index) else {
            return false;
        };
        let clamped = clamp_position(position);
        if point.position == clamped {
            return false;
        }
        point.position = clamped;
        true
    }

    /// Setzt die Farbe eines Originalpunkts.
    ///
    /// Gibt `false` zurück bei ungültigem Index oder unveränderter Farbe.
    pub fn set_original_point_color(&mut self, index: usize, color: Vec3) -> bool {
        let Some(point) = self.original.points.get_mut(index) else {
            return false;
        };
        let clamped = clamp_color(color);
        if point.color == clamped {
            return false;
        }
        point.color = clamped;
        true
    }

    /// Setzt Farbe und Stärke einer Kurve (beide Rollen erlaubt).
    ///
    /// Gibt `false` zurück, wenn sich nichts geändert hat.
    pub fn set_style(&mut self, kind: CurveKind, style: CurveStyle) -> bool {
        let style = CurveStyle::new(style.color, style.thickness);
        let curve = match kind {
            CurveKind::Original => &mut self.original,
            CurveKind::Polar => &mut self.polar,
        };
        if curve.style == style {
            return false;
        }
        curve.style = style;
        true
    }

    /// Berechnet die Polarkurve vollständig neu (kein Patchen).
    pub fn rederive_polar(&mut self, t1: f32) {
        self.polar.points = derive_polar(&self.original.points, t1);
    }
}

impl Default for CurveSet {
    fn default() -> Self {
        Self::new(CurveStyle::default(), CurveStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(n: usize) -> CurveSet {
        let mut set = CurveSet::default();
        for i in 0..n {
            let x = i as f32 * 0.1;
            assert!(set.push_original_point(ControlPoint::at(Vec2::new(x, 0.0))));
        }
        set
    }

    #[test]
    fn curve_lookup_returns_curve_of_requested_kind() {
        let set = CurveSet::default();
        for kind in CurveKind::ALL {
            assert_eq!(set.curve(kind).kind(), kind);
        }
        assert_eq!(set.original().kind(), CurveKind::Original);
        assert_eq!(set.polar().kind(), CurveKind::Polar);
    }

    fn xs(set: &CurveSet) -> Vec<f32> {
        set.original().points().iter().map(|p| p.position.x).collect()
    }

    #[test]
    fn push_is_noop_at_capacity() {
        let mut set = labelled(MAX_CONTROL_POINTS);
        let before = set.original().points().to_vec();

        assert!(!set.push_original_point(ControlPoint::default()));

        assert_eq!(set.original().points(), before.as_slice());
    }

    #[test]
    fn push_clamps_position() {
        let mut set = CurveSet::default();
        set.push_original_point(ControlPoint::at(Vec2::new(5.0, -5.0)));
        assert_eq!(set.original().points()[0].position, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn remove_batch_is_order_independent() {
        let mut ascending = labelled(5);
        let mut descending = labelled(5);
        let mut shuffled = labelled(5);

        ascending.remove_original_points(&[1, 3]);
        descending.remove_original_points(&[3, 1]);
        shuffled.remove_original_points(&[3, 1, 3]);

        let expected = vec![0.0, 0.2, 0.4];
        for set in [&ascending, &descending, &shuffled] {
            let got = xs(set);
            assert_eq!(got.len(), 3);
            for (g, e) in got.iter().zip(&expected) {
                assert!((g - e).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn remove_ignores_out_of_range() {
        let mut set = labelled(3);
        assert_eq!(set.remove_original_points(&[7, 2]), 1);
        assert_eq!(set.original().len(), 2);
        assert_eq!(set.remove_original_points(&[9]), 0);
    }

    #[test]
    fn set_position_reports_change() {
        let mut set = labelled(2);
        assert!(set.set_original_position(1, Vec2::new(0.5, 0.5)));
        assert!(!set.set_original_position(1, Vec2::new(0.5, 0.5)));
        assert!(!set.set_original_position(4, Vec2::ZERO));
    }

    #[test]
    fn rederive_polar_replaces_points() {
        let mut set = labelled(4);
        set.rederive_polar(0.5);
        assert_eq!(set.polar().len(), 3);

        set.remove_original_points(&[0, 1, 2]);
        set.rederive_polar(0.5);
        assert!(set.polar().is_empty());
    }

    #[test]
    fn set_style_clamps_thickness() {
        let mut set = CurveSet::default();
        assert!(set.set_style(CurveKind::Polar, CurveStyle::new(Vec3::X, 2.0)));
        assert!(set.set_style(
            CurveKind::Polar,
            CurveStyle {
                color: Vec3::X,
                thickness: 10.0
            }
        ));
        assert_eq!(set.polar().style().thickness, THICKNESS_MAX);
    }

    #[test]
    fn curve_kind_indices_are_distinct() {
        assert_eq!(CurveKind::Original.index(), 0);
        assert_eq!(CurveKind::Polar.index(), 1);
    }
}
