//! Kontrollpunkt einer Kurve (Position + Farbe).

use glam::{Vec2, Vec3};

/// Untere Grenze des normalisierten Editierbereichs (pro Achse).
pub const POSITION_MIN: f32 = -1.0;
/// Obere Grenze des normalisierten Editierbereichs (pro Achse).
pub const POSITION_MAX: f32 = 1.0;

/// Standard-Farbe neu angelegter Kontrollpunkte (RGB: Rot).
pub const CONTROL_POINT_COLOR_DEFAULT: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Ein vom Benutzer platzierter Kontrollpunkt.
///
/// Die Reihenfolge innerhalb der Kurve bestimmt die Parametrisierung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position im normalisierten Kurvenraum ([-1, 1] pro Achse)
    pub position: Vec2,
    /// RGB-Farbe (0..1 pro Kanal)
    pub color: Vec3,
}

impl ControlPoint {
    /// Erstellt einen Kontrollpunkt mit Position und Farbe.
    pub fn new(position: Vec2, color: Vec3) -> Self {
        Self { position, color }
    }

    /// Erstellt einen Kontrollpunkt in Standardfarbe.
    pub fn at(position: Vec2) -> Self {
        Self::new(position, CONTROL_POINT_COLOR_DEFAULT)
    }
}

impl Default for ControlPoint {
    fn default() -> Self {
        Self::at(Vec2::ZERO)
    }
}

/// Begrenzt eine Position auf den normalisierten Editierbereich.
pub fn clamp_position(position: Vec2) -> Vec2 {
    position.clamp(Vec2::splat(POSITION_MIN), Vec2::splat(POSITION_MAX))
}

/// Begrenzt eine Farbe auf 0..1 pro Kanal.
pub fn clamp_color(color: Vec3) -> Vec3 {
    color.clamp(Vec3::ZERO, Vec3::ONE)
}
