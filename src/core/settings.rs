//! Globale Darstellungs-Einstellungen.

/// Minimale Anzahl an Samples pro Kurve.
pub const SAMPLE_COUNT_MIN: u32 = 25;
/// Maximale Anzahl an Samples pro Kurve.
pub const SAMPLE_COUNT_MAX: u32 = 100;
/// Standard-Sampleanzahl.
pub const SAMPLE_COUNT_DEFAULT: u32 = 50;
/// Standard-Wert des Polar-Parameters t1.
pub const T1_DEFAULT: f32 = 0.5;

/// Prozessweite Einstellungen, einmal pro Frame in Shader-Konstanten übersetzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalSettings {
    /// Originalkurve zeichnen
    pub draw_original: bool,
    /// Polarkurve zeichnen
    pub draw_polar: bool,
    /// Samples pro Kurve ([25, 100])
    pub sample_count: u32,
    /// Polar-Parameter t1 ([0, 1])
    pub t1: f32,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            draw_original: true,
            draw_polar: true,
            sample_count: SAMPLE_COUNT_DEFAULT,
            t1: T1_DEFAULT,
        }
    }
}

/// Begrenzt eine Sampleanzahl auf [25, 100].
pub fn clamp_sample_count(count: u32) -> u32 {
    count.clamp(SAMPLE_COUNT_MIN, SAMPLE_COUNT_MAX)
}

/// Begrenzt t1 auf [0, 1].
pub fn clamp_t1(t1: f32) -> f32 {
    t1.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_draw_both_curves() {
        let s = GlobalSettings::default();
        assert!(s.draw_original && s.draw_polar);
        assert_eq!(s.sample_count, 50);
        assert_eq!(s.t1, 0.5);
    }

    #[test]
    fn clamping_bounds() {
        assert_eq!(clamp_sample_count(3), 25);
        assert_eq!(clamp_sample_count(400), 100);
        assert_eq!(clamp_sample_count(60), 60);
        assert_eq!(clamp_t1(-0.2), 0.0);
        assert_eq!(clamp_t1(1.7), 1.0);
    }
}
