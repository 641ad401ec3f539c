//! Shader-Konstanten als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Layout entspricht `struct RasterConstants` in `curve_raster.wgsl`
//! (WGSL-Uniform-Regeln: vec3 auf 16 Byte ausgerichtet, Gesamtgröße Vielfaches von 16).

use crate::core::{CurveSet, GlobalSettings};
use bytemuck::{Pod, Zeroable};

/// Snapshot aller Kurven-/Einstellungswerte, die der Shader liest.
///
/// Wird immer vollständig neu gebaut, nie feldweise gepatcht.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RasterConstants {
    /// Farbe der Originalkurve (RGB)
    pub original_color: [f32; 3],
    /// Linienstärke der Originalkurve in Pixeln
    pub original_thickness: f32,
    /// Farbe der Polarkurve (RGB)
    pub polar_color: [f32; 3],
    /// Linienstärke der Polarkurve in Pixeln
    pub polar_thickness: f32,
    /// Anzahl der Originalpunkte (autoritativ für beide Buffer)
    pub point_count: u32,
    /// Samples pro Kurve
    pub sample_count: u32,
    /// Polar-Parameter t1
    pub t1: f32,
    /// Originalkurve zeichnen (0/1)
    pub draw_original: u32,
    /// Polarkurve zeichnen (0/1)
    pub draw_polar: u32,
    _padding: [u32; 3],
}

impl RasterConstants {
    /// Baut den Snapshot aus dem aktuellen Kurvenmodell und den Einstellungen.
    pub fn build(curves: &CurveSet, settings: &GlobalSettings) -> Self {
        let original = curves.original().style();
        let polar = curves.polar().style();

        Self {
            original_color: original.color.to_array(),
            original_thickness: original.thickness,
            polar_color: polar.color.to_array(),
            polar_thickness: polar.thickness,
            point_count: curves.original().len() as u32,
            sample_count: settings.sample_count,
            t1: settings.t1,
            draw_original: u32::from(settings.draw_original),
            draw_polar: u32::from(settings.draw_polar),
            _padding: [0; 3],
        }
    }

    /// Anzahl der Polarpunkte, wie sie der Shader ableitet.
    pub fn polar_point_count(&self) -> u32 {
        self.point_count.saturating_sub(1)
    }
}
