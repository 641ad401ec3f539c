//! Viewport-Größe und Abbildung zwischen Pixel- und Kurvenraum.

use glam::Vec2;

/// Pixelgröße der Viewport-Surface.
///
/// Beide Dimensionen sind mindestens 1, da GPU-Texturen nicht leer sein dürfen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewportSize {
    /// Breite in Pixeln
    pub width: u32,
    /// Höhe in Pixeln
    pub height: u32,
}

impl ViewportSize {
    /// Erstellt eine Größe, mindestens 1×1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Übernimmt die (fließkommabasierte) Panelgröße der UI.
    ///
    /// Nicht-endliche oder negative Werte ergeben 1 Pixel.
    pub fn from_panel(size: [f32; 2]) -> Self {
        let to_px = |v: f32| {
            if v.is_finite() && v > 1.0 {
                v.round() as u32
            } else {
                1
            }
        };
        Self::new(to_px(size[0]), to_px(size[1]))
    }

    /// Größe als `[f32; 2]` (für egui).
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Abbildung zwischen Pixeln und dem normalisierten Kurvenraum.
///
/// Der Kurvenraum [-1, 1]² liegt zentriert im Viewport, Y zeigt nach oben,
/// skaliert mit der kleineren Viewport-Dimension. Der Compute-Shader nutzt
/// dieselbe Abbildung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMapping {
    center: Vec2,
    pixels_per_unit: f32,
}

impl ViewportMapping {
    /// Erstellt die Abbildung für eine Viewport-Größe.
    pub fn new(size: ViewportSize) -> Self {
        let size_px = size.as_vec2();
        Self {
            center: size_px * 0.5,
            pixels_per_unit: size_px.min_element() * 0.5,
        }
    }

    /// Pixel pro Kurvenraum-Einheit.
    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    /// Pixelposition (Ursprung oben links) → Kurvenraum.
    pub fn pixel_to_curve(&self, pixel: Vec2) -> Vec2 {
        let d = (pixel - self.center) / self.pixels_per_unit;
        Vec2::new(d.x, -d.y)
    }

    /// Kurvenraum → Pixelposition (Ursprung oben links).
    pub fn curve_to_pixel(&self, curve: Vec2) -> Vec2 {
        self.center + Vec2::new(curve.x, -curve.y) * self.pixels_per_unit
    }
}
