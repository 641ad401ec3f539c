//! Zentrale Konfiguration für den Bezier-Polar-Editor.
//!
//! `EditorOptions` enthält alle beim Start gelesenen Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::CurveStyle;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fenstergröße in logischen Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 720.0];
/// Breite des Eigenschaften-Panels.
pub const PROPERTIES_PANEL_WIDTH: f32 = 320.0;

// ── Ressourcen ─────────────────────────────────────────────────────

/// Pfad zum Compute-Shader (relativ zum Arbeitsverzeichnis oder zur Binary).
pub const SHADER_PATH: &str = "assets/shaders/curve_raster.wgsl";
/// Pfad zur UI-Schriftart.
pub const FONT_PATH: &str = "assets/fonts/OpenSans-Regular.ttf";
/// Schriftgröße der UI in Punkten.
pub const FONT_SIZE: f32 = 18.0;

// ── Kurven ─────────────────────────────────────────────────────────

/// Standard-Farbe der Originalkurve (RGB: Weiß).
pub const ORIGINAL_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
/// Standard-Farbe der Polarkurve (RGB: Weiß).
pub const POLAR_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
/// Standard-Linienstärke beider Kurven.
pub const CURVE_THICKNESS: f32 = 1.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start lesbaren Editor-Optionen.
/// Wird als `bezier_polar_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Fenster ─────────────────────────────────────────────────
    /// Initiale Fenstergröße [Breite, Höhe]
    pub window_size: [f32; 2],
    /// Präsentation mit vertikaler Synchronisation
    pub vsync: bool,
    /// Breite des Eigenschaften-Panels
    pub properties_panel_width: f32,

    // ── Ressourcen ──────────────────────────────────────────────
    /// Pfad zum WGSL-Compute-Shader
    pub shader_path: PathBuf,
    /// Pfad zur TTF-Schriftart
    pub font_path: PathBuf,
    /// Schriftgröße in Punkten
    pub font_size: f32,

    // ── Kurven ──────────────────────────────────────────────────
    /// Startfarbe der Originalkurve
    pub original_color: [f32; 3],
    /// Startstärke der Originalkurve
    pub original_thickness: f32,
    /// Startfarbe der Polarkurve
    pub polar_color: [f32; 3],
    /// Startstärke der Polarkurve
    pub polar_thickness: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            vsync: true,
            properties_panel_width: PROPERTIES_PANEL_WIDTH,

            shader_path: PathBuf::from(SHADER_PATH),
            font_path: PathBuf::from(FONT_PATH),
            font_size: FONT_SIZE,

            original_color: ORIGINAL_COLOR,
            original_thickness: CURVE_THICKNESS,
            polar_color: POLAR_COLOR,
            polar_thickness: CURVE_THICKNESS,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        executable_dir().join("bezier_polar_editor.toml")
    }

    /// Löst einen Ressourcenpfad auf.
    ///
    /// Absolute Pfade bleiben unverändert; relative Pfade werden zuerst im
    /// Arbeitsverzeichnis, dann neben der Binary gesucht. Existiert keiner,
    /// wird der Pfad unverändert zurückgegeben (Fehler meldet der Aufrufer).
    pub fn resolve_asset(path: &Path) -> PathBuf {
        if path.is_absolute() || path.exists() {
            return path.to_path_buf();
        }
        let beside_exe = executable_dir().join(path);
        if beside_exe.exists() {
            beside_exe
        } else {
            path.to_path_buf()
        }
    }

    /// Startstil der Originalkurve.
    pub fn original_style(&self) -> CurveStyle {
        CurveStyle::new(Vec3::from_array(self.original_color), self.original_thickness)
    }

    /// Startstil der Polarkurve.
    pub fn polar_style(&self) -> CurveStyle {
        CurveStyle::new(Vec3::from_array(self.polar_color), self.polar_thickness)
    }
}

fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let opts: EditorOptions = toml::from_str("vsync = false\nfont_size = 14.0\n").unwrap();
        assert!(!opts.vsync);
        assert_eq!(opts.font_size, 14.0);
        assert_eq!(opts.shader_path, PathBuf::from(SHADER_PATH));
        assert_eq!(opts.window_size, WINDOW_SIZE);
    }

    #[test]
    fn toml_roundtrip_preserves_values() {
        let mut opts = EditorOptions::default();
        opts.original_color = [0.2, 0.4, 0.6];
        opts.polar_thickness = 2.5;

        let text = toml::to_string_pretty(&opts).unwrap();
        let back: EditorOptions = toml::from_str(&text).unwrap();

        assert_eq!(back, opts);
    }

    #[test]
    fn load_missing_file_returns_defaults() {
        let opts = EditorOptions::load_from_file(Path::new("does/not/exist.toml"));
        assert_eq!(opts, EditorOptions::default());
    }

    #[test]
    fn styles_are_clamped() {
        let mut opts = EditorOptions::default();
        opts.original_thickness = 9.0;
        opts.polar_color = [2.0, -1.0, 0.5];

        assert_eq!(opts.original_style().thickness, 3.0);
        assert_eq!(opts.polar_style().color, Vec3::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn resolve_asset_keeps_absolute_paths() {
        let abs = std::env::temp_dir().join("no_such_shader.wgsl");
        assert_eq!(EditorOptions::resolve_asset(&abs), abs);
    }
}
