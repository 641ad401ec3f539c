//! Application State: zentrale Datenhaltung.
//!
//! Ersetzt prozessweite Globals: der State wird explizit besessen und per
//! Referenz in Update- und Render-Schritte gereicht.

use crate::core::{CurveSet, GlobalSettings, ViewportSize};
use crate::shared::{DirtyState, EditorOptions};
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Zuletzt beobachtete Panelgröße des Viewports in Pixeln
    pub viewport_size: ViewportSize,
    /// Cursorposition im Kurvenraum (None = Cursor außerhalb des Viewports)
    pub cursor_curve_pos: Option<Vec2>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (1×1 Viewport, kein Cursor).
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Original- und Polarkurve
    pub curves: CurveSet,
    /// Globale Darstellungs-Einstellungen
    pub settings: GlobalSettings,
    /// Veraltete GPU-Ressourcen (nur über Use-Cases setzen)
    pub dirty: DirtyState,
    /// Viewport und Cursor
    pub view: ViewState,
    /// Beim Start geladene Optionen
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State, dessen Kurvenstile aus den Optionen stammen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            curves: CurveSet::new(options.original_style(), options.polar_style()),
            settings: GlobalSettings::default(),
            dirty: DirtyState::new(),
            view: ViewState::new(),
            options,
            should_exit: false,
        }
    }

    /// Anzahl der Originalpunkte (für UI-Anzeige)
    pub fn original_point_count(&self) -> usize {
        self.curves.original().len()
    }

    /// Anzahl der Polarpunkte (für UI-Anzeige)
    pub fn polar_point_count(&self) -> usize {
        self.curves.polar().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CurveKind;

    #[test]
    fn new_state_is_clean_and_empty() {
        let state = AppState::new();
        assert!(!state.dirty.any());
        assert_eq!(state.original_point_count(), 0);
        assert_eq!(state.polar_point_count(), 0);
        assert_eq!(state.view.viewport_size, ViewportSize::new(1, 1));
    }

    #[test]
    fn with_options_applies_curve_styles() {
        let mut options = EditorOptions::default();
        options.polar_thickness = 2.0;
        options.original_color = [0.0, 1.0, 0.0];

        let state = AppState::with_options(options);

        assert_eq!(state.curves.curve(CurveKind::Polar).style().thickness, 2.0);
        assert_eq!(
            state.curves.original().style().color,
            glam::Vec3::new(0.0, 1.0, 0.0)
        );
    }
}
