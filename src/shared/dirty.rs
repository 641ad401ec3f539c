//! Dirty-Tracking für GPU-sichtbare Ressourcen.
//!
//! Gesetzt wird ausschließlich von der App-Schicht (Use-Cases), gelöscht
//! ausschließlich vom Renderer direkt nach der jeweiligen Synchronisation.

use crate::core::CurveKind;

/// Ein Flag pro GPU-Ressource: Konstanten, Punkt-Buffer je Kurve, Viewport-Surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtyState {
    constants: bool,
    curve_points: [bool; 2],
    viewport: bool,
}

impl DirtyState {
    /// Erstellt einen sauberen Zustand (nichts zu synchronisieren).
    pub fn new() -> Self {
        Self::default()
    }

    /// Markiert alle Ressourcen (erster Frame nach dem Start).
    pub fn mark_all(&mut self) {
        self.constants = true;
        self.curve_points = [true; 2];
        self.viewport = true;
    }

    /// Markiert den Konstanten-Buffer als veraltet.
    pub fn mark_constants(&mut self) {
        self.constants = true;
    }

    /// Markiert den Punkt-Buffer einer Kurve als veraltet.
    pub fn mark_curve_points(&mut self, kind: CurveKind) {
        self.curve_points[kind.index()] = true;
    }

    /// Markiert die Viewport-Surface (Größe geändert).
    pub fn mark_viewport(&mut self) {
        self.viewport = true;
    }

    /// Konstanten müssen neu geschrieben werden.
    pub fn constants(&self) -> bool {
        self.constants
    }

    /// Punkt-Buffer der Kurve muss neu geschrieben werden.
    pub fn curve_points(&self, kind: CurveKind) -> bool {
        self.curve_points[kind.index()]
    }

    /// Viewport-Surface muss neu angelegt werden.
    pub fn viewport(&self) -> bool {
        self.viewport
    }

    /// Gibt `true` zurück, wenn irgendeine Ressource veraltet ist.
    pub fn any(&self) -> bool {
        self.constants || self.viewport || self.curve_points.iter().any(|&d| d)
    }

    pub(crate) fn clear_constants(&mut self) {
        self.constants = false;
    }

    pub(crate) fn clear_curve_points(&mut self, kind: CurveKind) {
        self.curve_points[kind.index()] = false;
    }

    pub(crate) fn clear_viewport(&mut self) {
        self.viewport = false;
    }
}
