//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;
use crate::core::ViewportSize;
use glam::Vec2;

/// Aktualisiert die gespeicherte Viewport-Größe.
///
/// Nur eine echte Größenänderung markiert die Zeichenfläche als veraltet.
pub fn resize(state: &mut AppState, size: ViewportSize) {
    if state.view.viewport_size == size {
        return;
    }
    log::debug!(
        "Viewport {}x{} -> {}x{}",
        state.view.viewport_size.width,
        state.view.viewport_size.height,
        size.width,
        size.height
    );
    state.view.viewport_size = size;
    state.dirty.mark_viewport();
}

/// Aktualisiert die Cursorposition im Kurvenraum.
pub fn set_cursor_position(state: &mut AppState, curve_pos: Option<Vec2>) {
    state.view.cursor_curve_pos = curve_pos.filter(|p| p.is_finite());
}
