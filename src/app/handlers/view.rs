//! Handler für Viewport, Cursor und Anwendungs-Lebenszyklus.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ViewportSize;
use glam::Vec2;

/// Fordert das kontrollierte Beenden der Anwendung an.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: ViewportSize) {
    use_cases::viewport::resize(state, size);
}

/// Aktualisiert die Cursorposition für die Statusleiste.
pub fn set_cursor_position(state: &mut AppState, curve_pos: Option<Vec2>) {
    use_cases::viewport::set_cursor_position(state, curve_pos);
}
