//! Tastatur-Shortcuts im Viewport → AppIntent.

use crate::app::AppIntent;

/// Sammelt Shortcut-Intents, solange kein Textfeld den Fokus hat.
///
/// `A`/`Einfg` hängt einen Punkt an, `Entf`/`Backspace` entfernt den letzten.
pub fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    if ui.ctx().wants_keyboard_input() {
        return Vec::new();
    }

    let (add_pressed, remove_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::A) || i.key_pressed(egui::Key::Insert),
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
        )
    });

    shortcut_intents(add_pressed, remove_pressed)
}

fn shortcut_intents(add_pressed: bool, remove_pressed: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if add_pressed {
        events.push(AppIntent::AddControlPointRequested);
    }
    if remove_pressed {
        events.push(AppIntent::RemoveLastControlPointRequested);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_no_intents() {
        assert!(shortcut_intents(false, false).is_empty());
    }

    #[test]
    fn add_comes_before_remove() {
        assert_eq!(
            shortcut_intents(true, true),
            vec![
                AppIntent::AddControlPointRequested,
                AppIntent::RemoveLastControlPointRequested
            ]
        );
    }
}
