//! Wiederverwendbare Eingabe-Widgets für das Properties-Panel.

use glam::{Vec2, Vec3};

const AXIS_X_COLOR: egui::Color32 = egui::Color32::from_rgb(204, 26, 38);
const AXIS_Y_COLOR: egui::Color32 = egui::Color32::from_rgb(51, 178, 51);

/// Zwei DragValues für X/Y mit Reset-Knöpfen (Klick auf "X"/"Y" setzt die Achse auf 0).
///
/// Gibt `true` zurück, wenn der Wert geändert wurde.
pub fn vec2_control(ui: &mut egui::Ui, label: &str, value: &mut Vec2) -> bool {
    let mut edited = false;
    ui.horizontal(|ui| {
        ui.label(label);
        edited |= axis_control(ui, "X", AXIS_X_COLOR, &mut value.x);
        edited |= axis_control(ui, "Y", AXIS_Y_COLOR, &mut value.y);
    });
    edited
}

fn axis_control(ui: &mut egui::Ui, axis: &str, fill: egui::Color32, value: &mut f32) -> bool {
    let mut edited = false;
    let reset = egui::Button::new(egui::RichText::new(axis).strong().color(egui::Color32::WHITE))
        .fill(fill);
    if ui.add(reset).clicked() {
        *value = 0.0;
        edited = true;
    }
    edited |= ui
        .add(
            egui::DragValue::new(value)
                .range(-1.0..=1.0)
                .speed(0.01)
                .fixed_decimals(2),
        )
        .changed();
    edited
}

/// Beschriftete RGB-Farbauswahl.
pub fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut Vec3) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut rgb = color.to_array();
        if ui.color_edit_button_rgb(&mut rgb).changed() {
            *color = Vec3::from_array(rgb);
            changed = true;
        }
    });
    changed
}
