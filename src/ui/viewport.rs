//! Zentrales Viewport-Panel: zeigt die Compute-Zeichenfläche und meldet Größe und Cursor.

use super::input;
use crate::app::{AppIntent, AppState};
use crate::core::{ViewportMapping, ViewportSize};
use glam::Vec2;

/// Rendert den Viewport und gibt erzeugte Events zurück.
///
/// `texture` ist die bei egui registrierte Zeichenfläche (None vor dem ersten Sync).
/// Größen werden in physischen Pixeln gemeldet, damit die Zeichenfläche 1:1 abgebildet wird.
pub fn render_viewport(
    ctx: &egui::Context,
    state: &AppState,
    texture: Option<egui::TextureId>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let available = ui.available_size();
            let pixels_per_point = ctx.pixels_per_point();
            let pixel_size = [
                available.x * pixels_per_point,
                available.y * pixels_per_point,
            ];

            if ViewportSize::from_panel(pixel_size) != state.view.viewport_size {
                events.push(AppIntent::ViewportResized { size: pixel_size });
            }

            let response = match texture {
                Some(id) => ui.add(
                    egui::Image::new(egui::load::SizedTexture::new(id, available))
                        .sense(egui::Sense::hover()),
                ),
                None => ui.allocate_response(available, egui::Sense::hover()),
            };

            let mapping = ViewportMapping::new(ViewportSize::from_panel(pixel_size));
            let cursor = response.hover_pos().map(|pos| {
                let local = (pos - response.rect.min) * pixels_per_point;
                mapping.pixel_to_curve(Vec2::new(local.x, local.y))
            });
            if cursor != state.view.cursor_curve_pos {
                events.push(AppIntent::CursorMoved { curve_pos: cursor });
            }

            if response.hovered() {
                events.extend(input::collect_keyboard_intents(ui));
            }
        });

    events
}
