//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::{bezier, MAX_CONTROL_POINTS};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Punkte: {}/{} | Polar: {}",
                state.original_point_count(),
                MAX_CONTROL_POINTS,
                state.polar_point_count()
            ));

            ui.separator();

            let size = state.view.viewport_size;
            ui.label(format!("Viewport: {}x{}", size.width, size.height));

            ui.separator();

            match state.view.cursor_curve_pos {
                Some(pos) => ui.label(format!("Cursor: ({:.2}, {:.2})", pos.x, pos.y)),
                None => ui.label("Cursor: -"),
            };

            ui.separator();

            let samples = bezier::sample(
                &state.curves.original().positions(),
                state.settings.sample_count,
            );
            ui.label(format!("Länge: {:.3}", bezier::polyline_length(&samples)));
        });
    });
}
