//! Properties-Panel (rechte Seitenleiste) für Einstellungen, Kurvenstile und Kontrollpunkte.

use super::widgets::{color_edit, vec2_control};
use crate::app::{AppIntent, AppState};
use crate::core::curve::{THICKNESS_MAX, THICKNESS_MIN};
use crate::core::settings::{SAMPLE_COUNT_MAX, SAMPLE_COUNT_MIN};
use crate::core::{Curve, CurveKind, GlobalSettings, MAX_CONTROL_POINTS};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
///
/// Arbeitet auf Kopien der Werte; Änderungen gelangen nur als Intents in den State.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(state.options.properties_panel_width)
        .min_width(240.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Eigenschaften");
                ui.separator();

                render_settings(ui, &state.settings, &mut events);
                for kind in CurveKind::ALL {
                    render_curve_style(ui, state.curves.curve(kind), &mut events);
                }
                render_control_points(ui, state.curves.original(), &mut events);
            });
        });

    events
}

fn render_settings(ui: &mut egui::Ui, settings: &GlobalSettings, events: &mut Vec<AppIntent>) {
    egui::CollapsingHeader::new("Einstellungen")
        .default_open(true)
        .show(ui, |ui| {
            let mut draw_original = settings.draw_original;
            if ui.checkbox(&mut draw_original, "Bezier-Kurve zeichnen").changed() {
                events.push(AppIntent::DrawOriginalToggled {
                    enabled: draw_original,
                });
            }

            let mut draw_polar = settings.draw_polar;
            if ui.checkbox(&mut draw_polar, "Polarkurve zeichnen").changed() {
                events.push(AppIntent::DrawPolarToggled {
                    enabled: draw_polar,
                });
            }

            ui.horizontal(|ui| {
                ui.label("Samples:");
                let mut count = settings.sample_count;
                if ui
                    .add(
                        egui::DragValue::new(&mut count)
                            .range(SAMPLE_COUNT_MIN..=SAMPLE_COUNT_MAX)
                            .speed(1),
                    )
                    .changed()
                {
                    events.push(AppIntent::SampleCountChanged { count });
                }
            });

            ui.horizontal(|ui| {
                ui.label("t1:");
                let mut t1 = settings.t1;
                if ui
                    .add(egui::DragValue::new(&mut t1).range(0.0..=1.0).speed(0.01))
                    .changed()
                {
                    events.push(AppIntent::T1Changed { t1 });
                }
            });
        });
}

fn render_curve_style(ui: &mut egui::Ui, curve: &Curve, events: &mut Vec<AppIntent>) {
    let kind = curve.kind();
    let style = curve.style();
    egui::CollapsingHeader::new(kind.label())
        .default_open(true)
        .show(ui, |ui| {
            let mut color = style.color;
            let mut thickness = style.thickness;

            let mut changed = color_edit(ui, "Farbe:", &mut color);
            ui.horizontal(|ui| {
                ui.label("Stärke:");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut thickness)
                            .range(THICKNESS_MIN..=THICKNESS_MAX)
                            .speed(0.1),
                    )
                    .changed();
            });

            if changed {
                events.push(AppIntent::CurveStyleChanged {
                    kind,
                    color,
                    thickness,
                });
            }
        });
}

fn render_control_points(ui: &mut egui::Ui, original: &Curve, events: &mut Vec<AppIntent>) {
    egui::CollapsingHeader::new("Kontrollpunkte")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!original.is_full(), egui::Button::new("Add"))
                    .clicked()
                {
                    events.push(AppIntent::AddControlPointRequested);
                }
                ui.label(format!("{}/{}", original.len(), MAX_CONTROL_POINTS));
            });

            // Entfernen erst nach der Schleife als ein Batch
            let mut to_remove = Vec::new();
            for (index, point) in original.points().iter().enumerate() {
                ui.separator();
                ui.push_id(index, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(format!("Punkt {}", index));
                        if ui.small_button("✕").clicked() {
                            to_remove.push(index);
                        }
                    });

                    let mut position = point.position;
                    if vec2_control(ui, "Position", &mut position) {
                        events.push(AppIntent::ControlPointPositionChanged { index, position });
                    }

                    let mut color = point.color;
                    if color_edit(ui, "Farbe:", &mut color) {
                        events.push(AppIntent::ControlPointColorChanged { index, color });
                    }
                });
            }

            if !to_remove.is_empty() {
                events.push(AppIntent::RemoveControlPointsRequested { indices: to_remove });
            }
        });
}
