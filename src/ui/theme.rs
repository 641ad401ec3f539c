//! Dunkles Theme und Schriftart aus den Optionen.

use crate::shared::EditorOptions;
use std::sync::Arc;

const FONT_NAME: &str = "editor_font";

/// Setzt dunkle Visuals, lädt die konfigurierte Schrift und deren Größe.
///
/// Fehlt die Schriftdatei, bleibt die egui-Standardschrift aktiv.
pub fn apply(ctx: &egui::Context, options: &EditorOptions) {
    ctx.set_theme(egui::Theme::Dark);

    let font_path = EditorOptions::resolve_asset(&options.font_path);
    match std::fs::read(&font_path) {
        Ok(bytes) => {
            let mut fonts = egui::FontDefinitions::default();
            fonts.font_data.insert(
                FONT_NAME.to_owned(),
                Arc::new(egui::FontData::from_owned(bytes)),
            );
            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .insert(0, FONT_NAME.to_owned());
            ctx.set_fonts(fonts);
            log::info!("Schrift geladen: {}", font_path.display());
        }
        Err(e) => {
            log::warn!(
                "Schrift {} nicht ladbar ({}), nutze Standardschrift",
                font_path.display(),
                e
            );
        }
    }

    let font_size = options.font_size;
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            if matches!(
                text_style,
                egui::TextStyle::Body | egui::TextStyle::Button | egui::TextStyle::Monospace
            ) {
                font_id.size = font_size;
            }
        }
    });
}
