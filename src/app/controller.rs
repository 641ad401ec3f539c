//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Anwendung & Viewport ===
            AppCommand::RequestExit => handlers::view::request_exit(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::SetCursorPosition { curve_pos } => {
                handlers::view::set_cursor_position(state, curve_pos)
            }

            // === Kontrollpunkte ===
            AppCommand::AppendControlPoint { point } => handlers::curve::append_point(state, point),
            AppCommand::RemoveControlPoints { indices } => {
                handlers::curve::remove_points(state, &indices)
            }
            AppCommand::SetControlPointPosition { index, position } => {
                handlers::curve::set_point_position(state, index, position)
            }
            AppCommand::SetControlPointColor { index, color } => {
                handlers::curve::set_point_color(state, index, color)
            }
            AppCommand::SetCurveStyle { kind, style } => {
                handlers::curve::set_curve_style(state, kind, style)
            }

            // === Einstellungen ===
            AppCommand::SetDrawOriginal { enabled } => {
                handlers::settings::set_draw_original(state, enabled)
            }
            AppCommand::SetDrawPolar { enabled } => handlers::settings::set_draw_polar(state, enabled),
            AppCommand::SetSampleCount { count } => {
                handlers::settings::set_sample_count(state, count)
            }
            AppCommand::SetT1 { t1 } => handlers::settings::set_t1(state, t1),
        }

        Ok(())
    }
}
