//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{ControlPoint, CurveStyle, ViewportSize};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize {
            size: ViewportSize::from_panel(size),
        }],
        AppIntent::CursorMoved { curve_pos } => {
            vec![AppCommand::SetCursorPosition { curve_pos }]
        }

        AppIntent::AddControlPointRequested => vec![AppCommand::AppendControlPoint {
            point: ControlPoint::default(),
        }],
        AppIntent::RemoveControlPointsRequested { indices } => {
            if indices.is_empty() {
                Vec::new()
            } else {
                vec![AppCommand::RemoveControlPoints { indices }]
            }
        }
        AppIntent::RemoveLastControlPointRequested => {
            match state.original_point_count().checked_sub(1) {
                Some(last) => vec![AppCommand::RemoveControlPoints {
                    indices: vec![last],
                }],
                None => Vec::new(),
            }
        }
        AppIntent::ControlPointPositionChanged { index, position } => {
            vec![AppCommand::SetControlPointPosition { index, position }]
        }
        AppIntent::ControlPointColorChanged { index, color } => {
            vec![AppCommand::SetControlPointColor { index, color }]
        }

        AppIntent::CurveStyleChanged {
            kind,
            color,
            thickness,
        } => vec![AppCommand::SetCurveStyle {
            kind,
            style: CurveStyle { color, thickness },
        }],

        AppIntent::DrawOriginalToggled { enabled } => {
            vec![AppCommand::SetDrawOriginal { enabled }]
        }
        AppIntent::DrawPolarToggled { enabled } => vec![AppCommand::SetDrawPolar { enabled }],
        AppIntent::SampleCountChanged { count } => vec![AppCommand::SetSampleCount { count }],
        AppIntent::T1Changed { t1 } => vec![AppCommand::SetT1 { t1 }],
    }
}
