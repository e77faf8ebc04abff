//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::EditorTool;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::options::{SPEED_DECREASE_FLOOR, SPEED_INCREASE_CEILING, SPEED_STEP};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasClicked { position } => match state.tool {
            EditorTool::Place => vec![AppCommand::AddPointAt {
                position,
                velocity: None,
            }],
            EditorTool::Erase => vec![AppCommand::DeletePointNear {
                position,
                tolerance: state.options.delete_tolerance,
            }],
        },
        AppIntent::AddPointRequested { position, velocity } => {
            vec![AppCommand::AddPointAt { position, velocity }]
        }
        AppIntent::DeletePointRequested { position } => vec![AppCommand::DeletePointNear {
            position,
            tolerance: state.options.delete_tolerance,
        }],
        AppIntent::ClearRequested => vec![AppCommand::ClearPoints],
        AppIntent::PauseToggled => vec![AppCommand::SetPaused {
            paused: !state.paused,
        }],
        AppIntent::SpeedIncreaseRequested => {
            if state.point_set.speed_multiplier <= SPEED_INCREASE_CEILING {
                vec![AppCommand::AdjustSpeed { delta: SPEED_STEP }]
            } else {
                vec![]
            }
        }
        AppIntent::SpeedDecreaseRequested => {
            if state.point_set.speed_multiplier >= SPEED_DECREASE_FLOOR {
                vec![AppCommand::AdjustSpeed { delta: -SPEED_STEP }]
            } else {
                vec![]
            }
        }
        AppIntent::SegmentCountIncreaseRequested => vec![AppCommand::SetSegmentCount {
            count: state.point_set.segment_count() + 1,
        }],
        AppIntent::SegmentCountDecreaseRequested => {
            let current = state.point_set.segment_count();
            if current > 1 {
                vec![AppCommand::SetSegmentCount { count: current - 1 }]
            } else {
                vec![]
            }
        }
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::FrameAdvanced => {
            if state.paused {
                vec![]
            } else {
                vec![AppCommand::StepFrame]
            }
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
