//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Intents und Commands auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
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
            // === Editing ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::AddPointAt { position, velocity } => {
                handlers::editing::add_point(state, position, velocity)?
            }
            AppCommand::DeletePointNear {
                position,
                tolerance,
            } => handlers::editing::delete_point(state, position, tolerance),
            AppCommand::ClearPoints => handlers::editing::clear_points(state),

            // === Wiedergabe ===
            AppCommand::SetPaused { paused } => handlers::playback::set_paused(state, paused),
            AppCommand::AdjustSpeed { delta } => handlers::playback::adjust_speed(state, delta),
            AppCommand::SetSegmentCount { count } => {
                handlers::playback::set_segment_count(state, count)?
            }
            AppCommand::StepFrame => handlers::playback::step_frame(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
