//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::core::BlockCatalog;
use crate::runtime::ArRuntime;
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Handler auf den AppState.
///
/// Runtime und Katalog sind externe Kollaborateure und werden pro Aufruf
/// durchgereicht; der Controller selbst besitzt keinen Zustand.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        runtime: &mut dyn ArRuntime,
        catalog: &dyn BlockCatalog,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, runtime, catalog, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        runtime: &mut dyn ArRuntime,
        catalog: &dyn BlockCatalog,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Session-Lifecycle ===
            AppCommand::StartSession => handlers::session::start(state, runtime, catalog),
            AppCommand::EndSession => handlers::session::end(state, runtime),
            AppCommand::AdvanceSession => handlers::session::advance(state, runtime),
            AppCommand::SampleHitTest { position } => {
                handlers::session::sample_hit_test(state, position)
            }

            // === Szene ===
            AppCommand::PlaceBlock {
                definition_id,
                position,
            } => handlers::scene::place_block(state, &definition_id, position),
            AppCommand::SelectPlaced { id } => handlers::scene::select(state, id),
            AppCommand::DeletePlaced { id } => handlers::scene::delete(state, id),
            AppCommand::ClearPlaced => handlers::scene::clear_all(state),
            AppCommand::SetMode { mode } => handlers::scene::set_mode(state, mode),
            AppCommand::SetActiveDefinition { id } => {
                handlers::scene::set_active_definition(state, id)
            }

            // === Gesten ===
            AppCommand::ScaleSelected { id, ratio } => {
                handlers::gesture::scale_block(state, id, ratio)
            }
            AppCommand::RotateSelected { id, delta } => {
                handlers::gesture::rotate_block(state, id, delta)
            }
            AppCommand::SetGestureBaseline { touches } => {
                handlers::gesture::set_baseline(state, touches)
            }
            AppCommand::ClearGestureBaseline => handlers::gesture::clear_baseline(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, catalog: &dyn BlockCatalog) -> RenderScene {
        render_scene::build(state, catalog)
    }
}
