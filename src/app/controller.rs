//! Host-Map-Controller für zentrale Event-Verarbeitung.

use super::{MapCommand, MapIntent, MapState};

/// Nimmt Reports aus Pointer-Controller und Übersicht entgegen und
/// aktualisiert die Envelope (schließt den Regelkreis).
#[derive(Debug, Default)]
pub struct MapController;

impl MapController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut MapState, intent: MapIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Verarbeitet mehrere Intents in Reihenfolge; bricht beim ersten Fehler ab.
    pub fn handle_intents(
        &mut self,
        state: &mut MapState,
        intents: impl IntoIterator<Item = MapIntent>,
    ) -> anyhow::Result<()> {
        for intent in intents {
            self.handle_intent(state, intent)?;
        }
        Ok(())
    }

    fn map_intent_to_commands(&self, state: &MapState, intent: MapIntent) -> Vec<MapCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem MapState aus.
    /// Dispatcht an Feature-Handler in `handlers/`; nur erfolgreiche
    /// Commands landen im Command-Log.
    pub fn handle_command(
        &mut self,
        state: &mut MapState,
        command: MapCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match &command {
            // === Ansicht ===
            MapCommand::SetExtent { envelope } => handlers::view::set_extent(state, *envelope)?,
            MapCommand::SetExtentFromText { text } => {
                handlers::view::set_extent_from_text(state, text)?
            }
            MapCommand::ZoomAt { center, percent } => {
                handlers::view::zoom_at(state, *center, *percent)?
            }
            MapCommand::Recenter { center } => handlers::view::recenter(state, *center)?,
            MapCommand::Displace { delta } => handlers::view::displace(state, *delta)?,
            MapCommand::Pan { direction, percent } => {
                handlers::view::pan(state, *direction, *percent)?
            }
            MapCommand::ResetView => handlers::view::reset_view(state)?,

            // === Kartenfenster ===
            MapCommand::SetMapSize { width, height } => {
                handlers::view::set_map_size(state, *width, *height)?
            }

            // === Toolbar ===
            MapCommand::SetInteractionMode { mode } => {
                handlers::tool::set_interaction_mode(state, *mode)
            }
        }

        state.command_log.record(command);
        Ok(())
    }
}
