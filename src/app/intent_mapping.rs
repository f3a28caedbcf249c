//! Mapping von Map-Intents auf mutierende Map-Commands.

use super::use_cases::navigation::direction_from_degrees;
use super::{MapCommand, MapIntent, MapState};


/// Übersetzt einen `MapIntent` in eine Sequenz ausführbarer `MapCommand`s.
pub fn map_intent_to_commands(state: &MapState, intent: MapIntent) -> Vec<MapCommand> {
    match intent {
        MapIntent::ZoomRequested { center, percent } => {
            vec![MapCommand::ZoomAt { center, percent }]
        }
        MapIntent::DisplacementRequested { delta } => vec![MapCommand::Displace { delta }],
        MapIntent::SetExtentRequested { envelope } => vec![MapCommand::SetExtent { envelope }],
        MapIntent::RecenterRequested { center } => vec![MapCommand::Recenter { center }],
        MapIntent::InteractionModeSelected { mode } => {
            vec![MapCommand::SetInteractionMode { mode }]
        }
        MapIntent::MapResized { width, height } => vec![MapCommand::SetMapSize { width, height }],
        MapIntent::ZoomInRequested => vec![MapCommand::ZoomAt {
            center: state.view.envelope.centroid(),
            percent: state.options.zoom_step_percent,
        }],
        MapIntent::ZoomOutRequested => vec![MapCommand::ZoomAt {
            center: state.view.envelope.centroid(),
            percent: -state.options.zoom_step_percent,
        }],
        MapIntent::PanRequested { direction } => vec![MapCommand::Pan {
            direction: direction.unit(),
            percent: state.options.pan_step_percent,
        }],
        MapIntent::PanByAngleRequested { degrees } => vec![MapCommand::Pan {
            direction: direction_from_degrees(degrees),
            percent: state.options.pan_step_percent,
        }],
        MapIntent::ResetViewRequested => vec![MapCommand::ResetView],
        MapIntent::ExtentEntered { text } => vec![MapCommand::SetExtentFromText { text }],
    }
}
