//! Application-Layer: Host-Map-Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Map-State und Controller
///
/// Dieses Modul verwaltet den Zustand der Hauptkarte (Ansicht, Größe, Toolbar).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::MapController;
pub use events::{MapCommand, MapIntent, PanDirection};
pub use state::{MapState, ToolState, ViewState};
