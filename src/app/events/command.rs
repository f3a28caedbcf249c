use crate::core::Envelope;
use crate::ui::InteractionMode;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapCommand {
    /// Ansicht direkt setzen
    SetExtent { envelope: Envelope },
    /// Ansicht aus Benutzer-Text setzen
    SetExtentFromText { text: String },
    /// Zentrierter Zoom in Prozent der Ansicht
    ZoomAt { center: DVec2, percent: f64 },
    /// Ansicht auf Punkt zentrieren
    Recenter { center: DVec2 },
    /// Ansicht entgegen einer Pointer-Verschiebung bewegen
    Displace { delta: DVec2 },
    /// Ansicht um `percent` ihrer Größe in Richtung `direction` verschieben
    Pan { direction: DVec2, percent: f64 },
    /// Pixelgröße der Hauptkarte setzen
    SetMapSize { width: f64, height: f64 },
    /// Toolbar-Modus setzen
    SetInteractionMode { mode: InteractionMode },
    /// Startansicht wiederherstellen
    ResetView,
}

impl MapCommand {
    /// `true` für Commands, die die Envelope der Hauptkarte ersetzen.
    pub fn changes_view(&self) -> bool {
        !matches!(
            self,
            Self::SetMapSize { .. } | Self::SetInteractionMode { .. }
        )
    }
}
