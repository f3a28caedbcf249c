//! Interaktionsmodi der Karten-Toolbar.

use crate::core::ViewportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aktiver Pointer-Modus, von der Toolbar gesetzt und beim Pointer-Down gelesen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionMode {
    /// Pointer-Events lösen keine Drag-Session aus
    #[default]
    Idle,
    /// Rubber-Band-Box aufziehen oder per Klick hineinzoomen
    ZoomIn,
    /// Per Klick herauszoomen
    ZoomOut,
    /// Karte verschieben
    Pan,
}

impl InteractionMode {
    /// Alle Modi in Toolbar-Reihenfolge.
    pub const ALL: [InteractionMode; 4] = [Self::Idle, Self::ZoomIn, Self::ZoomOut, Self::Pan];

    /// Kanonischer Name (`idle`, `zoom-in`, `zoom-out`, `pan`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::Pan => "pan",
        }
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionMode {
    type Err = ViewportError;

    /// Groß-/Kleinschreibung und Trennzeichen werden ignoriert (`ZOOMIN`, `zoom_in`, `Zoom-In`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "idle" | "none" => Ok(Self::Idle),
            "zoomin" => Ok(Self::ZoomIn),
            "zoomout" => Ok(Self::ZoomOut),
            "pan" | "move" => Ok(Self::Pan),
            _ => Err(ViewportError::UnknownMode(s.to_string())),
        }
    }
}
