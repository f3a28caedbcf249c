use crate::core::Envelope;
use crate::ui::InteractionMode;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Feste Pan-Richtungen der Navigations-Buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanDirection {
    North,
    NorthEast,
    NorthWest,
    South,
    SouthEast,
    SouthWest,
    West,
    East,
}

impl PanDirection {
    /// Richtungsvektor in Geo-Koordinaten (Y nach Norden), Komponenten in {-1, 0, 1}.
    pub fn unit(&self) -> DVec2 {
        match self {
            Self::North => DVec2::new(0.0, 1.0),
            Self::NorthEast => DVec2::new(1.0, 1.0),
            Self::NorthWest => DVec2::new(-1.0, 1.0),
            Self::South => DVec2::new(0.0, -1.0),
            Self::SouthEast => DVec2::new(1.0, -1.0),
            Self::SouthWest => DVec2::new(-1.0, -1.0),
            Self::West => DVec2::new(-1.0, 0.0),
            Self::East => DVec2::new(1.0, 0.0),
        }
    }
}

/// Map-Intents sind Eingaben aus Pointer-Controller, Übersicht und Host-Toolbar.
///
/// Die ersten vier Varianten sind die einzigen Reports, die der
/// Interaktions-Layer an den Map-Controller schickt.
#[derive(Debug, Clone, PartialEq)]
pub enum MapIntent {
    /// Zentrierter Zoom um `percent` der Ansicht (> 0 hinein, < 0 heraus, 0 = nur zentrieren)
    ZoomRequested { center: DVec2, percent: f64 },
    /// Pointer wurde um `delta` (Geo-Einheiten) gezogen
    DisplacementRequested { delta: DVec2 },
    /// Neue Ansicht aus Rubber-Band-Box
    SetExtentRequested { envelope: Envelope },
    /// Hauptkarte auf Geo-Punkt zentrieren (Übersichts-Klick)
    RecenterRequested { center: DVec2 },

    /// Toolbar-Modus wechseln
    InteractionModeSelected { mode: InteractionMode },
    /// Hauptkarte hat neue Pixelgröße
    MapResized { width: f64, height: f64 },
    /// Toolbar: stufenweise hineinzoomen (um den Mittelpunkt)
    ZoomInRequested,
    /// Toolbar: stufenweise herauszoomen (um den Mittelpunkt)
    ZoomOutRequested,
    /// Navigations-Button: Ansicht in feste Richtung verschieben
    PanRequested { direction: PanDirection },
    /// Ansicht in freie Richtung verschieben (Grad, 0 = Norden, im Uhrzeigersinn)
    PanByAngleRequested { degrees: f64 },
    /// Zurück zur Startansicht
    ResetViewRequested,
    /// Vom Benutzer eingegebene Envelope im Format `minx;miny;maxx;maxy`
    ExtentEntered { text: String },
}
