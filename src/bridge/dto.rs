//! Serde-DTOs für den Austausch mit dem Host.

use crate::app::{MapCommand, PanDirection};
use crate::core::PixelRect;
use crate::ui::{DragFeedback, InteractionMode};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Eingehendes Host-Event (JSON: `{"type": "pointer_down", "x": 10, "y": 20}`).
///
/// Pointer-Koordinaten sind elementrelativ; fehlende Koordinaten werden
/// als fehlerhaftes Event behandelt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    PointerDown {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    PointerMove {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    PointerUp {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    /// Plattform hat die Pointer-Capture entzogen
    CaptureLost,
    /// Klick in die Übersichtskarte
    OverviewClick {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    /// Toolbar-Auswahl per Modusname (`"zoom-in"`, `"pan"`, ...)
    SelectMode { mode: String },
    Resize { width: f64, height: f64 },
    Pan { direction: PanDirection },
    PanAngle { degrees: f64 },
    ZoomIn,
    ZoomOut,
    /// Benutzer-Eingabe `minx;miny;maxx;maxy`
    SetExtent { extent: String },
    Reset,
}

impl HostEvent {
    /// Elementrelative Position, sofern beide Koordinaten vorhanden sind.
    pub(crate) fn position(x: Option<f64>, y: Option<f64>) -> Option<DVec2> {
        Some(DVec2::new(x?, y?))
    }
}

/// Zustand nach jedem verarbeiteten Event, vom Host zum Zeichnen genutzt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostUpdate {
    /// Aktuelle Ansicht als `minx;miny;maxx;maxy`
    pub extent: String,
    pub mode: InteractionMode,
    /// Kartenelement hält aktuell die Pointer-Capture
    pub captured: bool,
    /// Laufendes Drag-Feedback
    pub feedback: Option<DragFeedback>,
    /// Hervorhebung der Hauptansicht in der Übersicht (Pixel)
    pub overview_highlight: Option<PixelRect>,
    /// Letzter erfolgreich ausgeführter Command, der die Ansicht geändert hat
    pub last_view_change: Option<MapCommand>,
}
