//! Zustand einer laufenden Drag-Session und visuelles Feedback.

use crate::core::PixelRect;
use crate::ui::InteractionMode;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Kurzlebiger Zustand zwischen Pointer-Down und Pointer-Up.
///
/// Der Modus wird beim Pointer-Down eingefroren; ein Toolbar-Wechsel
/// während des Drags betrifft erst die nächste Session.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSession {
    /// Modus, mit dem die Session gestartet wurde
    pub mode: InteractionMode,
    /// Pointer-Position beim Pointer-Down (Pixel, elementrelativ)
    pub anchor: DVec2,
    /// Letzte bekannte Pointer-Position (Pixel, elementrelativ)
    pub current: DVec2,
    /// Ob die Session Pointer-Capture hält
    pub captured: bool,
}

impl InteractionSession {
    /// Startet eine Session am Anker; aktuelle Position = Anker.
    pub fn new(mode: InteractionMode, anchor: DVec2) -> Self {
        Self {
            mode,
            anchor,
            current: anchor,
            captured: false,
        }
    }

    /// Rubber-Band zwischen Anker und aktueller Position (normalisiert).
    pub fn rubber_band(&self) -> PixelRect {
        PixelRect::from_corners(self.anchor, self.current)
    }

    /// Pixel-Verschiebung seit dem Anker.
    pub fn pan_offset(&self) -> DVec2 {
        self.current - self.anchor
    }

    /// Visuelles Feedback für den Host (noch nicht übernommen).
    pub fn feedback(&self) -> Option<DragFeedback> {
        match self.mode {
            InteractionMode::ZoomIn => Some(DragFeedback::RubberBand {
                rect: self.rubber_band(),
            }),
            InteractionMode::Pan => Some(DragFeedback::PanOffset {
                offset: self.pan_offset(),
            }),
            InteractionMode::ZoomOut | InteractionMode::Idle => None,
        }
    }
}

/// Was der Host während eines Drags zeichnen soll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragFeedback {
    /// Rubber-Band-Rechteck (Zoom-In)
    RubberBand { rect: PixelRect },
    /// Versatz des Karten-Overlays (Pan)
    PanOffset { offset: DVec2 },
}
