//! Pointer-Interaktion im Kartenfenster: Zoom-Box, Zoom-Out-Klick, Pan → MapIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `adapter`: Plattform-Adapter für Pointer-Position und Capture
//! - `session`: Zustand einer laufenden Drag-Session (Rubber-Band, Pan-Versatz)
//! - `pointer_down`: Session-Start und Capture
//! - `pointer_move`: Rubber-Band/Pan-Feedback während des Drags
//! - `pointer_up`: Abschluss und genau ein Report an den Map-Controller

mod adapter;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod session;


pub use adapter::{CaptureFlag, ClientPointer, ElementPointer, PointerCapture, PointerSource};
pub use session::{DragFeedback, InteractionSession};

use super::InteractionMode;
use crate::core::ViewportTransform;
use crate::shared::ViewportOptions;

/// Bündelt die Parameter eines Pointer-Events, vom Host-Controller bereitgestellt.
///
/// Ersetzt globalen Modus- und Capture-Zustand: alles, was ein Handler
/// außerhalb der eigenen Session braucht, kommt hier herein.
pub struct ViewportContext<'a> {
    /// Aktueller Toolbar-Modus (wird nur beim Pointer-Down gelesen)
    pub mode: InteractionMode,
    /// Aktive Geo↔Pixel-Transformation des Ziel-Elements
    pub transform: &'a ViewportTransform,
    pub options: &'a ViewportOptions,
    /// Capture-Schnittstelle der Plattform
    pub capture: &'a mut dyn PointerCapture,
}

/// Zustandsautomat über `InteractionMode × {keine Session, Session aktiv}`.
#[derive(Debug, Default)]
pub struct PointerInteractionController {
    session: Option<InteractionSession>,
}

impl PointerInteractionController {
    /// Erstellt einen Controller ohne aktive Session.
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Laufende Session, falls vorhanden.
    pub fn session(&self) -> Option<&InteractionSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Aktuelles Drag-Feedback (Rubber-Band oder Pan-Versatz).
    pub fn feedback(&self) -> Option<DragFeedback> {
        self.session.as_ref().and_then(InteractionSession::feedback)
    }

    /// Capture wurde von der Plattform entzogen: Session ohne Report beenden.
    pub fn capture_lost(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("Pointer-Capture verloren, {}-Session beendet", session.mode);
        }
    }

    /// Bricht eine laufende Session ohne Report ab und gibt Capture frei.
    pub fn cancel(&mut self, capture: &mut dyn PointerCapture) {
        if let Some(session) = self.session.take() {
            log::debug!("{}-Session abgebrochen", session.mode);
            release(capture, &session);
        }
    }
}

/// Gibt Capture frei, sofern die Session sie hält.
fn release(capture: &mut dyn PointerCapture, session: &InteractionSession) {
    if session.captured {
        capture.release_capture();
    }
}
