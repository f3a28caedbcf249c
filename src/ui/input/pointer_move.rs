//! Pointer-Move: Rubber-Band bzw. Pan-Versatz nachführen.

use super::{PointerInteractionController, PointerSource};

impl PointerInteractionController {
    /// Aktualisiert die aktuelle Position der Session (nur visuelles Feedback).
    ///
    /// Ohne Session oder ohne Koordinaten ist das Event ein No-op.
    pub fn pointer_move(&mut self, pointer: &dyn PointerSource) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(position) = pointer.element_position() else {
            log::debug!("Pointer-Move ohne Koordinaten übersprungen");
            return;
        };
        session.current = position;
    }
}
