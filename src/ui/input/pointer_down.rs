//! Pointer-Down: Session-Start, Anker und Capture.

use super::{
    InteractionSession, PointerInteractionController, PointerSource, ViewportContext, release,
};
use crate::ui::InteractionMode;

impl PointerInteractionController {
    /// Startet eine Session im aktuellen Toolbar-Modus.
    ///
    /// Eine noch offene Session (z.B. nach verlorenem Pointer-Up) wird
    /// verworfen. Im Idle-Modus oder ohne Koordinaten entsteht keine Session.
    pub fn pointer_down(&mut self, ctx: &mut ViewportContext<'_>, pointer: &dyn PointerSource) {
        if let Some(stale) = self.session.take() {
            log::debug!("Offene {}-Session vor neuem Pointer-Down verworfen", stale.mode);
            release(ctx.capture, &stale);
        }

        if ctx.mode == InteractionMode::Idle {
            return;
        }

        let Some(anchor) = pointer.element_position() else {
            log::debug!("Pointer-Down ohne Koordinaten übersprungen");
            return;
        };

        let mut session = InteractionSession::new(ctx.mode, anchor);
        ctx.capture.acquire_capture();
        session.captured = true;

        log::debug!(
            "{}-Session gestartet bei ({:.1}, {:.1})",
            session.mode,
            anchor.x,
            anchor.y
        );
        self.session = Some(session);
    }
}
