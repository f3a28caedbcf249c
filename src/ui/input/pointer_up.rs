//! Pointer-Up: Aktion abschließen und genau einen Report emittieren.

use super::{
    InteractionSession, PointerInteractionController, PointerSource, ViewportContext, release,
};
use crate::app::MapIntent;
use crate::ui::InteractionMode;

impl PointerInteractionController {
    /// Beendet die Session, meldet das Ergebnis und gibt Capture frei.
    ///
    /// Der Toolbar-Modus bleibt unverändert; nur die Session wird geleert.
    pub fn pointer_up(
        &mut self,
        ctx: &mut ViewportContext<'_>,
        pointer: &dyn PointerSource,
        events: &mut Vec<MapIntent>,
    ) {
        let Some(mut session) = self.session.take() else {
            return;
        };

        let Some(position) = pointer.element_position() else {
            log::warn!(
                "Pointer-Up ohne Koordinaten, {}-Session ohne Report verworfen",
                session.mode
            );
            release(ctx.capture, &session);
            return;
        };
        session.current = position;

        if let Some(intent) = finalize(&session, ctx) {
            log::debug!("{}-Session abgeschlossen: {:?}", session.mode, intent);
            events.push(intent);
        }

        release(ctx.capture, &session);
    }
}

/// Übersetzt die abgeschlossene Session in den Report an den Map-Controller.
fn finalize(session: &InteractionSession, ctx: &ViewportContext<'_>) -> Option<MapIntent> {
    let transform = ctx.transform;
    let step = ctx.options.zoom_step_percent;

    match session.mode {
        InteractionMode::ZoomIn => {
            let rect = session.rubber_band();
            let tolerance = ctx.options.click_tolerance_px.max(0.0);

            // Klick ohne (nennenswerten) Drag: zentrierter Zoom statt Box-Zoom
            if rect.width() <= tolerance || rect.height() <= tolerance {
                return Some(MapIntent::ZoomRequested {
                    center: transform.to_geo(rect.center()),
                    percent: step,
                });
            }

            match transform.screen_rect_to_envelope(&rect) {
                Ok(envelope) => Some(MapIntent::SetExtentRequested { envelope }),
                Err(e) => {
                    log::warn!("Rubber-Band nicht umrechenbar, verworfen: {}", e);
                    None
                }
            }
        }
        InteractionMode::ZoomOut => Some(MapIntent::ZoomRequested {
            center: transform.to_geo(session.current),
            percent: -step,
        }),
        InteractionMode::Pan => Some(MapIntent::DisplacementRequested {
            delta: transform.pixel_delta_to_geo(session.pan_offset()),
        }),
        InteractionMode::Idle => None,
    }
}
