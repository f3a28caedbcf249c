//! Use-Case-Funktionen für Kartengröße und Toolbar-Modus.

use crate::app::MapState;
use crate::core::ViewportError;
use crate::ui::InteractionMode;

/// Aktualisiert die Pixelgröße der Hauptkarte (mindestens 1x1 Pixel).
pub fn resize(state: &mut MapState, width: f64, height: f64) -> Result<(), ViewportError> {
    if !(width >= 1.0 && height >= 1.0) {
        return Err(ViewportError::InvalidMapSize { width, height });
    }
    state.view.map_size = [width, height];
    log::debug!("Kartengröße: {}x{}", width, height);
    Ok(())
}

/// Setzt den Toolbar-Modus; laufende Sessions behalten ihren Modus.
pub fn set_interaction_mode(state: &mut MapState, mode: InteractionMode) {
    if state.tool.mode != mode {
        log::debug!("Interaktionsmodus: {} → {}", state.tool.mode, mode);
    }
    state.tool.mode = mode;
}
