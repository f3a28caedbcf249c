//! Handler für die Karten-Toolbar.

use crate::app::MapState;
use crate::app::use_cases;
use crate::ui::InteractionMode;

/// Wechselt den Interaktionsmodus.
pub fn set_interaction_mode(state: &mut MapState, mode: InteractionMode) {
    use_cases::viewport::set_interaction_mode(state, mode);
}
