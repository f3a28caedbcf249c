use crate::ui::InteractionMode;

/// Zustand der Karten-Toolbar
#[derive(Debug, Clone, Default)]
pub struct ToolState {
    /// Aktiver Pointer-Modus, bleibt über Sessions hinweg bestehen
    pub mode: InteractionMode,
}

impl ToolState {
    /// Erstellt den Standard-Toolbar-Zustand (Idle).
    pub fn new() -> Self {
        Self {
            mode: InteractionMode::Idle,
        }
    }
}
