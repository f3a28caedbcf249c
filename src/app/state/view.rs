use crate::core::{Envelope, PixelRect, ViewportError, ViewportTransform};
use crate::ui::OverviewSynchronizer;

/// View-bezogener Zustand der Hauptkarte
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle Ansicht (wird bei jeder Änderung ersetzt)
    pub envelope: Envelope,
    /// Startansicht für Reset
    pub initial_envelope: Envelope,
    /// Pixelgröße der Hauptkarte
    pub map_size: [f64; 2],
    /// Übersichtskarte, nach jeder Ansichtsänderung synchronisiert
    pub overview: OverviewSynchronizer,
}

impl ViewState {
    /// Transformation Ansicht → Pixelbereich der Hauptkarte.
    pub fn transform(&self) -> Result<ViewportTransform, ViewportError> {
        ViewportTransform::new(
            self.envelope,
            PixelRect::from_size(self.map_size[0], self.map_size[1]),
        )
    }
}
