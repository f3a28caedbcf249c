use crate::app::CommandLog;
use crate::core::{Envelope, ViewportError};
use crate::shared::ViewportOptions;
use crate::ui::OverviewSynchronizer;

use super::{ToolState, ViewState};

/// Hauptzustand des Host-Map-Controllers
#[derive(Debug)]
pub struct MapState {
    /// View-State
    pub view: ViewState,
    /// Toolbar-State
    pub tool: ToolState,
    /// Laufzeit-Optionen
    pub options: ViewportOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl MapState {
    /// Erstellt den State mit Startansicht und Kartengröße.
    ///
    /// Lehnt entartete Startansichten und Kartengrößen unter 1x1 Pixel ab
    /// und synchronisiert die Übersicht einmalig. Ungültige Optionen fallen
    /// feldweise auf ihre Standardwerte zurück.
    pub fn new(
        initial_extent: Envelope,
        map_size: [f64; 2],
        options: ViewportOptions,
    ) -> Result<Self, ViewportError> {
        let options = options.sanitized();
        let [width, height] = map_size;
        if !(width >= 1.0 && height >= 1.0) {
            return Err(ViewportError::InvalidMapSize { width, height });
        }
        if initial_extent.is_degenerate() {
            return Err(ViewportError::DegenerateEnvelope {
                width: initial_extent.width(),
                height: initial_extent.height(),
            });
        }

        let mut overview = OverviewSynchronizer::new(
            options.overview_width_px,
            options.overview_height_px,
            options.overview_extent,
        )?;
        overview.sync(&initial_extent)?;

        Ok(Self {
            view: ViewState {
                envelope: initial_extent,
                initial_envelope: initial_extent,
                map_size,
                overview,
            },
            tool: ToolState::new(),
            options,
            command_log: CommandLog::new(),
        })
    }
}
