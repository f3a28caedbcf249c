//! Übersichtskarte: Highlight-Rechteck der Hauptansicht und Klick-Recenter.

use super::input::PointerSource;
use crate::app::MapIntent;
use crate::core::{Envelope, PixelRect, ViewportError, ViewportTransform};
use crate::shared::OverviewExtent;

/// Hält die Übersichtskarte synchron zur Envelope der Hauptkarte.
#[derive(Debug, Clone)]
pub struct OverviewSynchronizer {
    /// Fester Pixelbereich des Widgets
    destination: PixelRect,
    extent: OverviewExtent,
    transform: Option<ViewportTransform>,
    highlight: Option<PixelRect>,
}

impl OverviewSynchronizer {
    /// Erstellt den Synchronizer für ein Widget fester Größe.
    pub fn new(width: f64, height: f64, extent: OverviewExtent) -> Result<Self, ViewportError> {
        if !(width >= 1.0 && height >= 1.0) {
            return Err(ViewportError::InvalidMapSize { width, height });
        }
        Ok(Self {
            destination: PixelRect::from_size(width, height),
            extent,
            transform: None,
            highlight: None,
        })
    }

    /// Pixelbereich des Widgets
    pub fn destination(&self) -> &PixelRect {
        &self.destination
    }

    /// Zuletzt berechnete Transformation (None vor dem ersten `sync`).
    pub fn transform(&self) -> Option<&ViewportTransform> {
        self.transform.as_ref()
    }

    /// Highlight-Rechteck der Hauptansicht in Widget-Pixeln.
    pub fn highlight(&self) -> Option<PixelRect> {
        self.highlight
    }

    /// Quellrechteck der Übersicht für eine gegebene Hauptansicht.
    pub fn source_for(&self, main: &Envelope) -> Result<Envelope, ViewportError> {
        match self.extent {
            OverviewExtent::FollowMain { margin_ratio } => {
                main.with_margin(main.width().max(main.height()) * margin_ratio)
            }
            OverviewExtent::Fixed { envelope } => Ok(envelope),
        }
    }

    /// Berechnet Transformation und Highlight, ohne den Zustand zu ändern.
    pub fn prepare(&self, main: &Envelope) -> Result<(ViewportTransform, PixelRect), ViewportError> {
        let source = self.source_for(main)?;
        let transform = ViewportTransform::new(source, self.destination)?;
        let highlight = transform.envelope_to_screen(main);
        Ok((transform, highlight))
    }

    /// Neuberechnung nach jeder Änderung der Hauptkarten-Envelope.
    ///
    /// Bei Fehler bleiben Transformation und Highlight unverändert.
    pub fn sync(&mut self, main: &Envelope) -> Result<(), ViewportError> {
        let (transform, highlight) = self.prepare(main)?;

        log::debug!(
            "Übersicht synchronisiert: Highlight ({:.1}, {:.1}) - ({:.1}, {:.1})",
            highlight.x1,
            highlight.y1,
            highlight.x2,
            highlight.y2
        );
        self.transform = Some(transform);
        self.highlight = Some(highlight);
        Ok(())
    }

    /// Rechnet einen Klick in der Übersicht in einen Recenter-Report um.
    pub fn handle_click(&self, pointer: &dyn PointerSource, events: &mut Vec<MapIntent>) {
        let Some(transform) = self.transform.as_ref() else {
            log::debug!("Übersichts-Klick vor erster Synchronisierung ignoriert");
            return;
        };
        let Some(position) = pointer.element_position() else {
            log::debug!("Übersichts-Klick ohne Koordinaten übersprungen");
            return;
        };
        events.push(MapIntent::RecenterRequested {
            center: transform.to_geo(position),
        });
    }
}
