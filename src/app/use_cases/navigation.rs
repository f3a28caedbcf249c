//! Use-Case-Funktionen für Ansichtsänderungen (Zoom, Pan, Recenter, Extent).
//!
//! Jede Änderung ersetzt die Envelope und synchronisiert danach die Übersicht.

use crate::app::MapState;
use crate::core::{Envelope, ViewportError};
use glam::DVec2;

/// Setzt eine neue Ansicht und synchronisiert die Übersichtskarte.
///
/// Entartete Envelopes (Breite oder Höhe 0) werden abgelehnt, der
/// bisherige Zustand bleibt dann unverändert.
pub fn set_extent(state: &mut MapState, envelope: Envelope) -> Result<(), ViewportError> {
    if envelope.is_degenerate() {
        return Err(ViewportError::DegenerateEnvelope {
            width: envelope.width(),
            height: envelope.height(),
        });
    }

    // Übersicht zuerst: schlägt sie fehl, bleibt auch die Ansicht unverändert
    state.view.overview.sync(&envelope)?;
    state.view.envelope = envelope;
    log::info!("Neue Ansicht: {}", envelope);
    Ok(())
}

/// Parst `minx;miny;maxx;maxy` und setzt die Ansicht.
pub fn set_extent_from_text(state: &mut MapState, text: &str) -> Result<(), ViewportError> {
    let envelope: Envelope = text.parse()?;
    set_extent(state, envelope)
}

/// Zentrierter Zoom um `percent` der aktuellen Ansichtsgröße.
///
/// `percent > 0` verkleinert die Ansicht (hinein), `percent < 0` vergrößert
/// sie (heraus), `percent == 0` zentriert nur neu.
pub fn zoom(state: &mut MapState, center: DVec2, percent: f64) -> Result<(), ViewportError> {
    if !percent.is_finite() || percent >= 100.0 {
        return Err(ViewportError::InvalidZoomPercent(percent));
    }

    let current = state.view.envelope;
    let factor = 1.0 - percent / 100.0;
    let envelope = Envelope::from_center(center, current.width() * factor, current.height() * factor)?;
    set_extent(state, envelope)
}

/// Zentriert die Ansicht auf einen Punkt, Größe bleibt erhalten.
pub fn recenter(state: &mut MapState, center: DVec2) -> Result<(), ViewportError> {
    zoom(state, center, 0.0)
}

/// Verschiebt die Ansicht entgegen einer Pointer-Verschiebung.
///
/// Zieht der Benutzer die Karte nach Osten, wandert der Ausschnitt nach
/// Westen; der Karteninhalt folgt so dem Pointer.
pub fn displace(state: &mut MapState, delta: DVec2) -> Result<(), ViewportError> {
    let envelope = state.view.envelope.translated(-delta)?;
    set_extent(state, envelope)
}

/// Verschiebt die Ansicht um `percent` ihrer Breite/Höhe in Richtung `direction`.
///
/// `direction` ist je Achse ein Anteil (z.B. `(1, 1)` für Nordost).
pub fn pan(state: &mut MapState, direction: DVec2, percent: f64) -> Result<(), ViewportError> {
    if !(percent.is_finite() && percent > 0.0) {
        return Err(ViewportError::InvalidPanFactor(percent));
    }

    let current = state.view.envelope;
    let size = DVec2::new(current.width(), current.height());
    let delta = direction * size * (percent / 100.0);
    let envelope = current.translated(delta)?;
    set_extent(state, envelope)
}

/// Richtungsvektor für freie Pan-Winkel (0° = Norden, im Uhrzeigersinn).
pub fn direction_from_degrees(degrees: f64) -> DVec2 {
    let radians = degrees.to_radians();
    DVec2::new(radians.sin(), radians.cos())
}

/// Stellt die Startansicht wieder her.
pub fn reset_view(state: &mut MapState) -> Result<(), ViewportError> {
    let initial = state.view.initial_envelope;
    set_extent(state, initial)
}
