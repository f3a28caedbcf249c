//! Handler für Ansicht und Kartengröße.

use crate::app::MapState;
use crate::app::use_cases;
use crate::core::Envelope;
use glam::DVec2;

/// Setzt eine neue Ansicht.
pub fn set_extent(state: &mut MapState, envelope: Envelope) -> anyhow::Result<()> {
    Ok(use_cases::navigation::set_extent(state, envelope)?)
}

/// Setzt eine Ansicht aus Benutzer-Text (`minx;miny;maxx;maxy`).
pub fn set_extent_from_text(state: &mut MapState, text: &str) -> anyhow::Result<()> {
    Ok(use_cases::navigation::set_extent_from_text(state, text)?)
}

/// Zoomt zentriert auf einen Geo-Punkt.
pub fn zoom_at(state: &mut MapState, center: DVec2, percent: f64) -> anyhow::Result<()> {
    Ok(use_cases::navigation::zoom(state, center, percent)?)
}

/// Zentriert die Ansicht neu.
pub fn recenter(state: &mut MapState, center: DVec2) -> anyhow::Result<()> {
    Ok(use_cases::navigation::recenter(state, center)?)
}

/// Übernimmt eine Pointer-Verschiebung.
pub fn displace(state: &mut MapState, delta: DVec2) -> anyhow::Result<()> {
    Ok(use_cases::navigation::displace(state, delta)?)
}

/// Verschiebt die Ansicht in eine Richtung.
pub fn pan(state: &mut MapState, direction: DVec2, percent: f64) -> anyhow::Result<()> {
    Ok(use_cases::navigation::pan(state, direction, percent)?)
}

/// Aktualisiert die Kartengröße.
pub fn set_map_size(state: &mut MapState, width: f64, height: f64) -> anyhow::Result<()> {
    Ok(use_cases::viewport::resize(state, width, height)?)
}

/// Stellt die Startansicht wieder her.
pub fn reset_view(state: &mut MapState) -> anyhow::Result<()> {
    Ok(use_cases::navigation::reset_view(state)?)
}
