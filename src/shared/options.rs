//! Zentrale Konfiguration für das Kartenfenster.
//!
//! `ViewportOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//!
//! Laden und Speichern als TOML ist ein Angebot an den Host; der Kern
//! selbst liest keine Dateien und erhält fertige Optionen.

use crate::core::Envelope;
use serde::{Deserialize, Serialize};

// ── Navigation ──────────────────────────────────────────────────────

/// Fester Zoom-Schritt in Prozent der aktuellen Ansicht (Klick-Zoom, Toolbar).
pub const ZOOM_STEP_PERCENT: f64 = 25.0;
/// Schrittweite für Richtungs-Pan in Prozent der Ansichtsgröße.
pub const PAN_STEP_PERCENT: f64 = 50.0;

// ── Pointer ─────────────────────────────────────────────────────────

/// Rubber-Band-Boxen mit Breite oder Höhe bis zu diesem Wert gelten als Klick.
pub const CLICK_TOLERANCE_PX: f64 = 0.0;

// ── Übersichtskarte ─────────────────────────────────────────────────

/// Feste Breite des Übersichtskarten-Widgets in Pixeln.
pub const OVERVIEW_WIDTH_PX: f64 = 200.0;
/// Feste Höhe des Übersichtskarten-Widgets in Pixeln.
pub const OVERVIEW_HEIGHT_PX: f64 = 150.0;

/// Quellrechteck der Übersichtskarte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverviewExtent {
    /// Folgt der Hauptkarte, erweitert um `margin_ratio` × längere Kante
    FollowMain { margin_ratio: f64 },
    /// Fester Kontext-Ausschnitt (z.B. Gesamtgebiet)
    Fixed { envelope: Envelope },
}

impl Default for OverviewExtent {
    fn default() -> Self {
        Self::FollowMain { margin_ratio: 0.0 }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Kartenfenster-Optionen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportOptions {
    /// Zoom-Schritt in Prozent (Klick-Zoom-In positiv, Zoom-Out negiert)
    pub zoom_step_percent: f64,
    /// Richtungs-Pan in Prozent der Ansichtsgröße
    pub pan_step_percent: f64,
    /// Klick-Toleranz für Rubber-Band-Boxen in Pixeln
    pub click_tolerance_px: f64,
    /// Breite des Übersichtskarten-Widgets
    pub overview_width_px: f64,
    /// Höhe des Übersichtskarten-Widgets
    pub overview_height_px: f64,
    /// Quellrechteck der Übersichtskarte
    pub overview_extent: OverviewExtent,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            zoom_step_percent: ZOOM_STEP_PERCENT,
            pan_step_percent: PAN_STEP_PERCENT,
            click_tolerance_px: CLICK_TOLERANCE_PX,
            overview_width_px: OVERVIEW_WIDTH_PX,
            overview_height_px: OVERVIEW_HEIGHT_PX,
            overview_extent: OverviewExtent::default(),
        }
    }
}

impl ViewportOptions {
    /// Ersetzt ungültige Werte feldweise durch ihren Standardwert.
    ///
    /// Zoom-Schritt in `(0, 100)`, Pan-Schritt `> 0`, Klick-Toleranz `>= 0`,
    /// Widget mindestens 1x1 Pixel, Übersichtsrand `>= 0`, feste
    /// Übersicht nicht entartet.
    pub fn sanitized(mut self) -> Self {
        if !(self.zoom_step_percent > 0.0 && self.zoom_step_percent < 100.0) {
            log::warn!(
                "Ungültiger Zoom-Schritt {}%, verwende {}%",
                self.zoom_step_percent,
                ZOOM_STEP_PERCENT
            );
            self.zoom_step_percent = ZOOM_STEP_PERCENT;
        }
        if !(self.pan_step_percent.is_finite() && self.pan_step_percent > 0.0) {
            log::warn!(
                "Ungültiger Pan-Schritt {}%, verwende {}%",
                self.pan_step_percent,
                PAN_STEP_PERCENT
            );
            self.pan_step_percent = PAN_STEP_PERCENT;
        }
        if !(self.click_tolerance_px.is_finite() && self.click_tolerance_px >= 0.0) {
            log::warn!(
                "Ungültige Klick-Toleranz {} px, verwende {} px",
                self.click_tolerance_px,
                CLICK_TOLERANCE_PX
            );
            self.click_tolerance_px = CLICK_TOLERANCE_PX;
        }
        if !(self.overview_width_px.is_finite() && self.overview_width_px >= 1.0) {
            log::warn!(
                "Ungültige Übersichtsbreite {} px, verwende {} px",
                self.overview_width_px,
                OVERVIEW_WIDTH_PX
            );
            self.overview_width_px = OVERVIEW_WIDTH_PX;
        }
        if !(self.overview_height_px.is_finite() && self.overview_height_px >= 1.0) {
            log::warn!(
                "Ungültige Übersichtshöhe {} px, verwende {} px",
                self.overview_height_px,
                OVERVIEW_HEIGHT_PX
            );
            self.overview_height_px = OVERVIEW_HEIGHT_PX;
        }
        let extent_valid = match self.overview_extent {
            OverviewExtent::FollowMain { margin_ratio } => {
                margin_ratio.is_finite() && margin_ratio >= 0.0
            }
            OverviewExtent::Fixed { envelope } => !envelope.is_degenerate(),
        };
        if !extent_valid {
            log::warn!(
                "Ungültiger Übersichtsausschnitt {:?}, verwende Standard",
                self.overview_extent
            );
            self.overview_extent = OverviewExtent::default();
        }
        self
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    ///
    /// Einzelne ungültige Werte fallen über [`Self::sanitized`] zurück.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}
