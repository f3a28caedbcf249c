//! Fehlertypen des Kartenfenster-Kerns.

/// Strukturelle Fehler bei Konstruktion von Envelopes, Transformationen und View-Änderungen.
///
/// Ungültige Pointer-Events sind bewusst keine Fehler, sie werden im
/// Input-Layer übersprungen.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewportError {
    /// Quell- oder Zielrechteck hat Breite oder Höhe 0 (bzw. nicht-endliche Skalierung)
    #[error("Entartetes Rechteck: Breite {width}, Höhe {height}")]
    DegenerateEnvelope { width: f64, height: f64 },
    /// `minx > maxx`, `miny > maxy` oder nicht-endliche Koordinaten
    #[error("Ungültige Envelope: ({minx}, {miny}) / ({maxx}, {maxy})")]
    InvalidEnvelope {
        minx: f64,
        miny: f64,
        maxx: f64,
        maxy: f64,
    },
    /// Textform entspricht nicht `minx;miny;maxx;maxy`
    #[error("Envelope-Text '{input}' ist nicht im Format minx;miny;maxx;maxy")]
    MalformedEnvelope { input: String },
    /// Kartengröße kleiner als 1x1 Pixel
    #[error("Ungültige Kartengröße {width}x{height} (mindestens 1x1 Pixel)")]
    InvalidMapSize { width: f64, height: f64 },
    /// Pan-Faktor muss größer 0 sein
    #[error("Ungültiger Pan-Faktor {0}% (muss > 0 sein)")]
    InvalidPanFactor(f64),
    /// Hineinzoomen um 100 % oder mehr würde die Ansicht auf einen Punkt reduzieren
    #[error("Ungültiger Zoom-Schritt {0}% (muss < 100 sein)")]
    InvalidZoomPercent(f64),
    /// Unbekannter Name eines Interaktionsmodus
    #[error("Unbekannter Interaktionsmodus '{0}'")]
    UnknownMode(String),
}
