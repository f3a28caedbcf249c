//! Achsenparallele Bounding-Box in Geo-Koordinaten.

use super::ViewportError;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trennzeichen der Textform `minx;miny;maxx;maxy` (Request-Parameter für den Server).
pub const ENVELOPE_DELIMITER: char = ';';

/// Unveränderliche Bounding-Box in Karteneinheiten.
///
/// Invariante: `minx <= maxx`, `miny <= maxy`, alle Werte endlich.
/// Jede View-Änderung erzeugt eine neue Envelope statt die alte zu mutieren.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEnvelope")]
pub struct Envelope {
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
}

/// Unvalidierte Serde-Form, wird über `Envelope::new` geprüft.
#[derive(Deserialize)]
struct RawEnvelope {
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
}

impl TryFrom<RawEnvelope> for Envelope {
    type Error = ViewportError;

    fn try_from(raw: RawEnvelope) -> Result<Self, Self::Error> {
        Envelope::new(raw.minx, raw.miny, raw.maxx, raw.maxy)
    }
}

impl Envelope {
    /// Erstellt eine Envelope und prüft Reihenfolge und Endlichkeit der Koordinaten.
    pub fn new(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Result<Self, ViewportError> {
        let finite = [minx, miny, maxx, maxy].iter().all(|v| v.is_finite());
        if !finite || minx > maxx || miny > maxy {
            return Err(ViewportError::InvalidEnvelope {
                minx,
                miny,
                maxx,
                maxy,
            });
        }
        Ok(Self {
            minx,
            miny,
            maxx,
            maxy,
        })
    }

    /// Erstellt eine Envelope aus zwei beliebigen Eckpunkten (Reihenfolge egal).
    pub fn from_corners(a: DVec2, b: DVec2) -> Result<Self, ViewportError> {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x, max.y)
    }

    /// Erstellt eine Envelope mit gegebener Größe um einen Mittelpunkt.
    pub fn from_center(center: DVec2, width: f64, height: f64) -> Result<Self, ViewportError> {
        let half = DVec2::new(width, height) / 2.0;
        Self::new(
            center.x - half.x,
            center.y - half.y,
            center.x + half.x,
            center.y + half.y,
        )
    }

    pub fn minx(&self) -> f64 {
        self.minx
    }

    pub fn miny(&self) -> f64 {
        self.miny
    }

    pub fn maxx(&self) -> f64 {
        self.maxx
    }

    pub fn maxy(&self) -> f64 {
        self.maxy
    }

    /// Untere linke Ecke
    pub fn min(&self) -> DVec2 {
        DVec2::new(self.minx, self.miny)
    }

    /// Obere rechte Ecke
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.maxx, self.maxy)
    }

    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }

    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }

    /// Mittelpunkt der Box.
    pub fn centroid(&self) -> DVec2 {
        DVec2::new(
            self.minx + self.width() / 2.0,
            self.miny + self.height() / 2.0,
        )
    }

    /// `true` wenn Breite oder Höhe 0 ist (keine gültige Quelle für eine Transformation).
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Prüft, ob ein Punkt innerhalb oder auf dem Rand liegt.
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.minx && point.x <= self.maxx && point.y >= self.miny && point.y <= self.maxy
    }

    /// Erweitert die Box an allen Kanten um `buffer` (negativ = verkleinern).
    ///
    /// Schlägt fehl, wenn ein negativer Puffer die Box umstülpen würde.
    pub fn with_margin(&self, buffer: f64) -> Result<Self, ViewportError> {
        Self::new(
            self.minx - buffer,
            self.miny - buffer,
            self.maxx + buffer,
            self.maxy + buffer,
        )
    }

    /// Verschiebt die Box um ein Delta in Karteneinheiten.
    pub fn translated(&self, delta: DVec2) -> Result<Self, ViewportError> {
        Self::new(
            self.minx + delta.x,
            self.miny + delta.y,
            self.maxx + delta.x,
            self.maxy + delta.y,
        )
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = ENVELOPE_DELIMITER;
        write!(
            f,
            "{}{d}{}{d}{}{d}{}",
            self.minx, self.miny, self.maxx, self.maxy
        )
    }
}

impl FromStr for Envelope {
    type Err = ViewportError;

    /// Parst die Textform `minx;miny;maxx;maxy` (Leerraum um die Zahlen wird ignoriert).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ViewportError::MalformedEnvelope {
            input: s.to_string(),
        };

        let values = s
            .split(ENVELOPE_DELIMITER)
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;

        match values.as_slice() {
            [minx, miny, maxx, maxy] => Self::new(*minx, *miny, *maxx, *maxy),
            _ => Err(malformed()),
        }
    }
}
