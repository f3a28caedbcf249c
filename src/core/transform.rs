//! Lineare Abbildung zwischen Geo-Envelope und Pixel-Rechteck (inkl. Y-Flip).

use super::{Envelope, ViewportError};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Rechteck in Bildschirm-Pixeln (Ursprung oben links, Y wächst nach unten).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl PixelRect {
    /// Erstellt ein Rechteck aus zwei Ecken in der übergebenen Reihenfolge.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Rechteck `(0, 0) .. (width, height)` für ein Element gegebener Größe.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Normalisiertes Rechteck zwischen zwei beliebigen Punkten.
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x, max.y)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Obere linke Ecke
    pub fn min(&self) -> DVec2 {
        DVec2::new(self.x1, self.y1)
    }

    /// Untere rechte Ecke
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.x2, self.y2)
    }

    pub fn center(&self) -> DVec2 {
        (self.min() + self.max()) / 2.0
    }
}

/// Affine Geo↔Pixel-Abbildung ohne Rotation, je Achse Skalierung + Translation.
///
/// Die Y-Achse wird gespiegelt: Geo-Y wächst nach oben, Pixel-Y nach unten.
/// Skalierungsfaktoren werden einmal bei der Konstruktion berechnet; bei
/// Pan, Zoom oder Resize wird eine neue Transformation erzeugt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    source: Envelope,
    destination: PixelRect,
    qx: f64,
    qy: f64,
}

impl ViewportTransform {
    /// Erstellt die Transformation `source` (Geo) → `destination` (Pixel).
    ///
    /// Quell- oder Zielrechtecke mit Breite/Höhe 0 liefern
    /// `ViewportError::DegenerateEnvelope` statt nicht-endlicher Faktoren.
    pub fn new(source: Envelope, destination: PixelRect) -> Result<Self, ViewportError> {
        let qx = destination.width() / source.width();
        let qy = destination.height() / source.height();

        if !qx.is_finite() || !qy.is_finite() || qx == 0.0 || qy == 0.0 {
            let (width, height) = if source.is_degenerate() {
                (source.width(), source.height())
            } else {
                (destination.width(), destination.height())
            };
            return Err(ViewportError::DegenerateEnvelope { width, height });
        }

        Ok(Self {
            source,
            destination,
            qx,
            qy,
        })
    }

    /// Quellrechteck (Geo-Koordinaten)
    pub fn source(&self) -> &Envelope {
        &self.source
    }

    /// Zielrechteck (Pixel)
    pub fn destination(&self) -> &PixelRect {
        &self.destination
    }

    /// Pixel pro Karteneinheit in X
    pub fn scale_x(&self) -> f64 {
        self.qx
    }

    /// Pixel pro Karteneinheit in Y
    pub fn scale_y(&self) -> f64 {
        self.qy
    }

    pub fn to_screen_x(&self, geo_x: f64) -> f64 {
        self.destination.x1 + (geo_x - self.source.minx()) * self.qx
    }

    pub fn to_screen_y(&self, geo_y: f64) -> f64 {
        self.destination.y1 + self.destination.height() - (geo_y - self.source.miny()) * self.qy
    }

    pub fn to_geo_x(&self, screen_x: f64) -> f64 {
        self.source.minx() + (screen_x - self.destination.x1) / self.qx
    }

    pub fn to_geo_y(&self, screen_y: f64) -> f64 {
        self.source.miny() + (self.destination.y1 + self.destination.height() - screen_y) / self.qy
    }

    /// Geo-Punkt → Pixel-Punkt
    pub fn to_screen(&self, geo: DVec2) -> DVec2 {
        DVec2::new(self.to_screen_x(geo.x), self.to_screen_y(geo.y))
    }

    /// Pixel-Punkt → Geo-Punkt
    pub fn to_geo(&self, screen: DVec2) -> DVec2 {
        DVec2::new(self.to_geo_x(screen.x), self.to_geo_y(screen.y))
    }

    /// Projiziert eine Envelope auf ein normalisiertes Pixel-Rechteck.
    ///
    /// Durch den Y-Flip landet `maxy` an der oberen Kante (`y1`).
    pub fn envelope_to_screen(&self, envelope: &Envelope) -> PixelRect {
        PixelRect::from_corners(self.to_screen(envelope.min()), self.to_screen(envelope.max()))
    }

    /// Rechnet ein Pixel-Rechteck (z.B. Rubber-Band) in eine Geo-Envelope um.
    pub fn screen_rect_to_envelope(&self, rect: &PixelRect) -> Result<Envelope, ViewportError> {
        Envelope::from_corners(self.to_geo(rect.min()), self.to_geo(rect.max()))
    }

    /// Rechnet eine Pixel-Verschiebung in eine Geo-Verschiebung um.
    ///
    /// Nur die Skalierung wirkt; das Y-Vorzeichen kippt wegen des Achsen-Flips.
    pub fn pixel_delta_to_geo(&self, delta_px: DVec2) -> DVec2 {
        DVec2::new(delta_px.x / self.qx, -delta_px.y / self.qy)
    }
}
