//! Plattform-Adapter: Pointer-Position und Pointer-Capture.
//!
//! Jede Zielumgebung implementiert genau einen Weg, die elementrelative
//! Pointer-Position eines Events zu liefern. Der Controller kennt nur
//! diese Schnittstelle und kein konkretes Browser-Event-Modell.

use glam::DVec2;

/// Liefert die Pointer-Position eines Events relativ zum Ziel-Element.
pub trait PointerSource {
    /// Elementrelative Position in Pixeln; `None` wenn das Event keine
    /// (endlichen) Koordinaten trägt.
    fn element_position(&self) -> Option<DVec2>;
}

/// Event-Modell, das bereits elementrelative Koordinaten liefert (`offsetX/offsetY`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementPointer {
    pub offset: Option<DVec2>,
}

impl ElementPointer {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            offset: Some(DVec2::new(x, y)),
        }
    }
}

impl PointerSource for ElementPointer {
    fn element_position(&self) -> Option<DVec2> {
        self.offset.filter(|p| p.is_finite())
    }
}

/// Event-Modell mit fensterrelativen Koordinaten (`clientX/clientY`).
///
/// Die Element-Position ergibt sich aus Client-Position minus Element-Ursprung.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClientPointer {
    pub client: Option<DVec2>,
    /// Obere linke Ecke des Elements im Fenster
    pub element_origin: DVec2,
}

impl PointerSource for ClientPointer {
    fn element_position(&self) -> Option<DVec2> {
        self.client
            .map(|client| client - self.element_origin)
            .filter(|p| p.is_finite())
    }
}

impl PointerSource for DVec2 {
    fn element_position(&self) -> Option<DVec2> {
        Some(*self).filter(|p| p.is_finite())
    }
}

impl PointerSource for Option<DVec2> {
    fn element_position(&self) -> Option<DVec2> {
        self.filter(|p| p.is_finite())
    }
}

/// Exklusive Pointer-Bindung an das Kartenelement für die Dauer einer Drag-Session.
pub trait PointerCapture {
    fn acquire_capture(&mut self);
    fn release_capture(&mut self);
}

/// Einfacher Capture-Zustand für Hosts, die Capture selbst umsetzen (z.B. per JSON-Bridge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureFlag {
    /// Capture aktuell gehalten
    pub captured: bool,
    /// Anzahl der Acquire-Aufrufe seit Erstellung
    pub acquisitions: u32,
    /// Anzahl der Release-Aufrufe seit Erstellung
    pub releases: u32,
}

impl PointerCapture for CaptureFlag {
    fn acquire_capture(&mut self) {
        self.captured = true;
        self.acquisitions += 1;
    }

    fn release_capture(&mut self) {
        self.captured = false;
        self.releases += 1;
    }
}
