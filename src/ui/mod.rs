//! Interaktions-Layer: Toolbar-Modi, Pointer-Zustandsautomat, Übersichtskarte.
//!
//! Der Layer erzeugt ausschließlich `MapIntent`s; die Envelope selbst
//! ändert nur der Map-Controller im `app`-Layer.

pub mod input;
pub mod overview;
pub mod toolbar;

pub use input::{
    CaptureFlag, ClientPointer, DragFeedback, ElementPointer, InteractionSession,
    PointerCapture, PointerInteractionController, PointerSource, ViewportContext,
};
pub use overview::OverviewSynchronizer;
pub use toolbar::InteractionMode;
