//! Kartenfenster-Kern für Browser-Hosts.
//! Geo/Pixel-Transformation, Pointer-Interaktion (Zoom-Box, Zoom-Out, Pan)
//! und Übersichtskarte als Library, unabhängig von Rendering und DOM.

pub mod app;
pub mod bridge;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{MapCommand, MapController, MapIntent, MapState, PanDirection, ViewState};
pub use bridge::{HostEvent, HostUpdate, MapSession};
pub use core::{Envelope, PixelRect, ViewportError, ViewportTransform};
pub use shared::{OverviewExtent, ViewportOptions};
pub use ui::{
    CaptureFlag, ClientPointer, DragFeedback, ElementPointer, InteractionMode,
    OverviewSynchronizer, PointerCapture, PointerInteractionController, PointerSource,
    ViewportContext,
};
