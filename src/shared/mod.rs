//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die sowohl `app` als auch `ui` lesen.

pub mod options;

pub use options::{OverviewExtent, ViewportOptions};
pub use options::{PAN_STEP_PERCENT, ZOOM_STEP_PERCENT};
