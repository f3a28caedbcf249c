//! Core-Domänentypen: Envelope, Pixel-Rechteck, Geo↔Pixel-Transformation.

pub mod envelope;
pub mod error;
pub mod transform;

pub use envelope::{ENVELOPE_DELIMITER, Envelope};
pub use error::ViewportError;
pub use transform::{PixelRect, ViewportTransform};
