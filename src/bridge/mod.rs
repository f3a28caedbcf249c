//! Host-Bridge: serialisierbare Events/Updates und eine Session, die
//! Pointer-Controller, Übersicht und Map-Controller für einen Host bündelt.
//!
//! Gedacht für Hosts ohne direkten Rust-Zugriff (Browser über JSON).

mod dto;
mod session;

pub use dto::{HostEvent, HostUpdate};
pub use session::MapSession;
