//! Use-Case-Funktionen, die den MapState verändern.

pub mod navigation;
pub mod viewport;
