//! Map-State: zentrale Datenhaltung des Host-Controllers.

mod app_state;
mod tool;
mod view;

pub use app_state::MapState;
pub use tool::ToolState;
pub use view::ViewState;
