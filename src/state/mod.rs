//! Application state module

mod app_state;
mod forms;
mod header;
mod reveal;
mod scroll;
mod submission;

pub use app_state::*;
pub use forms::*;
pub use reveal::*;
pub use submission::*;
