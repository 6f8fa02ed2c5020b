//! Application state module

mod app_state;
mod forms;
mod listing;
pub mod router;

pub use app_state::*;
pub use forms::*;
pub use listing::*;
