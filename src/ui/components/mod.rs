//! Reusable UI components

mod badge;
mod button;
mod dialog;

pub use badge::tag_badges;
pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_error_dialog;
