//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::{dialog_size, render_dialog_at, render_error_dialog, DialogConfig};
