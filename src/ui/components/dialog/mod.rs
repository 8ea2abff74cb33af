//! Dialog components for TUI

mod base;
mod error_dialog;

pub use base::{dialog_size, render_dialog_at, DialogConfig};
pub use error_dialog::render_error_dialog;
