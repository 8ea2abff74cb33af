//! Form rendering module
//!
//! - `field_renderer`: text field and selector boxes
//! - `editor_panel`: the accordion of form sections

mod editor_panel;
mod field_renderer;

pub use editor_panel::draw_editor;
