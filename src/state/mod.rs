//! Application state module

mod banner;
mod editor;
mod forms;

pub use banner::*;
pub use editor::*;
pub use forms::*;
