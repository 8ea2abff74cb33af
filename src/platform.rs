//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for copy shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Copy preview HTML shortcut display
#[cfg(target_os = "macos")]
pub const COPY_HTML_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_HTML_SHORTCUT: &str = "Ctrl+Y";

/// Copy snapshot JSON shortcut display
#[cfg(target_os = "macos")]
pub const COPY_JSON_SHORTCUT: &str = "Cmd+E";

#[cfg(not(target_os = "macos"))]
pub const COPY_JSON_SHORTCUT: &str = "Ctrl+E";

/// Remove row shortcut display (Delete works everywhere)
pub const REMOVE_ROW_SHORTCUT: &str = "Ctrl+D";
