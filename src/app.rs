//! Application state and core logic

use crate::config::EditorConfig;
use crate::flags::{should_show_warning, FlagStore, JsonFlagStore, MemoryFlagStore};
use crate::preview::PreviewPane;
use crate::state::{
    BannerState, EditorState, Field, FieldKind, FocusSlot, FormSnapshot, FormStore, RowSide,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Main application struct
pub struct App {
    /// Form state, the single source of truth for every field
    pub store: FormStore,
    /// Preview kept current by a store subscription
    pub preview: PreviewPane,
    /// Editor panel focus and buffers
    pub editor: EditorState,
    /// First-run warning banner, while it is on screen
    pub banner: Option<BannerState>,
    /// Pending error messages, oldest first
    pub errors: Vec<String>,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App, consulting the flag store for the warning banner
    pub async fn new(config: &EditorConfig) -> Result<Self> {
        let mut flags = open_flag_store(config);
        let show_banner = match should_show_warning(flags.as_mut()).await {
            Ok(show) => show,
            Err(err) => {
                tracing::warn!("Flag store unavailable, showing warning: {err}");
                true
            }
        };

        let banner_duration = show_banner.then(|| config.banner_duration());
        Ok(Self::with_snapshot(
            FormSnapshot::default(),
            config,
            banner_duration,
        ))
    }

    /// Build an App around a snapshot without touching persisted flags
    pub fn with_snapshot(
        snapshot: FormSnapshot,
        config: &EditorConfig,
        banner_duration: Option<Duration>,
    ) -> Self {
        let mut store = FormStore::new(snapshot);
        let preview = PreviewPane::attach(&mut store);
        let editor = EditorState::new(config.initial_section(), store.snapshot());

        Self {
            store,
            preview,
            editor,
            banner: banner_duration.map(BannerState::new),
            errors: Vec::new(),
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.errors.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }

    /// Advance the banner animation, dropping it once finished
    pub fn update_banner(&mut self, banner_height: u16) {
        if let Some(ref mut banner) = self.banner {
            banner.update(banner_height);
            if banner.is_complete() {
                self.banner = None;
            }
        }
    }

    pub fn focused_slot(&self) -> FocusSlot {
        self.editor.focused(self.store.row_count())
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Error dialog is modal
        if self.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if key.code == KeyCode::Esc {
            if let Some(ref mut banner) = self.banner {
                banner.dismiss();
                self.banner = None;
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let copy = key.modifiers.contains(crate::platform::COPY_MODIFIER);
        let rows = self.store.row_count();

        match key.code {
            KeyCode::Char('q') if ctrl => self.quit = true,
            KeyCode::Char('y') if copy => self.copy_preview_html(),
            KeyCode::Char('e') if copy => self.copy_snapshot_json()?,
            KeyCode::Char('d') if ctrl => self.remove_focused_row(),
            KeyCode::Delete => self.remove_focused_row(),
            KeyCode::PageDown => self.editor.next_section(),
            KeyCode::PageUp => self.editor.prev_section(),
            KeyCode::Tab => self.editor.next_slot(rows),
            KeyCode::BackTab => self.editor.prev_slot(rows),
            // Other control chords are not text input
            KeyCode::Char(_) if ctrl || copy => {}
            _ => match self.focused_slot() {
                FocusSlot::Field(field) => self.handle_field_key(field, key),
                FocusSlot::Row(index, side) => self.handle_row_key(index, side, key),
                FocusSlot::AddRow => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.add_row();
                    }
                }
            },
        }
        Ok(())
    }

    /// Keys on a scalar field
    fn handle_field_key(&mut self, field: Field, key: KeyEvent) {
        match field.kind() {
            FieldKind::Icon => {
                if is_cycle_key(key.code) {
                    let next = self.store.snapshot().resp_icon.next();
                    self.store.set_icon(next);
                }
            }
            FieldKind::Color => {
                if is_cycle_key(key.code) {
                    let next = self.store.snapshot().resp_color.next();
                    self.store.set_color(next);
                }
            }
            FieldKind::Time => {
                if edit_buffer(&mut self.editor.time_input, key.code, false) {
                    self.store.set_field(Field::Time, &self.editor.time_input);
                }
            }
            kind @ (FieldKind::Text | FieldKind::MultilineText) => {
                let mut value = self
                    .store
                    .snapshot()
                    .text(field)
                    .unwrap_or_default()
                    .to_string();
                if edit_buffer(&mut value, key.code, kind.is_multiline()) {
                    self.store.set_field(field, &value);
                }
            }
        }
    }

    /// Keys on one side of a key/value row
    fn handle_row_key(&mut self, index: usize, side: RowSide, key: KeyEvent) {
        let Some(row) = self.store.snapshot().infos.get(index) else {
            return;
        };
        let mut value = row.side(side).to_string();
        if edit_buffer(&mut value, key.code, false) {
            self.store.set_row_field(index, side, &value);
        }
    }

    /// Append an empty row and focus its key
    fn add_row(&mut self) {
        let index = self.store.add_row();
        self.editor.focus_row(index, RowSide::Key);
    }

    fn remove_focused_row(&mut self) {
        if let FocusSlot::Row(index, _) = self.focused_slot() {
            self.store.remove_row(index);
            self.editor.clamp(self.store.row_count());
            self.status_message = Some(format!("Removed row {}", index + 1));
        }
    }

    fn copy_preview_html(&mut self) {
        let html = self.preview.document().to_html();
        match self.copy_to_clipboard(&html) {
            Ok(()) => self.status_message = Some("Preview HTML copied".to_string()),
            Err(err) => self.push_error(format!("Clipboard unavailable: {err}")),
        }
    }

    fn copy_snapshot_json(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(self.store.snapshot())?;
        match self.copy_to_clipboard(&json) {
            Ok(()) => self.status_message = Some("Form JSON copied".to_string()),
            Err(err) => self.push_error(format!("Clipboard unavailable: {err}")),
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Pick the persisted flag store, falling back to memory
fn open_flag_store(config: &EditorConfig) -> Box<dyn FlagStore> {
    match config.flags_path().or_else(JsonFlagStore::default_path) {
        Some(path) => {
            let store = JsonFlagStore::new(path);
            tracing::debug!("Using flag file {}", store.path().display());
            Box::new(store)
        }
        None => {
            tracing::warn!("No data directory, the warning will show every run");
            Box::new(MemoryFlagStore::default())
        }
    }
}

fn is_cycle_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter
    )
}

/// Apply a text-editing key to a buffer. Returns true if it changed.
fn edit_buffer(buffer: &mut String, code: KeyCode, multiline: bool) -> bool {
    match code {
        KeyCode::Char(c) => {
            buffer.push(c);
            true
        }
        KeyCode::Backspace => buffer.pop().is_some(),
        KeyCode::Enter if multiline => {
            buffer.push('\n');
            true
        }
        _ => false,
    }
}
