//! UI module for rendering the TUI

mod banner;
mod components;
mod forms;
mod layout;
mod preview_panel;

use crate::app::App;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (editor_area, preview_area, status_area) = layout::create_layout(area);

    forms::draw_editor(frame, editor_area, app);
    preview_panel::draw(frame, preview_area, app);
    layout::draw_status_bar(frame, status_area, app);

    if let Some(banner) = &app.banner {
        banner::draw(frame, banner_area(area), banner);
    }

    // Error dialog is modal, drawn last
    if let Some(error) = app.current_error() {
        components::render_error_dialog(frame, error, app.errors.len());
    }
}

/// Rows the warning banner slides through on a screen of `area`
pub fn banner_travel(area: Rect) -> u16 {
    banner::travel_height(banner_area(area))
}

/// Banner overlays everything above the status bar
fn banner_area(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(1),
        ..area
    }
}
