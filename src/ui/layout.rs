//! Layout components (panels, status bar)

use crate::app::App;
use crate::platform::{COPY_HTML_SHORTCUT, COPY_JSON_SHORTCUT, REMOVE_ROW_SHORTCUT};
use crate::state::{FieldKind, FocusSlot};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into editor, preview, and status bar areas
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Panels
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    (panels[0], panels[1], rows[1])
}

/// Keyboard hints for whatever holds focus
fn focus_hints(slot: FocusSlot) -> String {
    let common = "Tab:next  PgUp/PgDn:section";
    match slot {
        FocusSlot::Field(field) => match field.kind() {
            FieldKind::Icon | FieldKind::Color => format!("←/→/Space:change  {common}"),
            FieldKind::MultilineText => format!("Enter:newline  {common}"),
            FieldKind::Text | FieldKind::Time => common.to_string(),
        },
        FocusSlot::Row(..) => format!("{REMOVE_ROW_SHORTCUT}/Del:remove row  {common}"),
        FocusSlot::AddRow => format!("Enter:add row  {common}"),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            focus_hints(app.focused_slot()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("  {COPY_HTML_SHORTCUT}:copy HTML  {COPY_JSON_SHORTCUT}:copy JSON"),
            Style::default().fg(Color::Gray),
        ),
    ];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C/^Q:quit ";
    let width = quit_hint.len() as u16;
    if area.width > width {
        let quit_area = Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height: 1,
        };
        let quit_widget =
            Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(quit_widget, quit_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Field, RowSide};

    #[test]
    fn test_layout_splits_width() {
        let (editor, preview, status) = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(editor.width, 40);
        assert_eq!(preview.width, 60);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 29);
    }

    #[test]
    fn test_hints_depend_on_focus() {
        assert!(focus_hints(FocusSlot::Field(Field::RespIcon)).contains("change"));
        assert!(focus_hints(FocusSlot::Field(Field::Tips)).contains("newline"));
        assert!(focus_hints(FocusSlot::Row(0, RowSide::Key)).contains("remove row"));
        assert!(focus_hints(FocusSlot::AddRow).contains("add row"));
    }
}
