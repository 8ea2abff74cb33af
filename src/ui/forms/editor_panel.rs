//! Editor panel: one collapsible group per form section

use super::field_renderer::{draw_field, draw_selector, FieldView};
use crate::app::App;
use crate::state::{
    Field, FieldKind, FocusSlot, FormSnapshot, RespColor, RespIcon, RowSide, Section,
    ValidationHint,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows of one key/value pair (bordered boxes)
const ROW_HEIGHT: u16 = 3;

/// Draw the editor panel with the open section expanded
pub fn draw_editor(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Editor ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let open = app.editor.section;
    let constraints: Vec<Constraint> = Section::ALL
        .iter()
        .flat_map(|section| {
            if *section == open {
                vec![Constraint::Length(1), Constraint::Min(0)]
            } else {
                vec![Constraint::Length(1)]
            }
        })
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut chunk = 0;
    for section in Section::ALL {
        draw_section_header(frame, chunks[chunk], app, section);
        chunk += 1;
        if section == open {
            let body = chunks[chunk];
            chunk += 1;
            match section {
                Section::Infos => draw_rows(frame, body, app),
                _ => draw_fields(frame, body, app, section.fields()),
            }
        }
    }
}

fn draw_section_header(frame: &mut Frame, area: Rect, app: &App, section: Section) {
    let is_open = section == app.editor.section;
    let (arrow, style) = if is_open {
        (
            "▾",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("▸", Style::default().fg(Color::DarkGray))
    };

    let mut spans = vec![Span::styled(format!("{arrow} {}", section.title()), style)];

    // Flag collapsed rows that still need attention
    if section == Section::Infos {
        let invalid = app
            .store
            .snapshot()
            .infos
            .iter()
            .filter(|row| !row.is_valid())
            .count();
        if invalid > 0 {
            spans.push(Span::styled(
                format!("  ({invalid} incomplete)"),
                Style::default().fg(Color::Red),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn field_height(field: Field) -> Constraint {
    match field {
        Field::Tips => Constraint::Min(6),
        Field::Message => Constraint::Length(5),
        _ => Constraint::Length(3),
    }
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App, fields: &[Field]) {
    let mut constraints: Vec<Constraint> = fields.iter().copied().map(field_height).collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let snapshot = app.store.snapshot();
    let focused = app.focused_slot();

    for (field, chunk) in fields.iter().copied().zip(chunks.iter()) {
        let is_active = focused == FocusSlot::Field(field);
        match field.kind() {
            FieldKind::Icon => {
                let options = icon_options(snapshot);
                draw_selector(frame, *chunk, field.label(), &options, is_active);
            }
            FieldKind::Color => {
                let options = color_options(snapshot);
                draw_selector(frame, *chunk, field.label(), &options, is_active);
            }
            FieldKind::Time => {
                let view = FieldView {
                    label: field.label(),
                    value: &app.editor.time_input,
                    is_active,
                    is_multiline: false,
                    hint: app.editor.time_hint(),
                };
                draw_field(frame, *chunk, &view);
            }
            kind => {
                let view = FieldView {
                    label: field.label(),
                    value: snapshot.text(field).unwrap_or_default(),
                    is_active,
                    is_multiline: kind.is_multiline(),
                    hint: None,
                };
                draw_field(frame, *chunk, &view);
            }
        }
    }
}

fn icon_options(snapshot: &FormSnapshot) -> Vec<(String, bool)> {
    RespIcon::ALL
        .iter()
        .map(|icon| {
            (
                format!("{} {}", icon.glyph(), icon.as_str()),
                *icon == snapshot.resp_icon,
            )
        })
        .collect()
}

fn color_options(snapshot: &FormSnapshot) -> Vec<(String, bool)> {
    RespColor::ALL
        .iter()
        .map(|color| (color.label().to_string(), *color == snapshot.resp_color))
        .collect()
}

/// First row to draw so the focused row stays visible
fn first_visible_row(focused_row: Option<usize>, row_count: usize, visible: usize) -> usize {
    let end = match focused_row {
        Some(index) => index + 1,
        None => row_count,
    };
    end.min(row_count).saturating_sub(visible.max(1))
}

fn draw_rows(frame: &mut Frame, area: Rect, app: &App) {
    let rows = &app.store.snapshot().infos;
    let focused = app.focused_slot();
    let focused_row = match focused {
        FocusSlot::Row(index, _) => Some(index),
        _ => None,
    };

    let visible = (area.height.saturating_sub(BUTTON_HEIGHT) / ROW_HEIGHT) as usize;
    let first = first_visible_row(focused_row, rows.len(), visible);
    let shown = rows.len().saturating_sub(first).min(visible);

    let mut constraints = vec![Constraint::Length(ROW_HEIGHT); shown];
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (offset, chunk) in chunks.iter().take(shown).enumerate() {
        let index = first + offset;
        let row = &rows[index];
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(*chunk);

        let key_label = format!("Key {}", index + 1);
        let key = FieldView {
            label: &key_label,
            value: &row.key,
            is_active: focused == FocusSlot::Row(index, RowSide::Key),
            is_multiline: false,
            hint: row.side_hint(RowSide::Key).map(ValidationHint::message),
        };
        let value = FieldView {
            label: "Value",
            value: &row.value,
            is_active: focused == FocusSlot::Row(index, RowSide::Value),
            is_multiline: false,
            hint: row.side_hint(RowSide::Value).map(ValidationHint::message),
        };
        draw_field(frame, halves[0], &key);
        draw_field(frame, halves[1], &value);
    }

    let label = if first > 0 || first + shown < rows.len() {
        format!(
            "+ Add row   (showing {}-{} of {})",
            first + 1,
            first + shown,
            rows.len()
        )
    } else {
        "+ Add row".to_string()
    };
    render_button(frame, chunks[shown], &label, focused == FocusSlot::AddRow);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::state::InfoRow;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn app_with(snapshot: FormSnapshot, section: Section) -> App {
        let mut app = App::with_snapshot(snapshot, &EditorConfig::default(), None);
        app.editor.open(section);
        app
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_editor(frame, area, app);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    mod visible_rows {
        use super::*;

        #[test]
        fn test_starts_at_top_when_everything_fits() {
            assert_eq!(first_visible_row(Some(2), 5, 10), 0);
        }

        #[test]
        fn test_scrolls_to_focused_row() {
            assert_eq!(first_visible_row(Some(8), 9, 3), 6);
            assert_eq!(first_visible_row(Some(0), 9, 3), 0);
        }

        #[test]
        fn test_add_row_focus_shows_last_rows() {
            assert_eq!(first_visible_row(None, 9, 4), 5);
        }

        #[test]
        fn test_zero_rows() {
            assert_eq!(first_visible_row(None, 0, 4), 0);
        }
    }

    mod drawing {
        use super::*;

        #[test]
        fn test_collapsed_sections_show_titles() {
            let app = app_with(FormSnapshot::with_time(None), Section::Headers);
            let text = render(&app, 60, 30);
            for section in Section::ALL {
                assert!(text.contains(section.title()), "missing {}", section.title());
            }
            assert!(text.contains("▾ Section Headers"));
            assert!(text.contains("▸ Voluntary Info"));
        }

        #[test]
        fn test_response_section_shows_selectors() {
            let app = app_with(FormSnapshot::with_time(None), Section::Response);
            let text = render(&app, 70, 30);
            assert!(text.contains("(•) Green"));
            assert!(text.contains("( ) Red"));
        }

        #[test]
        fn test_invalid_row_shows_hint() {
            let mut snapshot = FormSnapshot::with_time(None);
            snapshot.infos = vec![InfoRow::new("Level", ""), InfoRow::default()];
            let app = app_with(snapshot, Section::Infos);
            let text = render(&app, 80, 30);
            assert!(text.contains("Value is required"));
            assert!(text.contains("Key is required"));
            assert!(text.contains("(2 incomplete)"));
            assert!(text.contains("+ Add row"));
        }

        #[test]
        fn test_empty_row_flags_both_sides() {
            let mut snapshot = FormSnapshot::with_time(None);
            snapshot.infos = vec![InfoRow::default()];
            let app = app_with(snapshot, Section::Infos);
            let text = render(&app, 80, 30);
            assert!(text.contains("Key is required"));
            assert!(text.contains("Value is required"));
            assert!(text.contains("(1 incomplete)"));
        }

        #[test]
        fn test_rows_scroll_with_focus() {
            let app = {
                let mut app = app_with(FormSnapshot::with_time(None), Section::Infos);
                app.editor.focus_row(8, RowSide::Key);
                app
            };
            let text = render(&app, 80, 20);
            assert!(text.contains("Key 9"));
            assert!(!text.contains("Key 1 "));
            assert!(text.contains("of 9)"));
        }

        #[test]
        fn test_invalid_time_hint() {
            let mut app = app_with(FormSnapshot::with_time(None), Section::Notice);
            app.editor.time_input = "tomorrow".to_string();
            let text = render(&app, 80, 30);
            assert!(text.contains("Invalid time"));
        }

        #[test]
        fn test_tiny_area_does_not_panic() {
            let app = app_with(FormSnapshot::with_time(None), Section::Infos);
            render(&app, 10, 4);
            let app = app_with(FormSnapshot::with_time(None), Section::Tips);
            render(&app, 10, 4);
        }
    }
}
