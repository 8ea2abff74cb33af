//! Field rendering utilities for the editor panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// What a text field box shows
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub is_active: bool,
    pub is_multiline: bool,
    /// Validation message drawn on the bottom border
    pub hint: Option<&'a str>,
}

fn border_style(is_active: bool, has_hint: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_hint {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block<'a>(label: &str, is_active: bool, hint: Option<&'a str>) -> Block<'a> {
    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, hint.is_some()));
    if let Some(hint) = hint {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {hint} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

/// Draw a bordered text field with a cursor while active
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    let value_style = if view.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = if view.value.is_empty() && !view.is_active {
        vec![Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if view.is_multiline {
        // split keeps the empty line after a trailing newline
        view.value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(view.value.to_string(), value_style))]
    };

    if view.is_active {
        match lines.last_mut() {
            Some(last) => last.spans.push(cursor),
            None => lines.push(Line::from(cursor)),
        }
    }

    // Keep the cursor line in view for long multiline values
    let inner_height = area.height.saturating_sub(2);
    let scroll = if view.is_multiline {
        (lines.len() as u16).saturating_sub(inner_height)
    } else {
        0
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(field_block(view.label, view.is_active, view.hint));
    frame.render_widget(paragraph, area);
}

/// Draw a one-of-many selector as a row of radio options.
///
/// `options` pairs each option's text with whether it is selected.
pub fn draw_selector(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[(String, bool)],
    is_active: bool,
) {
    let mut spans = Vec::new();
    for (text, selected) in options {
        let (marker, style) = if *selected {
            let style = if is_active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ("(•) ", style)
        } else {
            ("( ) ", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!("{marker}{text}"), style));
        spans.push(Span::raw("   "));
    }
    spans.pop();

    let paragraph = Paragraph::new(Line::from(spans)).block(field_block(label, is_active, None));
    frame.render_widget(paragraph, area);
}
