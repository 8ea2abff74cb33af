//! Preview panel: draws the cached notice document

use crate::app::App;
use crate::preview::{NoticeDocument, StatusLine};
use crate::state::RespIcon;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Status color as the page's stylesheet resolves it: only `success` is green
fn status_color(status: &StatusLine) -> Color {
    if status.class.split_whitespace().any(|class| class == "success") {
        Color::Green
    } else {
        Color::Red
    }
}

fn status_glyph(status: &StatusLine) -> &'static str {
    status
        .icon_class
        .split_whitespace()
        .filter_map(|class| class.strip_prefix("ch-icon-"))
        .find_map(|name| name.parse::<RespIcon>().ok())
        .map(RespIcon::glyph)
        .unwrap_or("•")
}

/// Lay the document out as styled terminal lines
pub fn document_lines(document: &NoticeDocument) -> Vec<Line<'_>> {
    let dim = Style::default().fg(Color::DarkGray);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    let mut crumbs = Vec::new();
    for crumb in &document.breadcrumb {
        crumbs.push(Span::styled(crumb.as_str(), dim));
        crumbs.push(Span::styled(" / ", dim));
    }
    lines.push(Line::from(crumbs));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        document.title.as_str(),
        bold.fg(Color::White),
    )));
    lines.push(Line::from(document.candidate.as_str()));
    lines.push(Line::from(""));

    let mut school = vec![Span::raw(document.school.as_str())];
    if let Some(time) = &document.time {
        school.push(Span::raw("  "));
        school.push(Span::styled(time.as_str(), dim));
    }
    lines.push(Line::from(school));
    lines.push(Line::from(document.notice_text.as_str()));
    lines.push(Line::from(""));

    let color = Style::default().fg(status_color(&document.status));
    lines.push(Line::from(vec![
        Span::styled(status_glyph(&document.status), color),
        Span::raw(" "),
        Span::styled(document.status.message.as_str(), color),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        document.subtitle.as_str(),
        bold.add_modifier(Modifier::UNDERLINED),
    )));
    let label_width = document
        .rows
        .iter()
        .map(|row| Span::raw(row.label.as_str()).width())
        .max()
        .unwrap_or(0);
    for row in &document.rows {
        let padding = label_width.saturating_sub(Span::raw(row.label.as_str()).width());
        lines.push(Line::from(vec![
            Span::styled(row.label.as_str(), dim),
            Span::raw(" ".repeat(padding + 2)),
            Span::raw(row.value.as_str()),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        document.notes_heading.as_str(),
        bold.add_modifier(Modifier::UNDERLINED),
    )));
    lines.extend(document.notes.iter().map(|note| Line::from(note.as_str())));

    lines
}

/// Draw the preview panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let document = app.preview.document();
    let paragraph = Paragraph::new(document_lines(&document))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Preview ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}
