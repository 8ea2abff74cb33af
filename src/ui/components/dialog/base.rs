//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Horizontal padding inside the border, both sides together
const PADDING: u16 = 4;

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub title_color: Color,
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            message: "",
            hint: None,
            max_width: 60,
        }
    }
}

impl DialogConfig<'_> {
    fn wrapped_message(&self, available_width: u16) -> Vec<String> {
        let max_width = self.max_width.min(available_width);
        wrap_text(self.message, max_width.saturating_sub(PADDING + 2).max(1) as usize)
    }
}

/// Width and height the dialog needs inside `area`
pub fn dialog_size(area: Rect, config: &DialogConfig) -> (u16, u16) {
    let lines = config.wrapped_message(area.width);
    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let width = (content_width + PADDING + 2)
        .min(config.max_width)
        .min(area.width);

    // title + blank + message + (blank + hint) + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let height = (2 + lines.len() as u16 + hint_lines + 2).max(5);
    (width, height)
}

/// Render a dialog centered in `area`
pub fn render_centered_dialog(frame: &mut Frame, area: Rect, config: DialogConfig) {
    let (width, height) = dialog_size(area, &config);
    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height: height.min(area.height),
    };
    render_dialog_at(frame, dialog_area, config, 0);
}

/// Render a dialog into `dialog_area`, dropping its first `skip_rows` rows.
///
/// Skipping rows lets a dialog slide off the top of the screen.
pub fn render_dialog_at(frame: &mut Frame, dialog_area: Rect, config: DialogConfig, skip_rows: u16) {
    if dialog_area.width == 0 || dialog_area.height == 0 {
        return;
    }
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(
        config
            .wrapped_message(dialog_area.width)
            .into_iter()
            .map(Line::from),
    );
    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let mut borders = Borders::ALL;
    if skip_rows > 0 {
        borders.remove(Borders::TOP);
    }

    let dialog = Paragraph::new(content)
        .scroll((skip_rows.saturating_sub(1), 0))
        .block(
            Block::default()
                .borders(borders)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
