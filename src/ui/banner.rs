//! First-run warning banner, sliding off the top of the screen

use super::components::{dialog_size, render_dialog_at, DialogConfig};
use crate::state::BannerState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    Frame,
};

/// Gap between the top of the screen and the resting banner
const TOP_MARGIN: u16 = 1;

fn banner_config() -> DialogConfig<'static> {
    DialogConfig {
        title: BannerState::TITLE,
        title_color: Color::Yellow,
        border_color: Color::Yellow,
        message: BannerState::MESSAGE,
        hint: Some(vec![Span::styled(
            "Esc to dismiss",
            Style::default().fg(Color::DarkGray),
        )]),
        max_width: 70,
    }
}

/// Rows the banner must travel to leave the screen
pub fn travel_height(area: Rect) -> u16 {
    let (_, height) = dialog_size(area, &banner_config());
    height + TOP_MARGIN
}

/// Draw the banner at its current slide offset
pub fn draw(frame: &mut Frame, area: Rect, banner: &BannerState) {
    let config = banner_config();
    let (width, height) = dialog_size(area, &config);

    // Rows already slid off the top
    let top = i32::from(area.y + TOP_MARGIN) - banner.scroll_offset.round() as i32;
    let hidden = (i32::from(area.y) - top).max(0) as u16;
    if hidden >= height {
        return;
    }

    let banner_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: top.max(i32::from(area.y)) as u16,
        width,
        height: (height - hidden).min(area.height),
    };
    render_dialog_at(frame, banner_area, config, hidden);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn screen(banner: &BannerState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area, banner);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_resting_banner_shows_warning() {
        let banner = BannerState::new(Duration::from_secs(3));
        let text = screen(&banner);
        assert!(text.contains(BannerState::TITLE));
        assert!(text.contains("entertainment only"));
    }

    #[test]
    fn test_banner_fully_slid_out_draws_nothing() {
        let area = Rect::new(0, 0, 80, 20);
        let mut banner = BannerState::new(Duration::ZERO);
        banner.scroll_offset = f32::from(travel_height(area));
        let text = screen(&banner);
        assert!(!text.contains(BannerState::TITLE));
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_partially_slid_banner_hides_title() {
        let mut banner = BannerState::new(Duration::ZERO);
        banner.scroll_offset = 3.0;
        let text = screen(&banner);
        assert!(!text.contains(BannerState::TITLE));
        assert!(text.contains("Esc to dismiss"));
    }
}
