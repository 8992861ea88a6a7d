use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::screen::PreferenceScreen;
use crate::store::PreferenceStore;

use super::colors;
use super::widgets::{render_color_grid_dialog, render_help_footer, render_preference_list};

const TITLE: &str = "colorpref - Color Preferences";

/// Main render function
pub fn render<S: PreferenceStore>(frame: &mut Frame, screen: &mut PreferenceScreen<S>) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, &screen.mode.to_string(), header_area);
    render_preference_list(frame, screen, body_area);
    render_help_footer(frame, screen.mode, footer_area);

    // Only the topmost dialog is visible
    if let Some((_, dialog)) = screen.dialogs.active() {
        render_color_grid_dialog(frame, dialog, area);
    }
}

/// Render header bar
fn render_header(frame: &mut Frame, mode: &str, area: Rect) {
    let mode_str = format!("[{}]", mode);
    let used = (TITLE.width() + mode_str.width()) as u16;

    let header_text = Line::from(vec![
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(area.width.saturating_sub(used) as usize)),
        Span::styled(mode_str, Style::default().fg(colors::PRIMARY)),
    ]);

    let header = Paragraph::new(header_text).style(Style::default().bg(colors::BAR_BG));

    frame.render_widget(header, area);
}

/// Create a rectangle of a fixed size centered in `area`, clipped to it
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_fixed(20, 10, area), Rect::new(30, 7, 20, 10));
    }

    #[test]
    fn test_centered_fixed_clips_to_area() {
        let area = Rect::new(2, 1, 10, 5);
        assert_eq!(centered_fixed(40, 40, area), area);
    }
}
