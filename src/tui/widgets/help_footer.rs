use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::screen::Mode;
use crate::tui::colors;

const NORMAL_HINTS: &[(&str, &str)] = &[
    ("j/k", "Move"),
    ("Enter", "Choose color"),
    ("r", "Recreate"),
    ("q", "Quit"),
];

const DIALOG_HINTS: &[(&str, &str)] = &[("h/j/k/l", "Move"), ("Enter", "Pick"), ("Esc", "Cancel")];

fn hints(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Normal => NORMAL_HINTS,
        Mode::Dialog => DIALOG_HINTS,
    }
}

/// Key hints for the current mode, one bold key per hint
pub fn render_help_footer(frame: &mut Frame, mode: Mode, area: Rect) {
    let key_style = Style::default().add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(colors::MUTED);

    let spans: Vec<Span> = hints(mode)
        .iter()
        .enumerate()
        .flat_map(|(i, &(key, desc))| {
            let separator = if i == 0 { "" } else { "  " };
            [
                Span::raw(separator),
                Span::styled(key, key_style),
                Span::styled(format!(" {}", desc), desc_style),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::BAR_BG));
    frame.render_widget(footer, area);
}
