use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::screen::PreferenceScreen;
use crate::store::PreferenceStore;
use crate::tui::colors;

use super::SwatchWidget;

/// Lines per preference row
const ROW_HEIGHT: u16 = 2;

/// Columns reserved on the right of each row for the inline preview
const PREVIEW_WIDTH: u16 = 12;

/// Render the preference rows with their inline previews
pub fn render_preference_list<S: PreferenceStore>(
    frame: &mut Frame,
    screen: &mut PreferenceScreen<S>,
    area: Rect,
) {
    let block = Block::default().title(" Settings ").borders(Borders::ALL);
    let inner = block.inner(area);

    let items: Vec<ListItem> = screen
        .preferences
        .iter()
        .map(|pref| {
            let title_line = Line::from(Span::styled(
                pref.title().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));

            let value = pref
                .value()
                .map_or_else(|| "not set".to_string(), |c| c.to_string());
            let summary = match pref.summary() {
                Some(summary) => format!("  {} ({})", summary, value),
                None => format!("  {}", value),
            };
            let summary_line = Line::from(Span::styled(summary, Style::default().fg(colors::MUTED)));

            ListItem::new(vec![title_line, summary_line])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors::SELECTION_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, &mut screen.list_state);

    // Previews sit on the first line of each visible row, right aligned
    let offset = screen.list_state.offset();
    let visible_rows = (inner.height / ROW_HEIGHT) as usize;
    let preview_width = PREVIEW_WIDTH.min(inner.width);

    for (row, preview) in screen.previews.iter().skip(offset).take(visible_rows).enumerate() {
        let preview_area = Rect {
            x: inner.right().saturating_sub(preview_width),
            y: inner.y + row as u16 * ROW_HEIGHT,
            width: preview_width,
            height: 1,
        };
        frame.render_widget(SwatchWidget::new(&preview.view), preview_area);
    }
}
