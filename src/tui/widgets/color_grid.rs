use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::CellTemplate;
use crate::dialog::ColorDialog;
use crate::tui::colors;
use crate::tui::ui::centered_fixed;

use super::SwatchWidget;

/// Width of one grid cell per template
fn cell_width(template: CellTemplate) -> u16 {
    match template {
        CellTemplate::Swatch => 5,
        // "#AARRGGBB" plus padding
        CellTemplate::Text => 11,
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Render the color grid dialog centered in `area`
pub fn render_color_grid_dialog(frame: &mut Frame, dialog: &ColorDialog, area: Rect) {
    let title = dialog
        .binding()
        .map_or_else(|| " Choose a color ".to_string(), |b| format!(" {} ", b.title));

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER_FOCUS))
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    let Some(grid) = dialog.grid() else {
        return;
    };

    let width = cell_width(grid.template());
    // Columns past the last color would stay blank
    let columns = grid.num_columns().min(grid.len().max(1));
    let rows = grid.rows().max(1);
    let dialog_area = centered_fixed(
        clamp_u16(columns.saturating_mul(width as usize).saturating_add(2)).max(24),
        clamp_u16(rows.saturating_add(2)),
        area,
    );

    // Clear background
    frame.render_widget(Clear, dialog_area);
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    if grid.is_empty() {
        let empty = Paragraph::new("No colors").style(Style::default().fg(colors::MUTED));
        frame.render_widget(empty, inner);
        return;
    }

    let focused = grid.focused();

    for (index, cell) in grid.cells().iter().enumerate() {
        let row = index / grid.num_columns();
        if row >= inner.height as usize {
            break;
        }
        let offset = (index % grid.num_columns()).saturating_mul(width as usize);
        if offset >= inner.width as usize {
            continue;
        }

        let offset = offset as u16;
        let cell_area = Rect {
            x: inner.x + offset,
            y: inner.y + row as u16,
            width: width.min(inner.width - offset),
            height: 1,
        };

        let widget = SwatchWidget::new(&cell.view)
            .background(cell.background)
            .focused(focused == Some(index));
        frame.render_widget(widget, cell_area);
    }
}
