use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::color::Color;
use crate::swatch::SwatchView;
use crate::tui::colors;

/// Draws a [`SwatchView`] into one line of cells
///
/// An image swatch is drawn as `(●)`: the dot in the fill color and the
/// parentheses in the stroke color. A zero-width stroke leaves the
/// parentheses out. Text swatches draw their label in the text color.
pub struct SwatchWidget<'a> {
    view: &'a SwatchView,
    background: Option<Color>,
    focused: bool,
}

impl<'a> SwatchWidget<'a> {
    pub fn new(view: &'a SwatchView) -> Self {
        Self {
            view,
            background: None,
            focused: false,
        }
    }

    pub fn background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn base_style(&self) -> Style {
        let mut style = Style::default();
        if let Some(bg) = self.background {
            style = style.bg(bg.to_terminal());
        }
        if self.focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl Widget for SwatchWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let base = self.base_style();
        buf.set_style(area, base);

        // Vertically centered single line
        let y = area.y + area.height / 2;

        match self.view {
            SwatchView::Image { drawable } => {
                let Some(circle) = drawable else {
                    let x = area.x + area.width.saturating_sub(1) / 2;
                    buf.set_string(x, y, "·", base.fg(colors::EMPTY_SWATCH));
                    return;
                };

                let fill = base.fg(circle.fill.to_terminal());
                let stroke = base.fg(circle.stroke.to_terminal());

                if area.width >= 3 {
                    let x = area.x + (area.width - 3) / 2;
                    if circle.stroke_width > 0 {
                        buf.set_string(x, y, "(", stroke);
                        buf.set_string(x + 2, y, ")", stroke);
                    }
                    buf.set_string(x + 1, y, "●", fill);
                } else {
                    buf.set_string(area.x, y, "●", fill);
                }
            }
            SwatchView::Text { label, text_color } => {
                let fg = text_color.map_or(colors::EMPTY_SWATCH, Color::to_terminal);
                buf.set_stringn(area.x, y, label, area.width as usize, base.fg(fg));
            }
        }
    }
}
