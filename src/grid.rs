//! Grid selection view
//!
//! Lays the palette out in a fixed number of columns, keeps one cached
//! swatch view per cell, and highlights every cell whose color equals the
//! selected color. Taps are only reported; the selection itself belongs to
//! the preference.

use crate::color::Color;
use crate::config::{CellTemplate, DEFAULT_NUM_COLUMNS};
use crate::error::{Error, Result};
use crate::palette::Palette;
use crate::swatch::{render_swatch, DisplayMetrics, SwatchView};

/// Translucent overlay drawn behind the selected cell(s)
pub const HIGHLIGHT: Color = Color(0x6633_B5E5);

/// One cached grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub view: SwatchView,
    pub background: Option<Color>,
}

impl GridCell {
    fn inflate(template: CellTemplate, color: Color) -> Self {
        let view = match template {
            CellTemplate::Swatch => SwatchView::image(),
            CellTemplate::Text => SwatchView::text(color.to_string()),
        };
        Self {
            view,
            background: None,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.background.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct ColorGrid {
    choices: Palette,
    template: CellTemplate,
    selected: Option<Color>,
    num_columns: usize,
    cells: Vec<GridCell>,
    metrics: DisplayMetrics,
    focused: usize,
    rendered: bool,
    inflated: usize,
}

impl ColorGrid {
    pub fn new(metrics: DisplayMetrics) -> Self {
        Self {
            choices: Palette::default(),
            template: CellTemplate::default(),
            selected: None,
            num_columns: DEFAULT_NUM_COLUMNS,
            cells: Vec::new(),
            metrics,
            focused: 0,
            rendered: false,
            inflated: 0,
        }
    }

    /// Set the grid width; only allowed before the first render
    pub fn set_num_columns(&mut self, columns: usize) -> Result<()> {
        if columns == 0 {
            return Err(Error::InvalidColumnCount(columns));
        }
        if self.rendered {
            return Err(Error::GridAlreadyRendered);
        }
        self.num_columns = columns;
        Ok(())
    }

    /// Bind palette data and refresh every cell
    pub fn set_choices(&mut self, choices: Palette, template: CellTemplate) {
        if template != self.template {
            // Cached views were built for the other template
            self.cells.clear();
            self.template = template;
        }
        self.choices = choices;
        self.focused = self.initial_focus();
        self.refresh();
    }

    /// Update the highlighted color and refresh
    pub fn set_selected_color(&mut self, selected: Option<Color>) {
        self.selected = selected;
        self.focused = self.initial_focus();
        self.refresh();
    }

    /// Redraw every cell, reusing cached views
    pub fn refresh(&mut self) {
        self.cells.truncate(self.choices.size());

        for (index, color) in self.choices.iter().enumerate() {
            if index == self.cells.len() {
                self.cells.push(GridCell::inflate(self.template, color));
                self.inflated += 1;
            }

            let cell = &mut self.cells[index];
            if let SwatchView::Text { label, .. } = &mut cell.view {
                *label = color.to_string();
            }
            render_swatch(&mut cell.view, color, &self.metrics);
            cell.background = (Some(color) == self.selected).then_some(HIGHLIGHT);
        }

        self.rendered = true;
    }

    /// Report the color of a tapped cell
    pub fn on_item_click(&self, index: usize) -> Result<Color> {
        self.choices.color_at(index)
    }

    pub fn highlighted_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_highlighted())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn selected_color(&self) -> Option<Color> {
        self.selected
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn template(&self) -> CellTemplate {
        self.template
    }

    pub fn len(&self) -> usize {
        self.choices.size()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.len().div_ceil(self.num_columns)
    }

    /// Number of cell views created so far
    pub fn inflated_cells(&self) -> usize {
        self.inflated
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    // ===================
    // Keyboard focus
    // ===================

    pub fn focused(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.focused)
    }

    pub fn move_left(&mut self) {
        if self.focused % self.num_columns > 0 {
            self.focused -= 1;
        }
    }

    pub fn move_right(&mut self) {
        let next = self.focused + 1;
        if next % self.num_columns != 0 && next < self.len() {
            self.focused = next;
        }
    }

    pub fn move_up(&mut self) {
        if self.focused >= self.num_columns {
            self.focused -= self.num_columns;
        }
    }

    pub fn move_down(&mut self) {
        let next = self.focused + self.num_columns;
        if next < self.len() {
            self.focused = next;
        }
    }

    fn initial_focus(&self) -> usize {
        self.selected
            .and_then(|color| self.choices.index_of(color))
            .unwrap_or(0)
    }
}
