//! Color selection dialog and the dialog manager that hosts it
//!
//! The dialog never holds the preference itself. Binding copies what the
//! grid needs (palette, layout, current value) and remembers the preference
//! key; a tap produces a [`Commit`] that the host routes back to the
//! preference with that key.

use crate::color::Color;
use crate::config::{CellTemplate, DEFAULT_NUM_COLUMNS};
use crate::error::Result;
use crate::grid::ColorGrid;
use crate::palette::Palette;
use crate::preference::ColorPreference;
use crate::swatch::DisplayMetrics;

/// What the dialog knows about the preference it is bound to
#[derive(Debug, Clone, PartialEq)]
pub struct ControlBinding {
    pub key: String,
    pub title: String,
    pub palette: Palette,
    pub num_columns: usize,
    pub template: CellTemplate,
    pub value: Option<Color>,
}

/// A confirmed selection to hand to the preference named by `key`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub key: String,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// No preference bound
    Unbound,
    /// Preference bound, no surface yet
    BoundUnattached,
    /// Surface exists and the grid is bound
    Attached,
    /// Closed; terminal
    Dismissed,
}

impl std::fmt::Display for DialogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialogState::Unbound => write!(f, "Unbound"),
            DialogState::BoundUnattached => write!(f, "BoundUnattached"),
            DialogState::Attached => write!(f, "Attached"),
            DialogState::Dismissed => write!(f, "Dismissed"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ColorDialog {
    binding: Option<ControlBinding>,
    added: bool,
    grid: Option<ColorGrid>,
    dismissed: bool,
    surfaces_created: usize,
}

impl ColorDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DialogState {
        if self.dismissed {
            DialogState::Dismissed
        } else if self.binding.is_none() {
            DialogState::Unbound
        } else if self.grid.is_some() {
            DialogState::Attached
        } else {
            DialogState::BoundUnattached
        }
    }

    /// Bind (or rebind) the dialog to a preference
    pub fn set_control(&mut self, control: &ColorPreference) {
        if self.dismissed {
            return;
        }
        self.binding = Some(control.binding());
        self.try_bind_lists();
    }

    /// Host attached the dialog
    pub fn on_attach(&mut self) {
        self.added = true;
        self.try_bind_lists();
    }

    /// Host tore the dialog down; a recreated instance starts unbound
    pub fn on_detach(&mut self) {
        self.added = false;
        self.grid = None;
        self.binding = None;
    }

    /// Build the grid surface once; later calls only re-sync
    pub fn create_surface(&mut self, metrics: DisplayMetrics) -> Result<()> {
        if self.dismissed {
            return Ok(());
        }

        if self.grid.is_none() {
            let columns = self
                .binding
                .as_ref()
                .map_or(DEFAULT_NUM_COLUMNS, |b| b.num_columns);

            let mut grid = ColorGrid::new(metrics);
            grid.set_num_columns(columns)?;
            self.grid = Some(grid);
            self.surfaces_created += 1;
        }

        self.try_bind_lists();
        Ok(())
    }

    fn try_bind_lists(&mut self) {
        let Some(binding) = &self.binding else {
            return;
        };
        if !self.added {
            return;
        }

        if let Some(grid) = &mut self.grid {
            // A surface built while unbound still has the default width
            if !grid.is_rendered() && grid.num_columns() != binding.num_columns {
                if let Err(e) = grid.set_num_columns(binding.num_columns) {
                    tracing::warn!(key = %binding.key, error = %e, "keeping grid column count");
                }
            }
            grid.set_choices(binding.palette.clone(), binding.template);
            grid.set_selected_color(binding.value);
        }
    }

    /// Handle a tap on grid cell `index`
    ///
    /// Returns the commit for the bound preference and dismisses the dialog.
    /// Without a binding or a surface the tap is ignored.
    pub fn on_item_click(&mut self, index: usize) -> Result<Option<Commit>> {
        if self.dismissed {
            return Ok(None);
        }
        let (Some(binding), Some(grid)) = (&self.binding, &self.grid) else {
            tracing::debug!(index, "tap on unbound color dialog ignored");
            return Ok(None);
        };

        let color = grid.on_item_click(index)?;
        let commit = Commit {
            key: binding.key.clone(),
            color,
        };
        self.dismiss();
        Ok(Some(commit))
    }

    /// Tap the cell that currently has keyboard focus
    pub fn select_focused(&mut self) -> Result<Option<Commit>> {
        match self.grid.as_ref().and_then(ColorGrid::focused) {
            Some(index) => self.on_item_click(index),
            None => Ok(None),
        }
    }

    /// Close without committing anything
    pub fn cancel(&mut self) {
        self.dismiss();
    }

    fn dismiss(&mut self) {
        self.dismissed = true;
        self.grid = None;
    }

    pub fn binding(&self) -> Option<&ControlBinding> {
        self.binding.as_ref()
    }

    pub fn grid(&self) -> Option<&ColorGrid> {
        self.grid.as_ref()
    }

    pub fn grid_mut(&mut self) -> Option<&mut ColorGrid> {
        self.grid.as_mut()
    }

    /// How many grid surfaces this dialog has built
    pub fn surfaces_created(&self) -> usize {
        self.surfaces_created
    }
}

/// Host-side registry of shown dialogs, looked up by tag
#[derive(Debug, Clone)]
pub struct DialogManager {
    dialogs: Vec<(String, ColorDialog)>,
    metrics: DisplayMetrics,
    attached: bool,
}

impl DialogManager {
    pub fn new(metrics: DisplayMetrics) -> Self {
        Self {
            dialogs: Vec::new(),
            metrics,
            attached: true,
        }
    }

    /// Register and present a dialog under `tag`
    pub fn show(&mut self, tag: impl Into<String>, mut dialog: ColorDialog) -> Result<&mut ColorDialog> {
        let tag = tag.into();
        self.dismiss(&tag);

        if self.attached {
            dialog.on_attach();
            dialog.create_surface(self.metrics)?;
        }

        tracing::info!(tag = %tag, state = %dialog.state(), "showing color dialog");
        let index = self.dialogs.len();
        self.dialogs.push((tag, dialog));
        Ok(&mut self.dialogs[index].1)
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&ColorDialog> {
        self.dialogs
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, dialog)| dialog)
    }

    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut ColorDialog> {
        self.dialogs
            .iter_mut()
            .find(|(t, _)| t == tag)
            .map(|(_, dialog)| dialog)
    }

    /// Topmost (most recently shown) dialog
    pub fn active(&self) -> Option<(&str, &ColorDialog)> {
        self.dialogs
            .last()
            .map(|(tag, dialog)| (tag.as_str(), dialog))
    }

    pub fn active_mut(&mut self) -> Option<(&str, &mut ColorDialog)> {
        self.dialogs
            .last_mut()
            .map(|(tag, dialog)| (tag.as_str(), dialog))
    }

    /// Remove and destroy the dialog registered under `tag`
    pub fn dismiss(&mut self, tag: &str) -> Option<ColorDialog> {
        let position = self.dialogs.iter().position(|(t, _)| t == tag)?;
        let (_, mut dialog) = self.dialogs.remove(position);
        dialog.cancel();
        tracing::info!(tag, "dismissed color dialog");
        Some(dialog)
    }

    /// Host is going away; every dialog loses its surface and binding
    pub fn detach_all(&mut self) {
        self.attached = false;
        for (_, dialog) in &mut self.dialogs {
            dialog.on_detach();
        }
    }

    /// Host is back; every surviving dialog is attached and rebuilt
    pub fn attach_all(&mut self) -> Result<()> {
        self.attached = true;
        for (tag, dialog) in &mut self.dialogs {
            dialog.on_attach();
            dialog.create_surface(self.metrics)?;
            tracing::debug!(tag = %tag, state = %dialog.state(), "reattached color dialog");
        }
        Ok(())
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }
}

impl Default for DialogManager {
    fn default() -> Self {
        Self::new(DisplayMetrics::default())
    }
}
