//! The color preference: a settings row holding one color out of a palette

use std::fmt;

use crate::color::Color;
use crate::config::{CellTemplate, PreferenceConfig, DEFAULT_NUM_COLUMNS};
use crate::dialog::{ColorDialog, ControlBinding, DialogManager};
use crate::error::{Error, Result};
use crate::palette::Palette;
use crate::store::PreferenceStore;
use crate::swatch::{render_swatch, DisplayMetrics, SwatchView};

/// Called with the proposed color before a commit; `false` vetoes it
pub type ChangeListener = Box<dyn FnMut(Color) -> bool>;

pub struct ColorPreference {
    key: String,
    title: String,
    summary: Option<String>,
    palette: Palette,
    template: CellTemplate,
    num_columns: usize,
    default_value: Option<Color>,
    persistent: bool,
    value: Option<Color>,
    on_change: Option<ChangeListener>,
    revision: u64,
}

impl ColorPreference {
    /// Resolve a preference from its declarative attributes
    ///
    /// Any malformed color literal or a zero column count fails the whole
    /// preference.
    pub fn from_config(config: &PreferenceConfig) -> Result<Self> {
        let palette = match &config.choices {
            Some(choices) => Palette::from_literals(choices.as_slice())?,
            None => Palette::builtin(),
        };

        let num_columns = config.num_columns.unwrap_or(DEFAULT_NUM_COLUMNS);
        if num_columns == 0 {
            return Err(Error::InvalidColumnCount(num_columns));
        }

        let default_value = config
            .default_value
            .as_deref()
            .map(Color::parse)
            .transpose()?;

        Ok(Self {
            key: config.key.clone(),
            title: config.title.clone().unwrap_or_else(|| config.key.clone()),
            summary: config.summary.clone(),
            palette,
            template: config.item_layout.unwrap_or_default(),
            num_columns,
            default_value,
            persistent: config.persistent.unwrap_or(true),
            value: None,
            on_change: None,
            revision: 0,
        })
    }

    /// Register the veto hook, replacing any previous one
    pub fn set_on_change<F>(&mut self, listener: F)
    where
        F: FnMut(Color) -> bool + 'static,
    {
        self.on_change = Some(Box::new(listener));
    }

    /// Set the initial value without consulting the change listener
    pub fn load_initial_value(&mut self, has_persisted: bool, value: Option<Color>) {
        tracing::debug!(
            key = %self.key,
            has_persisted,
            value = ?value.map(|c| c.to_string()),
            "loaded initial value"
        );
        self.value = value;
    }

    /// Initial value from the store, falling back to the configured default
    pub fn hydrate(&mut self, store: &dyn PreferenceStore) {
        let has_persisted = self.persistent && store.contains(&self.key);
        let value = if has_persisted {
            let fallback = self.default_value.unwrap_or_default();
            Some(Color(store.get_int(&self.key, fallback.0)))
        } else {
            self.default_value
        };
        self.load_initial_value(has_persisted, value);
    }

    /// Commit a new value
    ///
    /// Returns `Ok(false)` when the change listener vetoes the value; nothing
    /// is updated or persisted in that case.
    pub fn set_value(&mut self, color: Color, store: &mut dyn PreferenceStore) -> Result<bool> {
        if !self.palette.contains(color) {
            return Err(Error::ColorNotInPalette(color, self.key.clone()));
        }

        if let Some(listener) = self.on_change.as_mut() {
            if !listener(color) {
                tracing::info!(key = %self.key, color = %color, "change vetoed by listener");
                return Ok(false);
            }
        }

        self.value = Some(color);
        if self.persistent && !store.put_int(&self.key, color.0) {
            tracing::warn!(key = %self.key, "value committed but not persisted");
        }
        self.notify_changed();

        tracing::info!(key = %self.key, color = %color, "committed color");
        Ok(true)
    }

    fn notify_changed(&mut self) {
        self.revision += 1;
    }

    /// Render the current value into the inline preview
    pub fn on_bind_view(&self, view: &mut SwatchView, metrics: &DisplayMetrics) {
        match self.value {
            Some(color) => render_swatch(view, color, metrics),
            None => view.clear(),
        }
    }

    /// A fresh preview view matching the configured template
    pub fn create_preview_view(&self) -> SwatchView {
        match self.template {
            CellTemplate::Swatch => SwatchView::image(),
            CellTemplate::Text => SwatchView::text(self.title.clone()),
        }
    }

    /// Open the selection dialog, reusing one already shown under our tag
    pub fn on_activate(&self, dialogs: &mut DialogManager) -> Result<()> {
        let tag = self.fragment_tag();

        if let Some(dialog) = dialogs.find_by_tag_mut(&tag) {
            dialog.set_control(self);
            return Ok(());
        }

        let mut dialog = ColorDialog::new();
        dialog.set_control(self);
        dialogs.show(tag, dialog)?;
        Ok(())
    }

    /// Rebind a dialog that survived host recreation; returns whether one was found
    pub fn on_reattach(&self, dialogs: &mut DialogManager) -> bool {
        let tag = self.fragment_tag();
        match dialogs.find_by_tag_mut(&tag) {
            Some(dialog) => {
                // re-bind preference to dialog
                dialog.set_control(self);
                tracing::debug!(tag = %tag, "rebound color dialog");
                true
            }
            None => false,
        }
    }

    /// Snapshot handed to the dialog on binding
    pub fn binding(&self) -> ControlBinding {
        ControlBinding {
            key: self.key.clone(),
            title: self.title.clone(),
            palette: self.palette.clone(),
            num_columns: self.num_columns,
            template: self.template,
            value: self.value,
        }
    }

    pub fn fragment_tag(&self) -> String {
        format!("color_{}", self.key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn value(&self) -> Option<Color> {
        self.value
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn template(&self) -> CellTemplate {
        self.template
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Bumped on every commit; hosts re-render the preview when it changes
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl fmt::Debug for ColorPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPreference")
            .field("key", &self.key)
            .field("palette", &self.palette)
            .field("template", &self.template)
            .field("num_columns", &self.num_columns)
            .field("value", &self.value)
            .field("has_listener", &self.on_change.is_some())
            .field("revision", &self.revision)
            .finish()
    }
}
