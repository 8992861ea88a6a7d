use ratatui::widgets::ListState;

use crate::action::{ActionDispatcher, ActionHandler};
use crate::config::{default_preferences, Config};
use crate::dialog::{Commit, DialogManager};
use crate::error::{Error, Result};
use crate::preference::ColorPreference;
use crate::store::PreferenceStore;
use crate::swatch::{DisplayMetrics, SwatchView};
use crate::tui::{render, Event, EventHandler, Terminal};

/// Screen mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Dialog,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Normal => write!(f, "Normal"),
            Mode::Dialog => write!(f, "Dialog"),
        }
    }
}

/// Inline preview of one row, with the preference revision it shows
#[derive(Debug, Clone)]
pub struct Preview {
    pub view: SwatchView,
    revision: Option<u64>,
}

/// Settings screen hosting color preferences
pub struct PreferenceScreen<S: PreferenceStore> {
    pub config: Config,
    pub mode: Mode,

    pub preferences: Vec<ColorPreference>,
    pub previews: Vec<Preview>,
    pub list_state: ListState,

    pub dialogs: DialogManager,
    pub metrics: DisplayMetrics,

    // Exit flag
    pub should_quit: bool,

    store: S,
    action_dispatcher: ActionDispatcher,
}

impl<S: PreferenceStore> PreferenceScreen<S> {
    /// Build every preference from the configuration and hydrate it
    pub fn new(config: Config, store: S) -> Result<Self> {
        let metrics = DisplayMetrics::new(config.display.density());
        let action_dispatcher = ActionDispatcher::new(&config);

        let mut screen = Self {
            config,
            mode: Mode::Normal,
            preferences: Vec::new(),
            previews: Vec::new(),
            list_state: ListState::default(),
            dialogs: DialogManager::new(metrics),
            metrics,
            should_quit: false,
            store,
            action_dispatcher,
        };

        screen.build_preferences()?;
        if !screen.preferences.is_empty() {
            screen.list_state.select(Some(0));
        }

        Ok(screen)
    }

    fn build_preferences(&mut self) -> Result<()> {
        let configs = if self.config.preferences.is_empty() {
            default_preferences()
        } else {
            self.config.preferences.clone()
        };

        self.preferences = configs
            .iter()
            .map(|config| {
                let mut preference = ColorPreference::from_config(config)?;
                preference.hydrate(&self.store);
                Ok(preference)
            })
            .collect::<Result<Vec<_>>>()?;

        self.previews = self
            .preferences
            .iter()
            .map(|p| Preview {
                view: p.create_preview_view(),
                revision: None,
            })
            .collect();
        self.sync_previews();

        tracing::info!(count = self.preferences.len(), "built preferences");
        Ok(())
    }

    /// Run the screen main loop
    pub fn run(&mut self, mut terminal: Terminal) -> Result<()> {
        let event_handler = EventHandler::default();

        while !self.should_quit {
            terminal.draw(|frame| render(frame, self))?;

            if let Some(event) = event_handler.poll()? {
                self.handle_event(event)?;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => {
                if let Some(action) = self.action_dispatcher.dispatch(key, &self.mode) {
                    ActionHandler::handle(self, action)?;
                }
            }
            Event::Resize | Event::Tick => {}
        }
        Ok(())
    }

    /// Re-render previews whose preference changed since the last bind
    pub fn sync_previews(&mut self) {
        for (preference, preview) in self.preferences.iter().zip(&mut self.previews) {
            if preview.revision != Some(preference.revision()) {
                preference.on_bind_view(&mut preview.view, &self.metrics);
                preview.revision = Some(preference.revision());
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn preference(&self, key: &str) -> Option<&ColorPreference> {
        self.preferences.iter().find(|p| p.key() == key)
    }

    pub fn preference_mut(&mut self, key: &str) -> Option<&mut ColorPreference> {
        self.preferences.iter_mut().find(|p| p.key() == key)
    }

    pub fn selected_preference(&self) -> Option<&ColorPreference> {
        self.list_state
            .selected()
            .and_then(|idx| self.preferences.get(idx))
    }

    pub fn preview(&self, key: &str) -> Option<&SwatchView> {
        let index = self.preferences.iter().position(|p| p.key() == key)?;
        self.previews.get(index).map(|p| &p.view)
    }

    pub fn has_active_dialog(&self) -> bool {
        !self.dialogs.is_empty()
    }

    // ===================
    // Dialog flow
    // ===================

    /// Open the dialog of the selected row
    pub fn activate_selected(&mut self) -> Result<()> {
        let Some(preference) = self
            .list_state
            .selected()
            .and_then(|idx| self.preferences.get(idx))
        else {
            return Ok(());
        };
        preference.on_activate(&mut self.dialogs)?;
        self.mode = Mode::Dialog;
        Ok(())
    }

    /// Open the dialog of the preference with `key`
    pub fn activate(&mut self, key: &str) -> Result<()> {
        let preference = self
            .preferences
            .iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| Error::PreferenceNotFound(key.to_string()))?;
        preference.on_activate(&mut self.dialogs)?;
        self.mode = Mode::Dialog;
        Ok(())
    }

    /// Tap the focused cell of the active dialog
    pub fn select_in_dialog(&mut self) -> Result<()> {
        let Some((tag, dialog)) = self.dialogs.active_mut() else {
            return Ok(());
        };
        let tag = tag.to_string();
        let commit = dialog.select_focused()?;
        self.finish_tap(&tag, commit)
    }

    /// Tap cell `index` of the active dialog
    pub fn tap(&mut self, index: usize) -> Result<()> {
        let Some((tag, dialog)) = self.dialogs.active_mut() else {
            return Ok(());
        };
        let tag = tag.to_string();
        let commit = dialog.on_item_click(index)?;
        self.finish_tap(&tag, commit)
    }

    fn finish_tap(&mut self, tag: &str, commit: Option<Commit>) -> Result<()> {
        let Some(commit) = commit else {
            return Ok(());
        };
        self.dialogs.dismiss(tag);
        self.update_mode();
        self.apply_commit(commit)?;
        Ok(())
    }

    /// Route a dialog commit to its preference; returns whether it was accepted
    pub fn apply_commit(&mut self, commit: Commit) -> Result<bool> {
        let preference = self
            .preferences
            .iter_mut()
            .find(|p| p.key() == commit.key)
            .ok_or_else(|| Error::PreferenceNotFound(commit.key.clone()))?;

        let accepted = preference.set_value(commit.color, &mut self.store)?;
        self.sync_previews();
        Ok(accepted)
    }

    /// Close the active dialog without committing
    pub fn cancel_dialog(&mut self) {
        let tag = self.dialogs.active().map(|(tag, _)| tag.to_string());
        if let Some(tag) = tag {
            self.dialogs.dismiss(&tag);
        }
        self.update_mode();
    }

    /// Tear down and rebuild the screen the way a host recreation does
    ///
    /// Preferences are rebuilt as new instances from the configuration and
    /// the store; open dialogs survive in the manager and are rebound by tag.
    pub fn recreate(&mut self) -> Result<()> {
        tracing::info!(dialogs = self.dialogs.len(), "recreating screen");

        self.dialogs.detach_all();
        self.build_preferences()?;
        self.dialogs.attach_all()?;

        for preference in &self.preferences {
            preference.on_reattach(&mut self.dialogs);
        }

        let len = self.preferences.len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(idx) if idx >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
        self.update_mode();
        Ok(())
    }

    fn update_mode(&mut self) {
        self.mode = if self.has_active_dialog() {
            Mode::Dialog
        } else {
            Mode::Normal
        };
    }

    // ===================
    // Navigation
    // ===================

    pub fn move_up(&mut self) {
        match self.mode {
            Mode::Dialog => self.with_active_grid(|grid| grid.move_up()),
            Mode::Normal => {
                let len = self.preferences.len();
                if len == 0 {
                    return;
                }
                let current = self.list_state.selected().unwrap_or(0);
                let next = if current == 0 { len - 1 } else { current - 1 };
                self.list_state.select(Some(next));
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.mode {
            Mode::Dialog => self.with_active_grid(|grid| grid.move_down()),
            Mode::Normal => {
                let len = self.preferences.len();
                if len == 0 {
                    return;
                }
                let current = self.list_state.selected().unwrap_or(0);
                let next = (current + 1) % len;
                self.list_state.select(Some(next));
            }
        }
    }

    pub fn move_left(&mut self) {
        self.with_active_grid(|grid| grid.move_left());
    }

    pub fn move_right(&mut self) {
        self.with_active_grid(|grid| grid.move_right());
    }

    fn with_active_grid(&mut self, f: impl FnOnce(&mut crate::grid::ColorGrid)) {
        if let Some(grid) = self
            .dialogs
            .active_mut()
            .and_then(|(_, dialog)| dialog.grid_mut())
        {
            f(grid);
        }
    }
}
