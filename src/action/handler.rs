use crate::error::Result;
use crate::screen::{Mode, PreferenceScreen};
use crate::store::PreferenceStore;

use super::Action;

/// Handles action execution
pub struct ActionHandler;

impl ActionHandler {
    /// Handle an action
    pub fn handle<S: PreferenceStore>(screen: &mut PreferenceScreen<S>, action: Action) -> Result<()> {
        match action {
            // Navigation
            Action::MoveUp => screen.move_up(),
            Action::MoveDown => screen.move_down(),
            Action::MoveLeft => screen.move_left(),
            Action::MoveRight => screen.move_right(),
            Action::Select => match screen.mode {
                Mode::Normal => screen.activate_selected()?,
                Mode::Dialog => screen.select_in_dialog()?,
            },

            // Dialog
            Action::Cancel => screen.cancel_dialog(),

            // Host lifecycle
            Action::Recreate => screen.recreate()?,

            // Other
            Action::Quit => {
                if screen.has_active_dialog() {
                    screen.cancel_dialog();
                } else {
                    screen.should_quit = true;
                }
            }
            Action::ForceQuit => {
                screen.should_quit = true;
            }
        }

        Ok(())
    }
}
