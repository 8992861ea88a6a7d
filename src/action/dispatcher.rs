use crossterm::event::KeyEvent;

use crate::config::{parse_key, parse_modifiers, Config, KeyBinding};
use crate::screen::Mode;

use super::Action;

/// Dispatches key events to actions based on configuration
pub struct ActionDispatcher {
    bindings: Vec<KeyBinding>,
}

impl ActionDispatcher {
    /// Create a new dispatcher from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            bindings: config.effective_bindings(),
        }
    }

    /// Dispatch a key event to an action
    pub fn dispatch(&self, key: KeyEvent, mode: &Mode) -> Option<Action> {
        // First matching binding wins, even when it disables the key
        self.bindings
            .iter()
            .find(|binding| self.matches(binding, &key, mode))
            .and_then(|binding| self.to_action(binding))
    }

    /// Check if a binding matches the key event and mode
    fn matches(&self, binding: &KeyBinding, key: &KeyEvent, mode: &Mode) -> bool {
        // Parse the binding key
        let Ok(binding_key) = parse_key(&binding.key) else {
            return false;
        };

        // Check key code
        if binding_key != key.code {
            return false;
        }

        // Check modifiers
        let binding_mods = parse_modifiers(binding.mods.as_deref());
        if binding_mods != key.modifiers {
            return false;
        }

        // Check mode restriction
        if let Some(mode_str) = &binding.mode {
            if !self.mode_matches(mode_str, mode) {
                return false;
            }
        }

        true
    }

    /// Check if mode restriction matches current mode
    fn mode_matches(&self, mode_str: &str, current_mode: &Mode) -> bool {
        let mode_str = mode_str.trim();

        // Handle negation (~)
        if let Some(stripped) = mode_str.strip_prefix('~') {
            return !self.mode_name_matches(stripped, current_mode);
        }

        // Handle multiple modes (|)
        if mode_str.contains('|') {
            return mode_str
                .split('|')
                .any(|m| self.mode_matches(m.trim(), current_mode));
        }

        self.mode_name_matches(mode_str, current_mode)
    }

    /// Check if a mode name matches
    fn mode_name_matches(&self, name: &str, current_mode: &Mode) -> bool {
        match name.to_lowercase().as_str() {
            "normal" => matches!(current_mode, Mode::Normal),
            "dialog" => matches!(current_mode, Mode::Dialog),
            _ => false,
        }
    }

    /// Convert a binding to an action
    fn to_action(&self, binding: &KeyBinding) -> Option<Action> {
        binding.action.as_deref().and_then(Action::from_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_dispatch_j_moves_down() {
        let dispatcher = ActionDispatcher::new(&Config::default());
        let action = dispatcher.dispatch(press(KeyCode::Char('j')), &Mode::Normal);
        assert_eq!(action, Some(Action::MoveDown));
    }

    #[test]
    fn test_dispatch_arrows_in_dialog() {
        let dispatcher = ActionDispatcher::new(&Config::default());
        assert_eq!(
            dispatcher.dispatch(press(KeyCode::Left), &Mode::Dialog),
            Some(Action::MoveLeft)
        );
        assert_eq!(
            dispatcher.dispatch(press(KeyCode::Enter), &Mode::Dialog),
            Some(Action::Select)
        );
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        let dispatcher = ActionDispatcher::new(&Config::default());
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(dispatcher.dispatch(key, &Mode::Dialog), Some(Action::ForceQuit));
    }

    #[test]
    fn test_mode_restriction() {
        let dispatcher = ActionDispatcher::new(&Config::default());
        let key = press(KeyCode::Char('r'));

        assert_eq!(dispatcher.dispatch(key, &Mode::Normal), Some(Action::Recreate));
        assert_eq!(dispatcher.dispatch(key, &Mode::Dialog), None);
    }

    #[test]
    fn test_user_binding_overrides_default() {
        let config = Config {
            bindings: vec![
                KeyBinding::new("q").with_action("None"),
                KeyBinding::new("x").with_mode("~Dialog").with_action("Quit"),
            ],
            ..Default::default()
        };
        let dispatcher = ActionDispatcher::new(&config);

        assert_eq!(dispatcher.dispatch(press(KeyCode::Char('q')), &Mode::Normal), None);
        assert_eq!(
            dispatcher.dispatch(press(KeyCode::Char('x')), &Mode::Normal),
            Some(Action::Quit)
        );
        assert_eq!(dispatcher.dispatch(press(KeyCode::Char('x')), &Mode::Dialog), None);
    }
}
