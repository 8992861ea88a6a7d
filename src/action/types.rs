/// Actions that can be performed on the settings screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Select,

    // Dialog
    Cancel,

    // Host lifecycle
    Recreate,

    // Other
    Quit,
    ForceQuit,
}

impl Action {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MoveUp" => Some(Action::MoveUp),
            "MoveDown" => Some(Action::MoveDown),
            "MoveLeft" => Some(Action::MoveLeft),
            "MoveRight" => Some(Action::MoveRight),
            "Select" => Some(Action::Select),
            "Cancel" => Some(Action::Cancel),
            "Recreate" => Some(Action::Recreate),
            "Quit" => Some(Action::Quit),
            "ForceQuit" => Some(Action::ForceQuit),
            "None" => None, // Special action to disable bindings
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_str_navigation() {
        assert_eq!(Action::from_str("MoveUp"), Some(Action::MoveUp));
        assert_eq!(Action::from_str("MoveDown"), Some(Action::MoveDown));
        assert_eq!(Action::from_str("MoveLeft"), Some(Action::MoveLeft));
        assert_eq!(Action::from_str("MoveRight"), Some(Action::MoveRight));
        assert_eq!(Action::from_str("Select"), Some(Action::Select));
    }

    #[test]
    fn test_action_from_str_other() {
        assert_eq!(Action::from_str("Cancel"), Some(Action::Cancel));
        assert_eq!(Action::from_str("Recreate"), Some(Action::Recreate));
        assert_eq!(Action::from_str("Quit"), Some(Action::Quit));
        assert_eq!(Action::from_str("ForceQuit"), Some(Action::ForceQuit));
    }

    #[test]
    fn test_action_from_str_unknown() {
        assert_eq!(Action::from_str("None"), None);
        assert_eq!(Action::from_str("UnknownAction"), None);
        assert_eq!(Action::from_str("moveup"), None); // case sensitive
    }
}
