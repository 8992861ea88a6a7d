use crossterm::event::{KeyCode, KeyModifiers};

use crate::error::{Error, Result};

/// Parse a binding key ("j", "Enter", "Esc", "Space", "Left", "F1", ...)
pub fn parse_key(key: &str) -> Result<KeyCode> {
    let key = key.trim();

    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = key.to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        _ => match lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n @ 1..=12) => KeyCode::F(n),
            _ => return Err(Error::InvalidKeyBinding(format!("Unknown key: {}", key))),
        },
    };
    Ok(code)
}

/// Parse "Control|Shift" style modifiers; unknown names are ignored
pub fn parse_modifiers(mods: Option<&str>) -> KeyModifiers {
    mods.into_iter()
        .flat_map(|mods| mods.split('|'))
        .fold(KeyModifiers::NONE, |acc, part| {
            acc | match part.trim().to_ascii_lowercase().as_str() {
                "control" | "ctrl" => KeyModifiers::CONTROL,
                "shift" => KeyModifiers::SHIFT,
                "alt" => KeyModifiers::ALT,
                _ => KeyModifiers::NONE,
            }
        })
}
