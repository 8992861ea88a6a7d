use std::path::Path;

use thiserror::Error;

use super::types::{default_bindings, Config, DisplayConfig, StoreConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl Config {
    /// Load and merge configs (global + local)
    pub fn load() -> Result<Config, ConfigError> {
        let current_dir = std::env::current_dir()?;

        let global = load_global_config()?.unwrap_or_default();
        let local = load_local_config(&current_dir)?.unwrap_or_default();

        Ok(global.merge(local))
    }

    /// Merge two configs, with `other` taking precedence
    pub fn merge(self, other: Config) -> Config {
        Config {
            display: DisplayConfig {
                density: other.display.density.or(self.display.density),
            },
            store: StoreConfig {
                path: other.store.path.or(self.store.path),
            },
            preferences: if other.preferences.is_empty() {
                self.preferences
            } else {
                other.preferences
            },
            // Local bindings are checked first
            bindings: other.bindings.into_iter().chain(self.bindings).collect(),
        }
    }

    /// User bindings followed by the built-in ones
    pub fn effective_bindings(&self) -> Vec<super::KeyBinding> {
        self.bindings
            .iter()
            .cloned()
            .chain(default_bindings())
            .collect()
    }
}

/// Load global config from ~/.config/colorpref/config.toml
fn load_global_config() -> Result<Option<Config>, ConfigError> {
    let config_path = dirs::config_dir().map(|p| p.join("colorpref").join("config.toml"));

    if let Some(path) = config_path {
        if path.exists() {
            return load_file(&path).map(Some);
        }
    }

    Ok(None)
}

/// Load local config from .colorpref/config.toml in the current directory or parent directories
fn load_local_config(start_path: &Path) -> Result<Option<Config>, ConfigError> {
    let mut current = start_path.to_path_buf();

    loop {
        let config_path = current.join(".colorpref").join("config.toml");
        if config_path.exists() {
            return load_file(&config_path).map(Some);
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CellTemplate, KeyBinding, PreferenceConfig};

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r##"
            [display]
            density = 2.0

            [store]
            path = "/tmp/prefs.toml"

            [[preferences]]
            key = "accent"
            title = "Accent"
            choices = ["#FF0000", "navy"]
            item_layout = "text"
            num_columns = 3
            default_value = "navy"

            [[bindings]]
            key = "x"
            action = "Quit"
            "##,
        )
        .unwrap();

        assert_eq!(config.display.density(), 2.0);
        assert_eq!(config.store.path(), Path::new("/tmp/prefs.toml"));
        let pref = &config.preferences[0];
        assert_eq!(pref.key, "accent");
        assert_eq!(pref.item_layout, Some(CellTemplate::Text));
        assert_eq!(pref.num_columns, Some(3));
        assert_eq!(pref.choices.as_ref().map(Vec::len), Some(2));
        assert_eq!(config.bindings[0].key, "x");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.display.density(), 1.0);
        assert!(config.preferences.is_empty());
        assert!(config.bindings.is_empty());
    }

    #[test]
    fn test_merge_local_takes_precedence() {
        let global = Config {
            display: DisplayConfig { density: Some(2.0) },
            preferences: vec![PreferenceConfig::new("global")],
            bindings: vec![KeyBinding::new("a").with_action("Quit")],
            ..Default::default()
        };
        let local = Config {
            preferences: vec![PreferenceConfig::new("local")],
            bindings: vec![KeyBinding::new("b").with_action("Quit")],
            ..Default::default()
        };

        let merged = global.merge(local);
        assert_eq!(merged.display.density(), 2.0);
        assert_eq!(merged.preferences[0].key, "local");
        assert_eq!(merged.bindings[0].key, "b");
        assert_eq!(merged.bindings[1].key, "a");
    }

    #[test]
    fn test_merge_keeps_global_preferences_when_local_has_none() {
        let global = Config {
            preferences: vec![PreferenceConfig::new("global")],
            ..Default::default()
        };
        let merged = global.merge(Config::default());
        assert_eq!(merged.preferences.len(), 1);
    }

    #[test]
    fn test_effective_bindings_user_first() {
        let config = Config {
            bindings: vec![KeyBinding::new("x").with_action("Quit")],
            ..Default::default()
        };
        let bindings = config.effective_bindings();
        assert_eq!(bindings[0].key, "x");
        assert!(bindings.len() > 1);
    }
}
