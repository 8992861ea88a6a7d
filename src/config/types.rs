use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default number of grid columns
pub const DEFAULT_NUM_COLUMNS: usize = 5;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub preferences: Vec<PreferenceConfig>,

    #[serde(default)]
    pub bindings: Vec<KeyBinding>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// Device pixels per density-independent pixel (defaults to 1.0)
    #[serde(default)]
    pub density: Option<f32>,
}

impl DisplayConfig {
    pub fn density(&self) -> f32 {
        self.density.unwrap_or(1.0)
    }
}

/// Preference store configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// File holding persisted values
    /// Defaults to `<data_local_dir>/colorpref/preferences.toml`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("colorpref")
                .join("preferences.toml")
        })
    }
}

/// Visual template for grid cells and the inline preview
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CellTemplate {
    /// Circular swatch with a darkened outline
    #[default]
    Swatch,
    /// Text label tinted with the color
    Text,
}

impl std::fmt::Display for CellTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellTemplate::Swatch => write!(f, "swatch"),
            CellTemplate::Text => write!(f, "text"),
        }
    }
}

/// One color preference entry (declarative attributes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceConfig {
    /// Unique key, used for storage and for the dialog tag
    pub key: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    /// Color literals ("#RRGGBB", "#AARRGGBB" or a color name)
    /// Falls back to the built-in palette when absent
    #[serde(default)]
    pub choices: Option<Vec<String>>,

    #[serde(default)]
    pub item_layout: Option<CellTemplate>,

    #[serde(default)]
    pub num_columns: Option<usize>,

    /// Value used when nothing is persisted yet
    #[serde(default)]
    pub default_value: Option<String>,

    /// Whether committed values are written to the store (defaults to true)
    #[serde(default)]
    pub persistent: Option<bool>,
}

impl PreferenceConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: None,
            summary: None,
            choices: None,
            item_layout: None,
            num_columns: None,
            default_value: None,
            persistent: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_choices<S: Into<String>>(mut self, choices: impl IntoIterator<Item = S>) -> Self {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_item_layout(mut self, template: CellTemplate) -> Self {
        self.item_layout = Some(template);
        self
    }

    pub fn with_num_columns(mut self, columns: usize) -> Self {
        self.num_columns = Some(columns);
        self
    }

    pub fn with_default_value(mut self, literal: impl Into<String>) -> Self {
        self.default_value = Some(literal.into());
        self
    }

    pub fn with_persistent(mut self, persistent: bool) -> Self {
        self.persistent = Some(persistent);
        self
    }
}

/// Preferences shown when the configuration defines none
pub fn default_preferences() -> Vec<PreferenceConfig> {
    vec![PreferenceConfig::new("accent_color")
        .with_title("Accent color")
        .with_summary("Color used for highlights")]
}

/// Key binding configuration (Alacritty-style)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key to bind (e.g., "j", "Enter", "Esc", "F1")
    pub key: String,

    /// Modifier keys (e.g., "Control", "Shift", "Alt", "Control|Shift")
    #[serde(default)]
    pub mods: Option<String>,

    /// Mode restriction (e.g., "Normal", "Dialog", "~Normal")
    #[serde(default)]
    pub mode: Option<String>,

    /// Built-in action to execute
    #[serde(default)]
    pub action: Option<String>,
}

impl KeyBinding {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mods: None,
            mode: None,
            action: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_mods(mut self, mods: impl Into<String>) -> Self {
        self.mods = Some(mods.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }
}

/// Built-in key bindings; user bindings are checked before these
pub fn default_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("k").with_action("MoveUp"),
        KeyBinding::new("Up").with_action("MoveUp"),
        KeyBinding::new("j").with_action("MoveDown"),
        KeyBinding::new("Down").with_action("MoveDown"),
        KeyBinding::new("h").with_action("MoveLeft"),
        KeyBinding::new("Left").with_action("MoveLeft"),
        KeyBinding::new("l").with_action("MoveRight"),
        KeyBinding::new("Right").with_action("MoveRight"),
        KeyBinding::new("Enter").with_action("Select"),
        KeyBinding::new("Space").with_action("Select"),
        KeyBinding::new("Esc").with_action("Cancel"),
        KeyBinding::new("r").with_mode("Normal").with_action("Recreate"),
        KeyBinding::new("q").with_action("Quit"),
        KeyBinding::new("c").with_mods("Control").with_action("ForceQuit"),
    ]
}
