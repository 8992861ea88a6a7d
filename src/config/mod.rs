mod keybinding;
mod loader;
mod types;

pub use keybinding::{parse_key, parse_modifiers};
pub use loader::ConfigError;
pub use types::{
    default_bindings, default_preferences, CellTemplate, Config, DisplayConfig, KeyBinding,
    PreferenceConfig, StoreConfig, DEFAULT_NUM_COLUMNS,
};
