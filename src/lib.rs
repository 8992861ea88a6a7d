pub mod action;
pub mod color;
pub mod config;
pub mod dialog;
pub mod error;
pub mod grid;
pub mod palette;
pub mod preference;
pub mod screen;
pub mod store;
pub mod swatch;
pub mod tui;

pub use color::Color;
pub use config::Config;
pub use dialog::{ColorDialog, Commit, DialogManager, DialogState};
pub use error::{Error, Result};
pub use grid::ColorGrid;
pub use palette::Palette;
pub use preference::ColorPreference;
pub use screen::PreferenceScreen;
pub use store::{MemoryStore, PreferenceStore, TomlFileStore};
