use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid color literal: {0:?}")]
    InvalidColor(String),

    #[error("Palette index {index} out of range (size {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid column count: {0} (must be at least 1)")]
    InvalidColumnCount(usize),

    #[error("Column count can only be changed before the grid is first rendered")]
    GridAlreadyRendered,

    #[error("Color {0} is not part of the palette of {1:?}")]
    ColorNotInPalette(crate::color::Color, String),

    #[error("Preference not found: {0}")]
    PreferenceNotFound(String),

    #[error("Invalid key binding: {0}")]
    InvalidKeyBinding(String),
}
