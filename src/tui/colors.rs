//! Colors of the screen chrome
//!
//! Swatches are drawn in their own true colors; everything around them uses
//! the 256-color (indexed) palette for broad terminal compatibility.

use ratatui::style::Color;

/// Primary accent color (cyan-like)
pub const PRIMARY: Color = Color::Indexed(73); // Steel blue

/// Secondary/muted text color
pub const MUTED: Color = Color::Indexed(243); // Gray

/// Background for the selected row
pub const SELECTION_BG: Color = Color::Indexed(236); // Dark gray

/// Header/footer background
pub const BAR_BG: Color = Color::Indexed(236); // Dark gray

/// Border color for focused/active elements
pub const BORDER_FOCUS: Color = Color::Indexed(73); // Steel blue

/// Placeholder shown where a preference has no value
pub const EMPTY_SWATCH: Color = Color::Indexed(240); // Dim gray
