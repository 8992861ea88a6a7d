//! The fixed, ordered set of selectable colors

use crate::color::Color;
use crate::error::{Error, Result};

/// Choices used when a preference does not configure its own
pub const BUILTIN_CHOICES: [&str; 20] = [
    "#F44336", // Red
    "#E91E63", // Pink
    "#9C27B0", // Purple
    "#673AB7", // Deep purple
    "#3F51B5", // Indigo
    "#2196F3", // Blue
    "#03A9F4", // Light blue
    "#00BCD4", // Cyan
    "#009688", // Teal
    "#4CAF50", // Green
    "#8BC34A", // Light green
    "#CDDC39", // Lime
    "#FFEB3B", // Yellow
    "#FFC107", // Amber
    "#FF9800", // Orange
    "#FF5722", // Deep orange
    "#795548", // Brown
    "#9E9E9E", // Grey
    "#607D8B", // Blue grey
    "#000000", // Black
];

/// Ordered palette; duplicates are allowed and order is layout order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Parse every literal; the first malformed one fails the whole palette
    pub fn from_literals<S: AsRef<str>>(literals: &[S]) -> Result<Self> {
        let colors = literals
            .iter()
            .map(|literal| Color::parse(literal.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { colors })
    }

    pub fn builtin() -> Self {
        Self::from_literals(&BUILTIN_CHOICES).unwrap_or_default()
    }

    pub fn size(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color_at(&self, index: usize) -> Result<Color> {
        self.colors
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.colors.len(),
            })
    }

    /// Index of the first entry equal to `color`
    pub fn index_of(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_literals_keeps_order() {
        let palette = Palette::from_literals(&["#FF0000", "#00FF00", "#0000FF"]).unwrap();
        assert_eq!(palette.size(), 3);
        assert_eq!(palette.color_at(0).unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(palette.color_at(1).unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(palette.color_at(2).unwrap(), Color::rgb(0, 0, 255));
    }

    #[test]
    fn test_from_literals_fails_fast() {
        let err = Palette::from_literals(&["#FF0000", "not-a-color", "#0000FF"]).unwrap_err();
        assert!(matches!(err, Error::InvalidColor(ref s) if s == "not-a-color"));
    }

    #[test]
    fn test_color_at_out_of_range() {
        let palette = Palette::from_literals(&["red"]).unwrap();
        let err = palette.color_at(1).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn test_index_of_first_duplicate() {
        let palette = Palette::from_literals(&["blue", "red", "blue"]).unwrap();
        assert_eq!(palette.index_of(Color::rgb(0, 0, 255)), Some(0));
        assert_eq!(palette.index_of(Color::rgb(255, 0, 0)), Some(1));
        assert_eq!(palette.index_of(Color::WHITE), None);
    }

    #[test]
    fn test_empty_palette() {
        let palette = Palette::from_literals::<&str>(&[]).unwrap();
        assert!(palette.is_empty());
        assert!(palette.color_at(0).is_err());
    }

    #[test]
    fn test_builtin_palette_parses() {
        let palette = Palette::builtin();
        assert_eq!(palette.size(), BUILTIN_CHOICES.len());
        assert_eq!(palette.color_at(19).unwrap(), Color::BLACK);
    }
}
