//! Packed ARGB color values
//!
//! Colors are stored as a single `u32` in `0xAARRGGBB` order, the same layout
//! the preference store persists. Literals are parsed strictly: a literal that
//! is not understood is an error, never a fallback color.

use std::fmt;

use crate::error::{Error, Result};

/// An opaque 32-bit packed ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Build an opaque color from its channels
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::argb(0xFF, red, green, blue)
    }

    pub const fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Color((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Darker variant used as the swatch outline
    ///
    /// Each of red, green and blue is scaled by 192/256 with integer
    /// truncation. Alpha is kept as is.
    pub const fn darken(self) -> Self {
        const fn scale(channel: u8) -> u8 {
            (channel as u32 * 192 / 256) as u8
        }

        Self::argb(
            self.alpha(),
            scale(self.red()),
            scale(self.green()),
            scale(self.blue()),
        )
    }

    /// Parse a color literal
    ///
    /// Supports:
    /// - Hex colors: "#RRGGBB" (opaque) or "#AARRGGBB"
    /// - Named colors: "red", "navy", "lightgray", etc.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        let parsed = if s.starts_with('#') {
            parse_hex_color(s)
        } else {
            parse_named_color(s)
        };

        parsed.ok_or_else(|| Error::InvalidColor(s.to_string()))
    }

    /// Terminal color for this value, alpha composited over black
    pub fn to_terminal(self) -> ratatui::style::Color {
        let alpha = self.alpha() as u32;
        let blend = |channel: u8| (channel as u32 * alpha / 255) as u8;
        ratatui::style::Color::Rgb(blend(self.red()), blend(self.green()), blend(self.blue()))
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha() == 0xFF {
            write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

/// Parse a hex color string (#RRGGBB or #AARRGGBB)
fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => u32::from_str_radix(hex, 16).ok().map(|v| Color(v | 0xFF00_0000)),
        8 => u32::from_str_radix(hex, 16).ok().map(Color),
        _ => None,
    }
}

/// Parse a named color
fn parse_named_color(s: &str) -> Option<Color> {
    let value = match s.to_lowercase().as_str() {
        "black" => 0xFF00_0000,
        "darkgray" | "darkgrey" => 0xFF44_4444,
        "gray" | "grey" => 0xFF88_8888,
        "lightgray" | "lightgrey" => 0xFFCC_CCCC,
        "white" => 0xFFFF_FFFF,
        "red" => 0xFFFF_0000,
        "green" | "lime" => 0xFF00_FF00,
        "blue" => 0xFF00_00FF,
        "yellow" => 0xFFFF_FF00,
        "cyan" | "aqua" => 0xFF00_FFFF,
        "magenta" | "fuchsia" => 0xFFFF_00FF,
        "maroon" => 0xFF80_0000,
        "navy" => 0xFF00_0080,
        "olive" => 0xFF80_8000,
        "purple" => 0xFF80_0080,
        "silver" => 0xFFC0_C0C0,
        "teal" => 0xFF00_8080,
        _ => return None,
    };
    Some(Color(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Parsing Tests ==========

    #[test]
    fn test_parse_hex_6_digits_is_opaque() {
        let color = Color::parse("#112233").unwrap();
        assert_eq!(color, Color(0xFF11_2233));
        assert_eq!(color.red(), 0x11);
        assert_eq!(color.green(), 0x22);
        assert_eq!(color.blue(), 0x33);
        assert_eq!(color.alpha(), 0xFF);
    }

    #[test]
    fn test_parse_hex_8_digits_keeps_alpha() {
        let color = Color::parse("#6633B5E5").unwrap();
        assert_eq!(color, Color(0x6633_B5E5));
        assert_eq!(color.alpha(), 0x66);
    }

    #[test]
    fn test_parse_hex_lowercase() {
        assert_eq!(Color::parse("#aabbcc").unwrap(), Color::rgb(170, 187, 204));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(Color::parse("#GG0000").is_err());
        assert!(Color::parse("#F53").is_err());
        assert!(Color::parse("#FFFFFFF").is_err());
        assert!(Color::parse("#+FFFFF").is_err());
        assert!(Color::parse("#").is_err());
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(Color::parse("red").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("GREEN").unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(Color::parse("Navy").unwrap(), Color::rgb(0, 0, 128));
        assert_eq!(Color::parse("lightgrey").unwrap(), Color(0xFFCC_CCCC));
        assert_eq!(Color::parse("aqua").unwrap(), Color::parse("cyan").unwrap());
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(Color::parse("  #FF0000  ").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse(" teal ").unwrap(), Color::rgb(0, 128, 128));
    }

    #[test]
    fn test_parse_unknown_reports_literal() {
        let err = Color::parse("chartreuse").unwrap_err();
        assert!(matches!(err, Error::InvalidColor(ref s) if s == "chartreuse"));
        assert!(Color::parse("").is_err());
    }

    // ========== Darkening Tests ==========

    #[test]
    fn test_darken_white() {
        let dark = Color::WHITE.darken();
        assert_eq!((dark.red(), dark.green(), dark.blue()), (191, 191, 191));
    }

    #[test]
    fn test_darken_black_stays_black() {
        assert_eq!(Color::BLACK.darken(), Color::BLACK);
    }

    #[test]
    fn test_darken_truncates() {
        // 1 * 192 / 256 = 0, 255 * 192 / 256 = 191.25
        let dark = Color::rgb(1, 255, 128).darken();
        assert_eq!((dark.red(), dark.green(), dark.blue()), (0, 191, 96));
    }

    #[test]
    fn test_darken_keeps_alpha() {
        assert_eq!(Color(0x80FF_FFFF).darken(), Color(0x80BF_BFBF));
        assert_eq!(Color::TRANSPARENT.darken(), Color::TRANSPARENT);
    }

    // ========== Conversion Tests ==========

    #[test]
    fn test_display() {
        assert_eq!(Color::rgb(0x11, 0x22, 0x33).to_string(), "#112233");
        assert_eq!(Color(0x6633_B5E5).to_string(), "#6633B5E5");
    }

    #[test]
    fn test_to_terminal_composites_alpha() {
        use ratatui::style::Color as TermColor;
        assert_eq!(Color::rgb(10, 20, 30).to_terminal(), TermColor::Rgb(10, 20, 30));
        assert_eq!(Color::TRANSPARENT.to_terminal(), TermColor::Rgb(0, 0, 0));
        assert_eq!(Color(0x80FF_0000).to_terminal(), TermColor::Rgb(128, 0, 0));
    }
}
