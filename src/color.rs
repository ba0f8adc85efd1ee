//! Color strings for render options.
//!
//! Accepts hex (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`) and anything else CSS
//! understands (`white`, `rgb(26 26 46)`, `hsl(240 28% 14%)`, ...).

use image::Rgba;
use lightningcss::traits::Parse;
use lightningcss::values::color::{CssColor, FloatColor};
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Blank input
    #[error("empty color string")]
    Empty,
    /// `#` followed by a bad digit count or non-hex digit
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
    /// Not a CSS color
    #[error("invalid color '{input}': {reason}")]
    Css { input: String, reason: String },
}

/// Parse a CSS color string into an RGBA pixel.
///
/// ```
/// use ggst_team::color::parse_color;
///
/// assert_eq!(parse_color("#1a1a2e").unwrap(), image::Rgba([0x1a, 0x1a, 0x2e, 255]));
/// assert_eq!(parse_color("white").unwrap(), image::Rgba([255, 255, 255, 255]));
/// ```
pub fn parse_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex).ok_or_else(|| ColorError::InvalidHex(s.to_string())),
        None => parse_css(s),
    }
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    let [r, g, b, a] = match hex.len() {
        3 => [nibble(0)?, nibble(1)?, nibble(2)?, 255],
        4 => [nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?],
        6 => [byte(0)?, byte(2)?, byte(4)?, 255],
        8 => [byte(0)?, byte(2)?, byte(4)?, byte(6)?],
        _ => return None,
    };
    Some(Rgba([r, g, b, a]))
}

fn parse_css(s: &str) -> Result<Rgba<u8>, ColorError> {
    let fail = |reason: &str| ColorError::Css { input: s.to_string(), reason: reason.to_string() };

    let color = CssColor::parse_string(s).map_err(|e| fail(&e.to_string()))?;
    match color.to_rgb().map_err(|_| fail("cannot convert to RGB"))? {
        CssColor::RGBA(c) => Ok(Rgba([c.red, c.green, c.blue, c.alpha])),
        CssColor::Float(float) => match float.as_ref() {
            FloatColor::RGB(c) => {
                let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
                Ok(Rgba([channel(c.r), channel(c.g), channel(c.b), channel(c.alpha)]))
            }
            _ => Err(fail("unexpected float color format")),
        },
        _ => Err(fail("conversion did not produce RGB")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(parse_color("#F00").unwrap(), Rgba([255, 0, 0, 255]));
        assert_eq!(parse_color("#F008").unwrap(), Rgba([255, 0, 0, 136]));
        assert_eq!(parse_color("#cccccc").unwrap(), Rgba([204, 204, 204, 255]));
        assert_eq!(parse_color("#00000080").unwrap(), Rgba([0, 0, 0, 128]));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(parse_color("  #ffffff ").unwrap(), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_invalid_hex() {
        assert_eq!(parse_color("#12"), Err(ColorError::InvalidHex("#12".to_string())));
        assert!(matches!(parse_color("#GGGGGG"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(parse_color("#ソル"), Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_color(""), Err(ColorError::Empty));
        assert_eq!(parse_color("   "), Err(ColorError::Empty));
    }

    #[test]
    fn test_css_forms() {
        assert_eq!(parse_color("red").unwrap(), Rgba([255, 0, 0, 255]));
        assert_eq!(parse_color("rgb(0, 255, 0)").unwrap(), Rgba([0, 255, 0, 255]));
        assert_eq!(parse_color("hsl(240, 100%, 50%)").unwrap(), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(parse_color("notacolor"), Err(ColorError::Css { .. })));
    }
}
