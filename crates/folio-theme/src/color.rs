//! Color parsing and alpha compositing
//!
//! Terminals have no alpha channel, so translucent colors are composited
//! against the color they sit on before they reach the buffer.

use std::str::FromStr;

use ratatui::style::Color;

use crate::ThemeError;

/// Parse a color string such as `"#8B5CF6"` or `"cyan"`
pub fn parse_color(value: &str) -> Result<Color, ThemeError> {
    Color::from_str(value.trim()).map_err(|_| ThemeError::InvalidColor(value.to_string()))
}

/// RGB components of a color, if it is a true color
pub fn rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::Black => Some((0, 0, 0)),
        Color::White => Some((255, 255, 255)),
        _ => None,
    }
}

/// Composite `fg` at `alpha` opacity over `bg`
///
/// Indexed and named colors cannot be mixed; the more opaque side wins.
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (rgb(fg), rgb(bg)) {
        (Some((fr, fg_, fb)), Some((br, bg_, bb))) => {
            let mix = |f: u8, b: u8| -> u8 {
                (f as f32 * alpha + b as f32 * (1.0 - alpha)).round() as u8
            };
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if alpha >= 0.5 => fg,
        _ => bg,
    }
}

/// Convert a CSS-style two digit alpha suffix (`"50"`, `"b3"`) to opacity
pub fn hex_alpha(suffix: u8) -> f32 {
    suffix as f32 / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_color("#8B5CF6").unwrap(), Color::Rgb(0x8b, 0x5c, 0xf6));
        assert_eq!(parse_color(" #22c55e ").unwrap(), Color::Rgb(0x22, 0xc5, 0x5e));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            parse_color("#zzzzzz"),
            Err(ThemeError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_blend_endpoints() {
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(blend(fg, bg, 1.0), fg);
        assert_eq!(blend(fg, bg, 0.0), bg);
        assert_eq!(blend(fg, bg, 0.5), Color::Rgb(100, 50, 0));
    }

    #[test]
    fn test_blend_named_colors() {
        assert_eq!(blend(Color::Red, Color::Blue, 0.8), Color::Red);
        assert_eq!(blend(Color::Red, Color::Blue, 0.2), Color::Blue);
        assert_eq!(blend(Color::White, Color::Black, 0.5), Color::Rgb(128, 128, 128));
    }

    #[test]
    fn test_hex_alpha() {
        assert_eq!(hex_alpha(0xff), 1.0);
        assert_eq!(hex_alpha(0x00), 0.0);
    }
}
