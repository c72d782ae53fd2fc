//! Named color sets
//!
//! A palette is the set of named colors every widget draws from. Presets ship
//! one palette per mode; config files may override individual entries.

use ratatui::style::{palette::tailwind, Color};
use serde::{Deserialize, Serialize};

use crate::{color::parse_color, Mode, ThemeError};

/// The named colors supplied to every widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub secondary: Color,
    pub highlight: Color,
}

/// Built-in palettes, selectable by name
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Preset {
    #[default]
    Violet,
    Ocean,
    Emerald,
    Rose,
}

impl Preset {
    /// Palette of this preset for the given mode
    pub fn palette(self, mode: Mode) -> Palette {
        let (primary, secondary, highlight) = match self {
            Self::Violet => (tailwind::VIOLET, tailwind::PURPLE, tailwind::FUCHSIA),
            Self::Ocean => (tailwind::SKY, tailwind::BLUE, tailwind::CYAN),
            Self::Emerald => (tailwind::EMERALD, tailwind::TEAL, tailwind::LIME),
            Self::Rose => (tailwind::ROSE, tailwind::PINK, tailwind::ORANGE),
        };

        match mode {
            Mode::Dark => Palette {
                background: tailwind::SLATE.c950,
                foreground: tailwind::SLATE.c100,
                primary: primary.c400,
                secondary: secondary.c500,
                highlight: highlight.c400,
            },
            Mode::Light => Palette {
                background: tailwind::SLATE.c50,
                foreground: tailwind::SLATE.c900,
                primary: primary.c600,
                secondary: secondary.c700,
                highlight: highlight.c500,
            },
        }
    }
}

/// Per-entry palette overrides as written in config files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOverrides {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub highlight: Option<String>,
}

impl PaletteOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Palette {
    /// Apply overrides, keeping the current color for entries that fail to parse
    ///
    /// Returns the parse errors so the caller can report them.
    pub fn apply(&mut self, overrides: &PaletteOverrides) -> Vec<ThemeError> {
        let mut errors = Vec::new();
        let entries = [
            (&mut self.background, &overrides.background),
            (&mut self.foreground, &overrides.foreground),
            (&mut self.primary, &overrides.primary),
            (&mut self.secondary, &overrides.secondary),
            (&mut self.highlight, &overrides.highlight),
        ];
        for (slot, value) in entries {
            if let Some(value) = value {
                match parse_color(value) {
                    Ok(color) => *slot = color,
                    Err(e) => errors.push(e),
                }
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_preset_from_name() {
        assert_eq!(Preset::from_str("ocean").unwrap(), Preset::Ocean);
        assert_eq!(Preset::from_str("Emerald").unwrap(), Preset::Emerald);
        assert!(Preset::from_str("solarized").is_err());
    }

    #[test]
    fn test_presets_differ_between_modes() {
        for preset in Preset::iter() {
            let dark = preset.palette(Mode::Dark);
            let light = preset.palette(Mode::Light);
            assert_ne!(dark.background, light.background, "{preset}");
            assert_ne!(dark.primary, light.primary, "{preset}");
        }
    }

    #[test]
    fn test_apply_overrides() {
        let mut palette = Preset::Violet.palette(Mode::Dark);
        let original_fg = palette.foreground;
        let overrides: PaletteOverrides = toml::from_str(
            r##"
            primary = "#112233"
            highlight = "not-a-color"
            "##,
        )
        .unwrap();

        let errors = palette.apply(&overrides);

        assert_eq!(palette.primary, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(palette.foreground, original_fg);
        assert_eq!(palette.highlight, Preset::Violet.palette(Mode::Dark).highlight);
        assert_eq!(errors.len(), 1);
    }
}
