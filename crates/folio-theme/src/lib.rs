//! Theme for folio
//!
//! A [`Theme`] is the read-only `{ colors, mode }` pair every view model and
//! widget receives by reference. All derived colors (surfaces, borders, muted
//! text) are computed from it at render time, so the same content renders in
//! light and dark mode and under any palette.

mod color;
mod mode;
mod palette;

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

pub use color::{blend, hex_alpha, parse_color, rgb};
pub use mode::Mode;
pub use palette::{Palette, PaletteOverrides, Preset};

/// Theme errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid color value: {0:?}")]
    InvalidColor(String),
}

/// Application theme - palette plus the current mode
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub colors: Palette,
    pub mode: Mode,
    preset: Preset,
    overrides: PaletteOverrides,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Preset::default(), Mode::default(), PaletteOverrides::default())
    }
}

impl Theme {
    /// Build a theme from a preset, a mode and optional palette overrides
    ///
    /// Overrides that fail to parse are logged and skipped.
    pub fn new(preset: Preset, mode: Mode, overrides: PaletteOverrides) -> Self {
        let mut colors = preset.palette(mode);
        for err in colors.apply(&overrides) {
            log::warn!("Ignoring palette override: {}", err);
        }
        Self {
            colors,
            mode,
            preset,
            overrides,
        }
    }

    /// Build a theme from a preset name, falling back to the default preset
    pub fn from_name(name: &str, mode: Mode, overrides: PaletteOverrides) -> Self {
        let preset = if name.trim().is_empty() {
            Preset::default()
        } else {
            Preset::from_str(name.trim()).unwrap_or_else(|_| {
                log::warn!("Unknown theme preset {:?}, using {}", name, Preset::default());
                Preset::default()
            })
        };
        Self::new(preset, mode, overrides)
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Same preset and overrides in another mode
    pub fn with_mode(&self, mode: Mode) -> Self {
        Self::new(self.preset, mode, self.overrides.clone())
    }

    /// Neutral overlay: white on dark backgrounds, black on light ones
    fn overlay(&self, base: Color, dark_alpha: f32, light_alpha: f32) -> Color {
        match self.mode {
            Mode::Dark => blend(Color::White, base, dark_alpha),
            Mode::Light => blend(Color::Black, base, light_alpha),
        }
    }

    // Surfaces

    /// Background of a page section, tinted towards the primary color
    pub fn section_background(&self) -> Color {
        let alpha = if self.mode.is_dark() { 0.08 } else { 0.05 };
        blend(self.colors.primary, self.colors.background, alpha)
    }

    pub fn section_border(&self) -> Color {
        self.overlay(self.section_background(), 0.22, 0.18)
    }

    /// Soft glow behind a section's title
    pub fn glow(&self) -> Color {
        blend(self.colors.highlight, self.section_background(), 0.35)
    }

    pub fn card_background(&self) -> Color {
        match self.mode {
            Mode::Dark => blend(Color::White, self.section_background(), 0.03),
            Mode::Light => blend(Color::White, self.section_background(), 0.5),
        }
    }

    pub fn card_border(&self) -> Color {
        self.overlay(self.card_background(), 0.16, 0.14)
    }

    /// Card border while the card has focus
    pub fn card_border_focused(&self) -> Color {
        blend(self.colors.primary, self.card_background(), 0.85)
    }

    /// Card header background while the card has focus
    pub fn card_header_focused(&self) -> Color {
        match self.mode {
            Mode::Dark => blend(Color::White, self.card_background(), 0.04),
            Mode::Light => blend(Color::White, self.card_background(), 0.2),
        }
    }

    /// Separator between a card's header and its details
    pub fn divider(&self) -> Color {
        self.overlay(self.card_background(), 0.1, 0.1)
    }

    // Text

    /// Foreground at reduced opacity over card surfaces
    pub fn muted_text(&self, alpha: f32) -> Color {
        blend(self.colors.foreground, self.card_background(), alpha)
    }

    /// An accent color at reduced opacity over card surfaces
    pub fn tint(&self, accent: Color, alpha: f32) -> Color {
        blend(accent, self.card_background(), alpha)
    }

    /// Background of secondary buttons
    pub fn neutral_button(&self) -> Color {
        self.overlay(self.card_background(), 0.1, 0.06)
    }

    // Toggle control

    pub fn toggle_background(&self) -> Color {
        let alpha = if self.mode.is_dark() { hex_alpha(0x15) } else { hex_alpha(0x10) };
        blend(self.colors.highlight, self.section_background(), alpha)
    }

    pub fn toggle_border(&self) -> Color {
        let alpha = if self.mode.is_dark() { hex_alpha(0x60) } else { hex_alpha(0x50) };
        blend(self.colors.highlight, self.section_background(), alpha)
    }

    pub fn toggle_foreground(&self) -> Color {
        match self.mode {
            Mode::Dark => self.colors.highlight,
            Mode::Light => self.colors.primary,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for section titles
    pub fn section_title(&self) -> Style {
        Style::default()
            .fg(self.colors.foreground)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.colors.foreground)
    }

    /// Style for the header and status bars
    pub fn bar(&self) -> Style {
        Style::default()
            .fg(self.colors.foreground)
            .bg(self.overlay(self.colors.background, 0.08, 0.06))
    }

    /// Style for key hints (e.g., "Enter" in "Enter expand")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.colors.primary)
            .add_modifier(Modifier::BOLD)
    }
}
