//! Header View Model

use crate::state::AppState;
use ratatui::style::{Color, Style};

/// View model for the one-line header
#[derive(Debug, Clone)]
pub struct HeaderViewModel {
    /// e.g. "Ada Lovelace (@ada)"
    pub title: String,
    /// e.g. "violet · dark"
    pub theme_label: String,
    pub bar_style: Style,
    pub title_style: Style,
    pub label_color: Color,
}

impl HeaderViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let portfolio = &state.portfolio;
        let theme = &state.theme;

        let title = match (portfolio.profile.name.is_empty(), portfolio.github.is_empty()) {
            (false, false) => format!("{} (@{})", portfolio.profile.name, portfolio.github),
            (false, true) => portfolio.profile.name.clone(),
            (true, false) => format!("@{}", portfolio.github),
            (true, true) => String::new(),
        };

        Self {
            title,
            theme_label: format!("{} · {}", theme.preset(), theme.mode),
            bar_style: theme.bar(),
            title_style: theme.section_title(),
            label_color: theme.colors.secondary,
        }
    }
}
