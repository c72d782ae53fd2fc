//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::command_id::CommandId;
use crate::state::AppState;
use ratatui::style::{Modifier, Style};

/// Commands advertised in the status bar, in display order
const HINTED_COMMANDS: [CommandId; 7] = [
    CommandId::NavigateNext,
    CommandId::Activate,
    CommandId::ToggleShowAll,
    CommandId::OpenPullRequest,
    CommandId::OpenRepository,
    CommandId::ToggleMode,
    CommandId::Quit,
];

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// (key, label) pairs, e.g. ("Enter", "expand")
    pub hints: Vec<(String, &'static str)>,
    /// Last transient message, empty if none
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    pub bar_style: Style,
    pub key_style: Style,
    pub label_style: Style,
    pub message_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;

        let hints = HINTED_COMMANDS
            .iter()
            .filter_map(|&command| {
                state
                    .keymap
                    .hint_for(command)
                    .map(|key| (key.to_string(), command.label()))
            })
            .collect();

        let bar_style = theme.bar();

        Self {
            hints,
            message: state.status_bar.message.clone().unwrap_or_default(),
            timestamp: state
                .status_bar
                .timestamp
                .map(|ts| ts.format("%H:%M:%S").to_string())
                .unwrap_or_default(),
            bar_style,
            key_style: theme.key_hint(),
            label_style: bar_style.fg(theme.muted_text(0.7)),
            message_style: bar_style
                .fg(theme.colors.highlight)
                .add_modifier(Modifier::ITALIC),
        }
    }
}
