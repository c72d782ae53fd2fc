//! Application State

use std::sync::Arc;

use folio_config::AppConfig;
use folio_model::{PortfolioData, PullRequest};
use folio_theme::Theme;
use ratatui::layout::Rect;

use super::{PullRequestsState, StatusBarState};
use crate::keymap::{default_keymap, Keymap};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Portfolio content, shared read-only with every render
    pub portfolio: Arc<PortfolioData>,
    pub pull_requests: PullRequestsState,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    /// Last known terminal size
    pub viewport: Rect,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    /// Application configuration
    pub app_config: AppConfig,
}

impl AppState {
    pub fn new(portfolio: PortfolioData, theme: Theme, app_config: AppConfig) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
            theme,
            app_config,
            ..Self::default()
        }
    }

    /// Pull requests in input order
    pub fn pull_request_list(&self) -> &[PullRequest] {
        &self.portfolio.pull_requests
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            portfolio: Arc::new(PortfolioData::default()),
            pull_requests: PullRequestsState::default(),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            viewport: Rect::new(0, 0, 80, 24),
            keymap: default_keymap(),
            app_config: AppConfig::default(),
        }
    }
}
