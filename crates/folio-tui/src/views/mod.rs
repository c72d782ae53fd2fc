//! Views
//!
//! Widgets draw view models; they never look at state directly.

use crate::state::AppState;
use crate::view_models::{HeaderViewModel, PullRequestsViewModel, StatusBarViewModel};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

pub mod header;
pub mod pull_requests_view;
pub mod status_bar;

pub use header::HeaderWidget;
pub use pull_requests_view::PullRequestsWidget;
pub use status_bar::StatusBarWidget;

/// Screen regions, shared by rendering and mouse hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    /// Area of the contributions section
    pub content: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [header, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header,
            content: body.inner(Margin::new(1, 1)),
            status,
        }
    }
}

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let layout = AppLayout::new(area);

    f.render_widget(
        Block::default().style(Style::default().bg(state.theme.colors.background)),
        area,
    );

    let header = HeaderViewModel::from_state(state);
    f.render_widget(HeaderWidget(&header), layout.header);

    // An empty contribution list renders nothing at all
    if let Some(vm) = PullRequestsViewModel::from_state(state, layout.content) {
        f.render_widget(PullRequestsWidget(&vm), layout.content);
    }

    let status_bar = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status_bar), layout.status);
}
