//! View models
//!
//! View models sit between state and widgets: they precompute display text,
//! colors and geometry so that views only draw.

pub mod header;
pub mod pull_requests_view_model;
pub mod status_bar;
pub mod text;

pub use header::HeaderViewModel;
pub use pull_requests_view_model::{
    CardLayout, CardViewModel, HitTarget, PullRequestsViewModel, ToggleViewModel,
};
pub use status_bar::StatusBarViewModel;
