pub mod app_reducer;
pub mod pull_requests_reducer;
pub mod status_bar_reducer;
