/// Status bar state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBarState {
    /// Transient message shown on the right side
    pub message: Option<String>,
    /// When the message was set
    pub timestamp: Option<chrono::DateTime<chrono::Local>>,
}
