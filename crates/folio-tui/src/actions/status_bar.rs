/// Status bar actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusBarAction {
    /// Show a transient message
    Message(String),
}
