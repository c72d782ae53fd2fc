//! Global actions - not tied to any specific widget

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Left mouse button pressed at a terminal cell (before hit testing)
    MouseClicked { column: u16, row: u16 },
    /// Terminal was resized
    Resized { width: u16, height: u16 },
    /// Switch between light and dark mode
    ToggleMode,
    /// Open a URL in the system browser
    OpenUrl(String),
    /// Quit the application
    Quit,
}
