pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("tab", "Tab", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("backtab", "Shift+Tab", NavigatePrevious),
        KeyBinding::new("g", "g", NavigateToTop),
        KeyBinding::new("home", "Home", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        KeyBinding::new("end", "End", NavigateToBottom),
        // Contributions
        KeyBinding::new("enter", "Enter", Activate),
        KeyBinding::new("space", "Space", Activate),
        KeyBinding::new("m", "m", ToggleShowAll),
        KeyBinding::new("o", "o", OpenPullRequest),
        KeyBinding::new("r", "r", OpenRepository),
        // General
        KeyBinding::new("t", "t", ToggleMode),
        KeyBinding::new("q", "q", Quit),
        KeyBinding::new("esc", "Esc", Quit),
        KeyBinding::new("ctrl+c", "Ctrl+C", Quit),
    ];

    Keymap::new(bindings)
}
