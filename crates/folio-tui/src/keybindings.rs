//! Keybinding system
//!
//! Maps keyboard input to commands. Key patterns are textual (e.g. "ctrl+c",
//! "G", "enter") so they stay readable in the default keymap.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "ctrl+c", "enter", "G"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+C", "↓"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    /// Create a new keybinding
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "G" (case-sensitive; uppercase implies SHIFT)
/// - With modifiers: "ctrl+c", "shift+tab", "alt+x"
/// - Special keys: "tab", "enter", "esc", "space", "up", "down", "home", "end"
pub fn parse_key_pattern(pattern: &str) -> Option<KeyPattern> {
    let pattern = pattern.trim();

    // For single characters, preserve case (e.g., "G" vs "g")
    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        // Uppercase letters come with SHIFT modifier from terminal
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    // For everything else (modifiers, special keys), lowercase for matching
    let pattern_lower = pattern.to_lowercase();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    // Extract modifiers
    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;

    Some(KeyPattern { code, modifiers })
}

/// Parse a key code string into a KeyCode
fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),

        // Function keys
        s if s.starts_with('f') && s.len() > 1 => {
            let num: u8 = s[1..].parse().ok()?;
            Some(KeyCode::F(num))
        }

        // Single character
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),

        _ => None,
    }
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, KeyPattern)>,
}

impl Keymap {
    /// Create a new keymap from a list of bindings
    ///
    /// Bindings whose pattern cannot be parsed are dropped with a warning.
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// Find the command bound to a key event
    pub fn match_key(&self, key: &KeyEvent) -> Option<CommandId> {
        self.bindings
            .iter()
            .find(|(_, pattern)| {
                // BackTab arrives with or without SHIFT depending on terminal
                if pattern.code == KeyCode::BackTab {
                    key.code == KeyCode::BackTab
                } else {
                    key.code == pattern.code && key.modifiers == pattern.modifiers
                }
            })
            .map(|(binding, _)| binding.command)
    }

    /// Display hint of the first binding for a command
    pub fn hint_for(&self, command: CommandId) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(binding, _)| binding.command == command)
            .map(|(binding, _)| binding.hint.as_str())
    }
}
