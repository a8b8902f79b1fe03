//! Keybinding definitions
//!
//! Defines all keyboard shortcuts for different contexts

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active on the dashboard columns
    Dashboard,
    /// Active in dialogs
    Dialog,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('?'),
        modifiers: KeyModifiers::NONE,
        description: "Help",
        context: KeyContext::Global,
    },
    // Dashboard
    Keybinding {
        key: KeyCode::Left,
        modifiers: KeyModifiers::NONE,
        description: "Previous day (also h)",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Right,
        modifiers: KeyModifiers::NONE,
        description: "Next day (also l)",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Char('t'),
        modifiers: KeyModifiers::NONE,
        description: "Back to yesterday",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Char('r'),
        modifiers: KeyModifiers::NONE,
        description: "Reload report",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Next column",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::BackTab,
        modifiers: KeyModifiers::SHIFT,
        description: "Previous column",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Char('j'),
        modifiers: KeyModifiers::NONE,
        description: "Move down",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Char('k'),
        modifiers: KeyModifiers::NONE,
        description: "Move up",
        context: KeyContext::Dashboard,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Show entry details",
        context: KeyContext::Dashboard,
    },
    // Dialog
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Close dialog",
        context: KeyContext::Dialog,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context || kb.context == KeyContext::Global)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }
    if kb.modifiers.contains(KeyModifiers::SHIFT) {
        // Only show Shift for non-character keys
        if !matches!(kb.key, KeyCode::Char(_)) {
            parts.push("Shift");
        }
    }

    let key_str = match kb.key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(&key_str);
    parts.join("+")
}
