//! Platform-specific configuration

use crossterm::event::{KeyEvent, KeyModifiers};

/// Platform-appropriate modifier accepted alongside Ctrl for shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display; Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Add recipient shortcut display
/// - macOS: "Cmd+A"
/// - Linux/Windows: "Ctrl+A"
#[cfg(target_os = "macos")]
pub const ADD_RECIPIENT_SHORTCUT: &str = "Cmd+A";

#[cfg(not(target_os = "macos"))]
pub const ADD_RECIPIENT_SHORTCUT: &str = "Ctrl+A";

/// Remove recipient shortcut display
#[cfg(target_os = "macos")]
pub const REMOVE_RECIPIENT_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const REMOVE_RECIPIENT_SHORTCUT: &str = "Ctrl+D";

/// Start over shortcut display
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// True when the key carries Ctrl or the platform action modifier
pub fn has_action_modifier(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | ACTION_MODIFIER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_ctrl_counts_as_action_modifier() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(has_action_modifier(&key));
    }

    #[test]
    fn test_plain_key_is_not_action() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert!(!has_action_modifier(&key));
    }
}
