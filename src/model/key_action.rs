//! Domain-level keyboard actions independent of key bindings.

/// User intent derived from a key press.
///
/// These represent what the user wants, not which key was pressed. The
/// mapping from `crossterm::event::KeyEvent` to `KeyAction` lives in
/// `config::keybindings`; editor text entry bypasses this enum because
/// arbitrary characters route straight into the focused form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Navigation
    /// Move selection up one row. Default: k/↑
    SelectPrev,
    /// Move selection down one row. Default: j/↓
    SelectNext,
    /// Open the selected project's chart, or confirm a selection. Default: Enter
    Open,
    /// Return to the project list (or dismiss a modal). Default: Esc
    Back,

    // Chart interaction
    /// Scroll the chart left. Default: h/←
    ScrollLeft,
    /// Scroll the chart right. Default: l/→
    ScrollRight,
    /// Toggle between collapsed and expanded chart detail. Default: z
    ToggleDetail,

    // Event editing
    /// Open the editor with a blank form to add an event. Default: a
    NewEvent,
    /// Open the editor pre-filled with the selected event. Default: e
    EditEvent,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_discriminate() {
        assert_ne!(KeyAction::SelectPrev, KeyAction::SelectNext);
        assert_ne!(KeyAction::NewEvent, KeyAction::EditEvent);
        assert_ne!(KeyAction::Open, KeyAction::Back);
    }

    #[test]
    fn key_action_is_copy() {
        let action = KeyAction::ToggleDetail;
        let copy = action;
        assert_eq!(action, copy);
    }
}
