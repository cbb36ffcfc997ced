//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Request a spin.
    Spin,
    /// Open the names editor.
    StartEditing,
    /// Leave the names editor.
    StopEditing,
    /// Append a character to the names draft.
    Insert(char),
    /// Start a new line in the names draft.
    Newline,
    /// Delete the last character of the names draft.
    Backspace,
    /// Close the result panel.
    Dismiss,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands for the current mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: &AppMode) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c'))
        {
            return KeyAction::Quit;
        }

        match mode {
            AppMode::Normal => self.handle_normal_mode(key),
            AppMode::Editing => self.handle_editing_mode(key),
            AppMode::Result { .. } => self.handle_result_mode(key),
        }
    }

    fn handle_normal_mode(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Enter => KeyAction::Spin,
            KeyCode::Char('e') => KeyAction::StartEditing,
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_editing_mode(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Esc => KeyAction::StopEditing,
            KeyCode::Enter => KeyAction::Newline,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(c) => KeyAction::Insert(c),
            _ => KeyAction::None,
        }
    }

    fn handle_result_mode(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => KeyAction::Dismiss,
            // spinning again hides the panel, as a fresh spin always does
            KeyCode::Char(' ') | KeyCode::Char('s') => KeyAction::Spin,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, mode: &AppMode) -> KeyAction {
        InputHandler::new().handle_key(KeyEvent::new(code, KeyModifiers::NONE), mode)
    }

    #[test]
    fn normal_mode_bindings() {
        let mode = AppMode::Normal;
        assert_eq!(press(KeyCode::Char(' '), &mode), KeyAction::Spin);
        assert_eq!(press(KeyCode::Char('e'), &mode), KeyAction::StartEditing);
        assert_eq!(press(KeyCode::Char('q'), &mode), KeyAction::Quit);
        assert_eq!(press(KeyCode::Char('x'), &mode), KeyAction::None);
    }

    #[test]
    fn editing_mode_captures_text_keys() {
        let mode = AppMode::Editing;
        assert_eq!(press(KeyCode::Char('q'), &mode), KeyAction::Insert('q'));
        assert_eq!(press(KeyCode::Char(' '), &mode), KeyAction::Insert(' '));
        assert_eq!(press(KeyCode::Enter, &mode), KeyAction::Newline);
        assert_eq!(press(KeyCode::Backspace, &mode), KeyAction::Backspace);
        assert_eq!(press(KeyCode::Esc, &mode), KeyAction::StopEditing);
    }

    #[test]
    fn result_mode_dismisses_or_respins() {
        let mode = AppMode::Result {
            winner: "Bob".into(),
        };
        assert_eq!(press(KeyCode::Esc, &mode), KeyAction::Dismiss);
        assert_eq!(press(KeyCode::Enter, &mode), KeyAction::Dismiss);
        assert_eq!(press(KeyCode::Char(' '), &mode), KeyAction::Spin);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let input = InputHandler::new();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let modes = [
            AppMode::Normal,
            AppMode::Editing,
            AppMode::Result { winner: "X".into() },
        ];
        for mode in modes {
            assert_eq!(input.handle_key(key, &mode), KeyAction::Quit);
        }
    }
}
