//! Application state for mode management and UI context.

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Wheel visible; spin and edit keys active.
    Normal,
    /// Typing into the names editor. Every keystroke rebuilds the wheel.
    Editing,
    /// Result panel shown over the wheel.
    Result { winner: String },
}

impl AppMode {
    /// Returns true if a modal panel is drawn on top of the wheel.
    pub fn is_overlay(&self) -> bool {
        matches!(self, AppMode::Result { .. })
    }
}

/// Mutable application state tracking current mode and the names draft.
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: AppMode,
    /// Raw names text as typed, blank lines included.
    pub draft: String,
    /// Number of spins started this session.
    pub spins: u64,
}

impl AppState {
    pub fn new(draft: impl Into<String>) -> Self {
        Self {
            mode: AppMode::Normal,
            draft: draft.into(),
            spins: 0,
        }
    }

    pub fn show_result(&mut self, winner: impl Into<String>) {
        self.mode = AppMode::Result {
            winner: winner.into(),
        };
    }

    /// Close the result panel, if open.
    pub fn dismiss(&mut self) {
        if self.mode.is_overlay() {
            self.mode = AppMode::Normal;
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn newline(&mut self) {
        self.draft.push('\n');
    }

    /// Remove the last character; returns false if the draft was empty.
    pub fn backspace(&mut self) -> bool {
        self.draft.pop().is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_only_closes_result_panel() {
        let mut state = AppState::new("Ann");
        state.mode = AppMode::Editing;
        state.dismiss();
        assert_eq!(state.mode, AppMode::Editing);

        state.show_result("Ann");
        assert!(state.mode.is_overlay());
        state.dismiss();
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn draft_editing() {
        let mut state = AppState::new("Ann");
        state.newline();
        state.insert_char('B');
        assert_eq!(state.draft, "Ann\nB");
        assert!(state.backspace());
        assert!(state.backspace());
        assert_eq!(state.draft, "Ann");

        let mut empty = AppState::default();
        assert!(!empty.backspace());
    }
}
