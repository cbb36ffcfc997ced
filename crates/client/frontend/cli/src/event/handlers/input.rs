//! Keyboard and terminal event handlers.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::time::Duration;
use wheel_core::SpinError;

use super::super::EventLoop;
use crate::{input::KeyAction, state::AppMode};
use client_frontend_core::message::{MessageEntry, MessageLevel};

impl EventLoop {
    /// Drain pending terminal events. Returns `true` when the user quit.
    pub(in crate::event) fn handle_input_tick(&mut self) -> Result<bool> {
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(true);
                    }
                }
                // redraw only; never touches the spin
                Event::Resize(_, _) => self.needs_redraw = true,
                _ => {}
            }
        }
        Ok(false)
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let action = self.input.handle_key(key, &self.app_state.mode);
        if action != KeyAction::None {
            self.needs_redraw = true;
        }

        match action {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                return true;
            }
            KeyAction::Spin => self.spin(),
            KeyAction::StartEditing => self.start_editing(),
            KeyAction::StopEditing => {
                self.app_state.mode = AppMode::Normal;
                self.messages.push_text(format!(
                    "{} names on the wheel",
                    self.session.participants().len()
                ));
            }
            KeyAction::Insert(c) => {
                self.app_state.insert_char(c);
                self.sync_names();
            }
            KeyAction::Newline => {
                self.app_state.newline();
                self.sync_names();
            }
            KeyAction::Backspace => {
                if self.app_state.backspace() {
                    self.sync_names();
                }
            }
            KeyAction::Dismiss => {
                self.app_state.dismiss();
                self.session.dismiss_outcome();
            }
            KeyAction::None => {}
        }

        false
    }

    fn spin(&mut self) {
        match self.session.request_spin(&self.clock) {
            Ok(_) => {
                self.app_state.spins += 1;
                self.app_state.dismiss();
                self.messages.push(MessageEntry::new(
                    "Spinning...",
                    Some(self.app_state.spins),
                    MessageLevel::Info,
                ));
            }
            Err(SpinError::AlreadySpinning) => {}
            Err(SpinError::NoParticipants) => {
                self.messages
                    .push_warning("Add some names first (press e to edit)");
            }
        }
    }

    fn start_editing(&mut self) {
        if self.session.is_spinning() {
            self.messages
                .push_warning("Names are locked while the wheel spins");
            return;
        }
        self.app_state.mode = AppMode::Editing;
    }

    /// Rebuild the wheel from the draft after every edit.
    fn sync_names(&mut self) {
        if let Err(err) = self.session.set_text(&self.app_state.draft) {
            self.messages
                .push(MessageEntry::new(err.to_string(), None, MessageLevel::Error));
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{config::CliConfig, state::AppState};
    use client_frontend_core::{SessionConfig, build_session, message::MessageLog};

    fn event_loop(names: &str) -> EventLoop {
        let config = SessionConfig {
            seed: Some(5),
            ..SessionConfig::default()
        };
        let session = build_session(&config, names);
        EventLoop::new(
            session,
            AppState::new(names),
            MessageLog::new(16),
            CliConfig::default(),
        )
    }

    fn press(event_loop: &mut EventLoop, code: KeyCode) -> bool {
        event_loop.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn spin_on_empty_wheel_warns() {
        let mut event_loop = event_loop("");
        press(&mut event_loop, KeyCode::Char(' '));

        assert!(!event_loop.session.is_spinning());
        let latest = event_loop.messages.recent(1).next().unwrap();
        assert_eq!(latest.level, MessageLevel::Warning);
    }

    #[test]
    fn editing_rebuilds_the_wheel() {
        let mut event_loop = event_loop("Ann");
        press(&mut event_loop, KeyCode::Char('e'));
        assert_eq!(event_loop.app_state.mode, AppMode::Editing);

        press(&mut event_loop, KeyCode::Enter);
        press(&mut event_loop, KeyCode::Char('B'));
        press(&mut event_loop, KeyCode::Char('o'));
        assert_eq!(event_loop.session.participants().as_slice(), ["Ann", "Bo"]);

        press(&mut event_loop, KeyCode::Esc);
        assert_eq!(event_loop.app_state.mode, AppMode::Normal);
    }

    #[test]
    fn names_are_locked_while_spinning() {
        let mut event_loop = event_loop("Ann\nBob");
        press(&mut event_loop, KeyCode::Char('s'));
        assert!(event_loop.session.is_spinning());
        assert_eq!(event_loop.app_state.spins, 1);

        press(&mut event_loop, KeyCode::Char('e'));
        assert_eq!(event_loop.app_state.mode, AppMode::Normal);

        // second request is ignored, not counted
        press(&mut event_loop, KeyCode::Char('s'));
        assert_eq!(event_loop.app_state.spins, 1);
    }

    #[test]
    fn quit_key_stops_the_loop() {
        let mut event_loop = event_loop("Ann");
        assert!(press(&mut event_loop, KeyCode::Char('q')));
    }
}
