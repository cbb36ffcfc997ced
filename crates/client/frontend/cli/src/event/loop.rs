//! Event loop orchestrating user input, frame ticks, and rendering.
//!
//! This module coordinates three main concerns:
//! - Keyboard input processing (spin requests, name edits, panel dismissal)
//! - Advancing the wheel session once per frame
//! - Rendering whenever input or the animation changed something

use anyhow::Result;
use tokio::time::{self, Duration, MissedTickBehavior};
use wheel_core::Frame;

use crate::{
    clock::MonotonicClock, config::CliConfig, input::InputHandler, presentation::terminal::Tui,
    state::AppState,
};
use client_frontend_core::{
    SpinSession,
    message::{MessageEntry, MessageLevel, MessageLog},
};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the session and all presentation state.
///
/// The session is only ever touched from this loop, one frame at a time.
pub struct EventLoop {
    pub(crate) session: SpinSession,
    pub(crate) clock: MonotonicClock,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    pub(crate) messages: MessageLog,
    /// CLI UI configuration
    pub(crate) cli_config: CliConfig,
    pub(crate) needs_redraw: bool,
}

impl EventLoop {
    pub fn new(
        session: SpinSession,
        app_state: AppState,
        messages: MessageLog,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            session,
            clock: MonotonicClock::new(),
            input: InputHandler::new(),
            app_state,
            messages,
            cli_config,
            needs_redraw: true,
        }
    }

    /// Run until the user quits.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let mut ticker = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            if self.handle_input_tick()? {
                break;
            }

            self.advance_frame();

            if std::mem::take(&mut self.needs_redraw) {
                self.render(terminal)?;
            }
        }

        Ok(())
    }

    fn advance_frame(&mut self) {
        match self.session.advance(&self.clock) {
            Frame::Spinning { .. } => self.needs_redraw = true,
            Frame::Completed { outcome, .. } => {
                self.messages.push(MessageEntry::new(
                    format!("{} wins!", outcome.winning_name),
                    Some(self.app_state.spins),
                    MessageLevel::Info,
                ));
                self.app_state.show_result(outcome.winning_name);
                self.needs_redraw = true;
            }
            Frame::Idle { .. } => {}
        }
    }
}
