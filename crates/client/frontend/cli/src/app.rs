//! Glue code tying the wheel session to the terminal UI.
use anyhow::Result;
use async_trait::async_trait;

use crate::{config::CliConfig, event::EventLoop, presentation::terminal, state::AppState};
use client_frontend_core::{Frontend, FrontendConfig, SpinSession, message::MessageLog};

/// Terminal frontend.
///
/// Owns only presentation configuration; the session arrives in [`Frontend::run`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, session: SpinSession) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        let app_state = AppState::new(session.participants().to_text());

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text(format!(
            "{} names on the wheel. Press [Space] to spin.",
            session.participants().len()
        ));

        let event_loop = EventLoop::new(session, app_state, messages, self.cli_config.clone());

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting");

        Ok(())
    }
}
