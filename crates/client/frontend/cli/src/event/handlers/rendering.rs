//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render the current session and app state.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let geometry = self.session.geometry();

        let ctx = ui::RenderContext {
            geometry: &geometry,
            app_state: &self.app_state,
            messages: &self.messages,
            spinning: self.session.is_spinning(),
            message_panel_height: self.cli_config.ui.message_panel_height,
            names_panel_width: self.cli_config.ui.names_panel_width,
        };

        ui::render(terminal, &ctx)
    }
}
