//! UI rendering entry point.
//!
//! Composes every widget into the full terminal UI.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use wheel_core::WheelGeometry;

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::{AppMode, AppState},
};
use client_frontend_core::message::MessageLog;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub geometry: &'a WheelGeometry<'a>,
    pub app_state: &'a AppState,
    pub messages: &'a MessageLog,
    pub spinning: bool,
    pub message_panel_height: u16,
    pub names_panel_width: u16,
}

/// Render the wheel UI, with the result panel on top when one is open.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| {
        render_wheel_ui(frame, ctx, &theme);

        if let AppMode::Result { winner } = &ctx.app_state.mode {
            let area = centered_rect(40, 30, frame.area());
            widgets::result::render(frame, area, winner, &theme);
        }
    })?;

    Ok(())
}

/// Header, wheel with names beside it, messages, footer.
fn render_wheel_ui(frame: &mut ratatui::Frame, ctx: &RenderContext, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(0),                           // Wheel + names
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(3),                        // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.geometry, ctx.app_state, ctx.spinning);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(ctx.names_panel_width),
        ])
        .split(chunks[1]);

    widgets::wheel::render(frame, body[0], ctx.geometry, theme);
    widgets::names::render(frame, body[1], ctx.geometry, ctx.app_state, theme);

    let inner_height = ctx.message_panel_height.saturating_sub(2);
    let recent: Vec<_> = ctx.messages.recent(inner_height as usize).cloned().collect();
    widgets::messages::render(frame, chunks[2], &recent, inner_height, theme);

    widgets::footer::render(frame, chunks[3], ctx.app_state, ctx.spinning);
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
