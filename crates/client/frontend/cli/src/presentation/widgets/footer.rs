//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppMode, AppState};

/// Render the footer panel with key bindings help.
pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState, spinning: bool) {
    let text = match &app_state.mode {
        AppMode::Normal if spinning => vec![Line::from(vec![
            Span::raw("Spinning... | "),
            Span::raw("[q] Quit"),
        ])],
        AppMode::Normal => vec![Line::from(vec![
            Span::raw("[Space/s/Enter] Spin | "),
            Span::raw("[e] Edit names | "),
            Span::raw("[q/ESC] Quit"),
        ])],
        AppMode::Editing => vec![Line::from(vec![
            Span::raw("Type one name per line | "),
            Span::raw("[Enter] New line | "),
            Span::raw("[Backspace] Delete | "),
            Span::raw("[ESC] Done"),
        ])],
        AppMode::Result { .. } => vec![Line::from(vec![
            Span::raw("[Enter/ESC] Close | "),
            Span::raw("[Space/s] Spin again | "),
            Span::raw("[q] Quit"),
        ])],
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
