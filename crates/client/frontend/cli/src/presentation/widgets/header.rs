//! Header widget displaying wheel status and app mode.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use wheel_core::WheelGeometry;

use crate::state::{AppMode, AppState};

/// Render the header panel with name count, spin count, and status.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    geometry: &WheelGeometry,
    app_state: &AppState,
    spinning: bool,
) {
    let mode_text = match &app_state.mode {
        AppMode::Normal => "",
        AppMode::Editing => " [EDITING NAMES]",
        AppMode::Result { .. } => " [RESULT]",
    };

    let (status, status_color) = if spinning {
        ("Spinning", Color::LightYellow)
    } else {
        ("Ready", Color::LightGreen)
    };

    let text = vec![Line::from(vec![
        Span::raw("Names: "),
        Span::styled(
            geometry.slices.len().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | Spins: "),
        Span::styled(
            app_state.spins.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | "),
        Span::styled(
            status,
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            mode_text,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Prize Wheel"));

    frame.render_widget(paragraph, area);
}
