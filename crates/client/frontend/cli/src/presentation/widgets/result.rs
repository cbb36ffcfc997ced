//! Modal panel announcing the winner.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, winner: &str, theme: &RatatuiTheme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(winner.to_string(), theme.winner_style())),
        Line::from(""),
        Line::from("[Enter/ESC] Close"),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Winner "));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
