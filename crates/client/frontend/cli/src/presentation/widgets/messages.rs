//! Messages widget displaying recent spin events.

use client_frontend_core::message::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the message log panel.
///
/// `messages` arrive newest first and are drawn bottom-to-top, so the newest
/// sits at the bottom.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    messages: &[MessageEntry],
    panel_height: u16,
    theme: &RatatuiTheme,
) {
    let mut items: Vec<ListItem> = messages
        .iter()
        .map(|entry| ListItem::new(format_message(entry)).style(theme.style_message(entry.level)))
        .collect();

    // Pad with empty lines to maintain consistent height
    while items.len() < panel_height as usize {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

/// Format a message entry with its spin number, if any.
fn format_message(entry: &MessageEntry) -> String {
    match entry.spin {
        Some(spin) => format!("[#{}] {}", spin, entry.text),
        None => entry.text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::message::MessageLevel;

    #[test]
    fn spin_number_prefixes_text() {
        let entry = MessageEntry::new("Bob wins!", Some(3), MessageLevel::Info);
        assert_eq!(format_message(&entry), "[#3] Bob wins!");

        let plain = MessageEntry::new("hello", None, MessageLevel::Warning);
        assert_eq!(format_message(&plain), "hello");
    }
}
