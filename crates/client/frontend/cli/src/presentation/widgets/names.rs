//! Names panel listing participants, or the editor while editing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use wheel_core::WheelGeometry;

use crate::{
    presentation::theme::RatatuiTheme,
    state::{AppMode, AppState},
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    geometry: &WheelGeometry,
    app_state: &AppState,
    theme: &RatatuiTheme,
) {
    if app_state.mode == AppMode::Editing {
        render_editor(frame, area, &app_state.draft);
    } else {
        render_list(frame, area, geometry, theme);
    }
}

fn render_list(frame: &mut Frame, area: Rect, geometry: &WheelGeometry, theme: &RatatuiTheme) {
    let current = geometry.pointer_slice().map(|slice| slice.index);

    let items: Vec<ListItem> = geometry
        .slices
        .iter()
        .map(|slice| {
            let line = Line::from(vec![
                Span::styled(
                    "■ ",
                    Style::default().fg(theme.slice_color(slice.color)),
                ),
                Span::raw(slice.label.to_string()),
            ]);
            let item = ListItem::new(line);
            if Some(slice.index) == current {
                item.style(theme.highlight_style())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Names"));
    frame.render_widget(list, area);
}

/// One name per line; a block cursor marks the insertion point.
fn render_editor(frame: &mut Frame, area: Rect, draft: &str) {
    let mut lines: Vec<Line> = draft.split('\n').map(|l| Line::from(l.to_string())).collect();
    let cursor = Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED));
    match lines.last_mut() {
        Some(last) => last.spans.push(cursor),
        None => lines.push(Line::from(cursor)),
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightYellow))
            .title("Names (editing)"),
    );
    frame.render_widget(paragraph, area);
}
