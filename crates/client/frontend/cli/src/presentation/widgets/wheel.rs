//! Wheel widget drawing the slices on a braille canvas.
//!
//! Angles follow the core convention with the pointer fixed at angle 0 on
//! the right. Screen y grows downward, so slices are laid out clockwise.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Context, Line as Segment},
    },
};
use wheel_core::{Slice, WheelGeometry};

use crate::presentation::theme::RatatuiTheme;

/// Canvas bounds on both axes; the wheel has radius 1.
const BOUNDS: f64 = 1.2;
/// Radius at which slice labels are centred.
const LABEL_RADIUS: f64 = 0.62;
/// Angular distance between the spokes that fill a slice.
const FILL_STEP: f64 = 0.015;

pub fn render(frame: &mut Frame, area: Rect, geometry: &WheelGeometry, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL).title("Wheel");

    if geometry.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from("The wheel is empty."),
            Line::from("Press [e] to add names."),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-BOUNDS, BOUNDS])
        .y_bounds([-BOUNDS, BOUNDS])
        .paint(|ctx| {
            for slice in &geometry.slices {
                fill_slice(ctx, slice, theme);
            }
            ctx.layer();
            draw_pointer(ctx, theme);
            for slice in &geometry.slices {
                draw_label(ctx, slice, theme);
            }
        });

    frame.render_widget(canvas, square(inner));
}

/// Project a polar coordinate onto the canvas.
fn point(angle: f64, radius: f64) -> (f64, f64) {
    (radius * angle.cos(), -radius * angle.sin())
}

fn fill_slice(ctx: &mut Context, slice: &Slice, theme: &RatatuiTheme) {
    let color = theme.slice_color(slice.color);
    let mut angle = slice.start_angle;
    while angle < slice.end_angle {
        let (x, y) = point(angle, 1.0);
        ctx.draw(&Segment {
            x1: 0.0,
            y1: 0.0,
            x2: x,
            y2: y,
            color,
        });
        angle += FILL_STEP;
    }
}

/// Small arrow just outside the rim, tip touching the wheel at angle 0.
fn draw_pointer(ctx: &mut Context, theme: &RatatuiTheme) {
    let color = theme.pointer_color();
    let tip = (1.0, 0.0);
    for (x, y) in [(1.18, 0.08), (1.18, -0.08), (1.18, 0.0)] {
        ctx.draw(&Segment {
            x1: tip.0,
            y1: tip.1,
            x2: x,
            y2: y,
            color,
        });
    }
    ctx.draw(&Segment {
        x1: 1.18,
        y1: 0.08,
        x2: 1.18,
        y2: -0.08,
        color,
    });
}

fn draw_label(ctx: &mut Context, slice: &Slice, theme: &RatatuiTheme) {
    let (x, y) = point(slice.mid_angle(), LABEL_RADIUS);
    let label: String = slice.label.trim().chars().take(12).collect();
    let style: Style = theme.label_style(slice.color);
    ctx.print(x, y, Line::from(Span::styled(label, style)));
}

/// Largest area with a 2:1 cell aspect ratio, centred in `area`.
///
/// Terminal cells are roughly twice as tall as they are wide, so this keeps
/// the wheel round.
fn square(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_keeps_two_to_one_cells_centred() {
        let area = Rect::new(0, 0, 100, 20);
        let fitted = square(area);
        assert_eq!((fitted.width, fitted.height), (40, 20));
        assert_eq!(fitted.x, 30);

        let tall = square(Rect::new(5, 5, 30, 40));
        assert_eq!((tall.width, tall.height), (30, 15));
        assert_eq!(tall.y, 5 + 12);
    }

    #[test]
    fn angle_zero_is_on_the_right() {
        let (x, y) = point(0.0, 1.0);
        assert!((x - 1.0).abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }
}
