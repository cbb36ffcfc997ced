//! Ratatui styling for the wheel UI.
//!
//! Slice colours come from the core palette; everything else is chosen here.

use client_frontend_core::message::MessageLevel;
use ratatui::style::{Color, Modifier, Style};
use wheel_core::Rgb;

/// Consistent colour scheme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn slice_color(&self, rgb: Rgb) -> Color {
        let Rgb(r, g, b) = rgb;
        Color::Rgb(r, g, b)
    }

    /// Label drawn on top of a slice: dark text on light slices and vice versa.
    pub fn label_style(&self, rgb: Rgb) -> Style {
        let fg = if luminance(rgb) > 140.0 {
            Color::Black
        } else {
            Color::White
        };
        Style::default()
            .fg(fg)
            .bg(self.slice_color(rgb))
            .add_modifier(Modifier::BOLD)
    }

    pub fn pointer_color(&self) -> Color {
        Color::White
    }

    /// Row of the slice currently under the pointer.
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::REVERSED)
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn winner_style(&self) -> Style {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    }
}

fn luminance(Rgb(r, g, b): Rgb) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}
