//! Terminal presentation components used by the wheel CLI.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
