//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the current wheel geometry or
//! app state and renders it into a terminal frame. No widget mutates state.

pub mod footer;
pub mod header;
pub mod messages;
pub mod names;
pub mod result;
pub mod wheel;
