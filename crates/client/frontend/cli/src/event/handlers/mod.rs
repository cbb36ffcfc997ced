//! Event loop handlers split by concern.
//!
//! - `input`: keyboard and terminal events
//! - `rendering`: drawing the current state

mod input;
mod rendering;
