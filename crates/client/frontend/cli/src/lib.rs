//! Terminal UI frontend for the prize wheel.
//!
//! This crate provides a terminal-based user interface for the wheel.
//! It implements the `client_frontend_core::Frontend` trait for pure UI
//! rendering.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives the wheel session from the composition root
//! - Turns key presses into spin requests and name edits
//! - Advances the session once per frame and draws what it reports

mod app;
mod clock;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use clock::MonotonicClock;
pub use config::CliConfig;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
