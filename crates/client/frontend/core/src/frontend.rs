//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

use crate::session::SpinSession;

/// Frontend abstraction for UI layers.
///
/// A frontend takes ownership of the wheel session, feeds it spin requests
/// and frame timestamps, and renders what it reports. Frontends never pick
/// winners themselves.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error (terminal
    /// setup, rendering I/O).
    async fn run(&mut self, session: SpinSession) -> Result<()>;
}
