//! Top-level client pairing a wheel session with a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Session (participants, selector, planner, animator)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The session decides every outcome. The frontend only asks for spins,
//! feeds frame timestamps, and draws what the session reports.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_frontend_core::SpinSession;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives an assembled session and frontend
/// 2. `Client::run()` hands the session to the frontend
/// 3. Control returns once the user quits
pub struct Client {
    session: SpinSession,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until it exits.
    ///
    /// # Errors
    ///
    /// Returns whatever fatal error the frontend reports.
    pub async fn run(self) -> Result<()> {
        tracing::info!(
            names = self.session.participants().len(),
            "Handing session to frontend"
        );

        let mut frontend = self.frontend;
        frontend.run(self.session).await
    }
}
