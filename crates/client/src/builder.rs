//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use client_frontend_core::SpinSession;

/// Builder for constructing a Client with proper validation.
///
/// Both the session and the frontend are required; `build()` fails fast
/// when either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    session: Option<SpinSession>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wheel session (required).
    ///
    /// Usually built with `client_frontend_core::build_session`.
    pub fn session(mut self, session: SpinSession) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the session or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let session = self
            .session
            .context("Session is required. Use .session() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { session, frontend })
    }
}
