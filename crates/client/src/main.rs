//! Prize wheel client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from `.env` and the process environment
//! 2. The wheel session (names, bias policies, rng)
//! 3. A frontend (CLI today)
//!
//! All components are built independently and injected into the Client container.
//!
//! # Examples
//!
//! ```bash
//! # Fair wheel with the sample names
//! cargo run -p wheel-client
//!
//! # Names from a file, "Bob" wins 70% of spins, reproducible draws
//! WHEEL_NAMES_FILE=names.txt WHEEL_WIN_TARGET=Bob WHEEL_WIN_PERCENT=70 \
//!     WHEEL_SEED=42 cargo run -p wheel-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use client_frontend_core::{SessionConfig, build_session, names::load_names};
    use wheel_client::Client;

    // 1. Load configuration from environment
    let session_config = SessionConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the file writer on exit
    let _log_guard = logging::setup_logging(cli_config.log_dir.as_deref())?;

    tracing::info!("Starting prize wheel");
    tracing::info!(
        policies = session_config.wheel.bias.policies().len(),
        seeded = session_config.seed.is_some(),
        "Session configuration loaded"
    );

    // 3. Build the session
    let names = load_names(&frontend_config.names)?;
    let session = build_session(&session_config, &names);
    tracing::info!(names = session.participants().len(), "Session built");

    // 4. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder()
        .session(session)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
