//! Initial participant text.
use std::fs;

use anyhow::{Context, Result};

use crate::config::NamesConfig;

/// Shown when no names file is configured.
pub const SAMPLE_NAMES: &str = "Ann\nBob\nCid\nDee\nEve\nFay";

/// Load the raw multi-line text the wheel starts with.
pub fn load_names(config: &NamesConfig) -> Result<String> {
    let Some(path) = &config.file else {
        return Ok(SAMPLE_NAMES.to_string());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read names file {}", path.display()))?;
    tracing::info!("Loaded names from {}", path.display());
    Ok(text)
}
