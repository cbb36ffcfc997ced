//! CLI-specific configuration for terminal UI.
use std::{env, path::PathBuf};

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Overrides the platform cache directory for log files.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `CLI_NAMES_PANEL_WIDTH` - Names panel width in columns (default: 28)
    /// - `WHEEL_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        if let Some(width) = read_env::<u16>("CLI_NAMES_PANEL_WIDTH") {
            config.ui.names_panel_width = width.max(12);
        }

        config.log_dir = env::var_os("WHEEL_LOG_DIR").map(PathBuf::from);

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Width of the names panel in columns (including borders).
    pub names_panel_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            names_panel_width: 28,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
