//! Frontend configuration structures and loaders.
//!
//! Everything here is read once at startup. Loaders take a variable lookup so
//! tests can supply values without touching the process environment.

use std::{env, path::PathBuf, str::FromStr};

use wheel_core::{BiasConfig, Easing, SpinConfig, WheelConfig};

/// Wheel behaviour: spin tuning, bias targets and the rng seed.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    pub wheel: WheelConfig,
    /// Fixed seed for reproducible spins; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WHEEL_WIN_TARGET` - Name favoured by the wheel (default: unset)
    /// - `WHEEL_AVOID_TARGET` - Name the wheel steers away from (default: unset)
    /// - `WHEEL_WIN_PERCENT` - Win chance for the win target, 0-100 (default: 100)
    /// - `WHEEL_FULL_SPINS` - Whole turns per spin, at least 8 (default: 10)
    /// - `WHEEL_SPIN_DURATION_MS` - Animation length (default: 4000)
    /// - `WHEEL_EASING` - `cubic` or `quartic` (default: cubic)
    /// - `WHEEL_SEED` - Deterministic rng seed (default: unset)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut spin = SpinConfig::new();
        if let Some(full_spins) = parse::<u32>(&lookup, "WHEEL_FULL_SPINS") {
            spin = spin.with_full_spins(full_spins);
        }
        if let Some(duration_ms) = parse::<u64>(&lookup, "WHEEL_SPIN_DURATION_MS") {
            spin = spin.with_duration_ms(duration_ms);
        }
        if let Some(easing) = parse::<Easing>(&lookup, "WHEEL_EASING") {
            spin = spin.with_easing(easing);
        }

        let mut bias = BiasConfig::fair();
        if let Some(name) = lookup("WHEEL_WIN_TARGET") {
            bias = bias.with_win_target(name);
        }
        if let Some(name) = lookup("WHEEL_AVOID_TARGET") {
            bias = bias.with_avoid_target(name);
        }
        if let Some(percent) = parse::<u8>(&lookup, "WHEEL_WIN_PERCENT") {
            bias = bias.with_win_percent(percent);
        }

        Self {
            wheel: WheelConfig::new(spin, bias),
            seed: parse::<u64>(&lookup, "WHEEL_SEED"),
        }
    }
}

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub names: NamesConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, names: NamesConfig) -> Self {
        Self { messages, names }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `WHEEL_NAMES_FILE` - Initial names, one per line (default: built-in sample)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(capacity) = parse::<usize>(&lookup, "CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config.names.file = lookup("WHEEL_NAMES_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Where the initial participant text comes from.
#[derive(Clone, Debug, Default)]
pub struct NamesConfig {
    pub file: Option<PathBuf>,
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use wheel_core::BiasPolicy;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_fair_defaults() {
        let config = SessionConfig::from_vars(vars(&[]));
        assert!(config.wheel.bias.is_fair());
        assert_eq!(config.wheel.spin, SpinConfig::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn bias_and_spin_values_are_read() {
        let config = SessionConfig::from_vars(vars(&[
            ("WHEEL_WIN_TARGET", "Ved"),
            ("WHEEL_AVOID_TARGET", "Purvaj"),
            ("WHEEL_WIN_PERCENT", "60"),
            ("WHEEL_FULL_SPINS", "3"),
            ("WHEEL_SPIN_DURATION_MS", "2500"),
            ("WHEEL_EASING", "quartic"),
            ("WHEEL_SEED", "42"),
        ]));

        assert_eq!(
            config.wheel.bias.policies(),
            vec![
                BiasPolicy::weighted_win("Ved", 60),
                BiasPolicy::forced_avoid("Purvaj")
            ]
        );
        assert_eq!(config.wheel.spin.full_spins, SpinConfig::MIN_FULL_SPINS);
        assert_eq!(config.wheel.spin.duration_ms, 2500);
        assert_eq!(config.wheel.spin.easing, Easing::Quartic);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = SessionConfig::from_vars(vars(&[
            ("WHEEL_WIN_PERCENT", "lots"),
            ("WHEEL_EASING", "bouncy"),
        ]));
        assert_eq!(config.wheel.bias.win_percent, BiasConfig::DEFAULT_WIN_PERCENT);
        assert_eq!(config.wheel.spin.easing, Easing::Cubic);
    }

    #[test]
    fn frontend_reads_capacity_and_names_file() {
        let config = FrontendConfig::from_vars(vars(&[
            ("CLI_MESSAGE_CAPACITY", "0"),
            ("WHEEL_NAMES_FILE", "/tmp/names.txt"),
        ]));
        assert_eq!(config.messages.capacity, 1);
        assert_eq!(config.names.file, Some(PathBuf::from("/tmp/names.txt")));
    }
}
