//! Spin tuning and bias configuration.
//!
//! Built once at startup and handed to the session by value; nothing in the
//! crate reads configuration from globals.
use crate::{bias::BiasPolicy, easing::Easing};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelConfig {
    pub spin: SpinConfig,
    pub bias: BiasConfig,
}

impl WheelConfig {
    pub fn new(spin: SpinConfig, bias: BiasConfig) -> Self {
        Self { spin, bias }
    }
}

/// Animation parameters for a single spin.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpinConfig {
    /// Whole turns added before the landing turn. Purely visual.
    pub full_spins: u32,
    /// Wall-clock length of the animation.
    pub duration_ms: u64,
    pub easing: Easing,
}

impl SpinConfig {
    pub const DEFAULT_FULL_SPINS: u32 = 10;
    pub const MIN_FULL_SPINS: u32 = 8;
    pub const DEFAULT_DURATION_MS: u64 = 4000;

    /// Landing offset bounds, as fractions of one slice.
    pub const OFFSET_MIN_FRACTION: f64 = 0.1;
    pub const OFFSET_MAX_FRACTION: f64 = 0.9;

    pub fn new() -> Self {
        Self {
            full_spins: Self::DEFAULT_FULL_SPINS,
            duration_ms: Self::DEFAULT_DURATION_MS,
            easing: Easing::default(),
        }
    }

    /// Set the number of full turns, raised to [`Self::MIN_FULL_SPINS`].
    pub fn with_full_spins(mut self, full_spins: u32) -> Self {
        self.full_spins = full_spins.max(Self::MIN_FULL_SPINS);
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Bias targets, applied in precedence order.
///
/// A win target beats an avoid target when both are present in the list.
/// Targets that are unset, empty, or absent from the list are skipped; with
/// nothing applicable the spin is fair.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiasConfig {
    pub win_target: Option<String>,
    pub avoid_target: Option<String>,
    /// Chance for the win target; `100` forces the win.
    pub win_percent: u8,
}

impl BiasConfig {
    pub const DEFAULT_WIN_PERCENT: u8 = 100;

    /// Unbiased configuration.
    pub fn fair() -> Self {
        Self {
            win_target: None,
            avoid_target: None,
            win_percent: Self::DEFAULT_WIN_PERCENT,
        }
    }

    pub fn with_win_target(mut self, name: impl Into<String>) -> Self {
        self.win_target = Some(name.into());
        self
    }

    pub fn with_avoid_target(mut self, name: impl Into<String>) -> Self {
        self.avoid_target = Some(name.into());
        self
    }

    pub fn with_win_percent(mut self, percent: u8) -> Self {
        self.win_percent = percent.min(BiasPolicy::MAX_PERCENT);
        self
    }

    /// Policies in precedence order. Empty targets are dropped.
    pub fn policies(&self) -> Vec<BiasPolicy> {
        let mut policies = Vec::with_capacity(2);

        if let Some(name) = non_empty(&self.win_target) {
            if self.win_percent >= BiasPolicy::MAX_PERCENT {
                policies.push(BiasPolicy::forced_win(name));
            } else {
                policies.push(BiasPolicy::weighted_win(name, self.win_percent));
            }
        }

        if let Some(name) = non_empty(&self.avoid_target) {
            policies.push(BiasPolicy::forced_avoid(name));
        }

        policies
    }

    pub fn is_fair(&self) -> bool {
        self.policies().is_empty()
    }
}

impl Default for BiasConfig {
    fn default() -> Self {
        Self::fair()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|name| !name.is_empty())
}
