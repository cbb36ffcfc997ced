//! Bias policies steering the outcome toward or away from a name.

/// Rule governing whether and how the outcome is weighted.
///
/// Every biased variant degrades to [`BiasPolicy::Fair`] when its target
/// is empty or absent from the participant list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BiasPolicy {
    #[default]
    Fair,
    /// Always select `name` when present.
    ForcedWin(String),
    /// Never select `name` while any other entry exists.
    ForcedAvoid(String),
    /// Select `name` with probability `percent`%, otherwise pick uniformly
    /// among the other entries.
    WeightedWin { name: String, percent: u8 },
}

impl BiasPolicy {
    /// Largest meaningful win percentage.
    pub const MAX_PERCENT: u8 = 100;

    pub fn forced_win(name: impl Into<String>) -> Self {
        Self::ForcedWin(name.into())
    }

    pub fn forced_avoid(name: impl Into<String>) -> Self {
        Self::ForcedAvoid(name.into())
    }

    /// Weighted win with `percent` clamped to `0..=100`.
    pub fn weighted_win(name: impl Into<String>, percent: u8) -> Self {
        Self::WeightedWin {
            name: name.into(),
            percent: percent.min(Self::MAX_PERCENT),
        }
    }

    /// Name the policy refers to, if any. Empty names count as unset.
    pub fn target(&self) -> Option<&str> {
        let name = match self {
            Self::Fair => return None,
            Self::ForcedWin(name) | Self::ForcedAvoid(name) => name,
            Self::WeightedWin { name, .. } => name,
        };
        (!name.is_empty()).then_some(name.as_str())
    }

    /// Short label for logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fair => "fair",
            Self::ForcedWin(_) => "forced-win",
            Self::ForcedAvoid(_) => "forced-avoid",
            Self::WeightedWin { .. } => "weighted-win",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_target_is_unset() {
        assert_eq!(BiasPolicy::forced_win("").target(), None);
        assert_eq!(BiasPolicy::forced_avoid("").target(), None);
        assert_eq!(BiasPolicy::Fair.target(), None);
        assert_eq!(BiasPolicy::forced_win("Ved").target(), Some("Ved"));
    }

    #[test]
    fn weighted_percent_is_clamped() {
        assert_eq!(
            BiasPolicy::weighted_win("Ved", 250),
            BiasPolicy::WeightedWin {
                name: "Ved".into(),
                percent: 100
            }
        );
    }
}
