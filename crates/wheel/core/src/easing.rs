//! Ease-out timing curves for the deceleration.
use std::{fmt, str::FromStr};

use crate::error::ParseEasingError;

/// Ease-out curve `1 − (1 − t)^k`.
///
/// Angular velocity falls smoothly to zero at `t = 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// `k = 3`
    #[default]
    Cubic,
    /// `k = 4`
    Quartic,
}

impl Easing {
    pub const fn exponent(self) -> i32 {
        match self {
            Self::Cubic => 3,
            Self::Quartic => 4,
        }
    }

    /// Eased progress for linear progress `t`, clamped to `[0, 1]`.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(self.exponent())
    }
}

impl FromStr for Easing {
    type Err = ParseEasingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cubic" | "3" => Ok(Self::Cubic),
            "quartic" | "4" => Ok(Self::Quartic),
            other => Err(ParseEasingError(other.to_string())),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cubic => "cubic",
            Self::Quartic => "quartic",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [Easing::Cubic, Easing::Quartic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn curve_is_monotonic_and_front_loaded() {
        for easing in [Easing::Cubic, Easing::Quartic] {
            let mut previous = 0.0;
            for step in 1..=100 {
                let value = easing.apply(step as f64 / 100.0);
                assert!(value >= previous);
                previous = value;
            }
            // ease-out covers more than half the distance in the first half
            assert!(easing.apply(0.5) > 0.5);
        }
    }

    #[test]
    fn quartic_decelerates_harder_than_cubic() {
        assert!(Easing::Quartic.apply(0.3) > Easing::Cubic.apply(0.3));
        assert!((Easing::Cubic.apply(0.5) - 0.875).abs() < 1e-12);
        assert!((Easing::Quartic.apply(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::Cubic.apply(-1.0), 0.0);
        assert_eq!(Easing::Cubic.apply(2.0), 1.0);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Quartic".parse::<Easing>(), Ok(Easing::Quartic));
        assert_eq!(" cubic ".parse::<Easing>(), Ok(Easing::Cubic));
        assert!("linear".parse::<Easing>().is_err());
    }
}
