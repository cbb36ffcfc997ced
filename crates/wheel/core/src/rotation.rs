//! Rotation planning: mapping a winning index to a landing angle.
//!
//! Slice `i` is drawn from `angle + i·slice` to `angle + (i+1)·slice` and the
//! pointer sits at angle `0`. To bring slice `i` under the pointer the wheel
//! must rest at `−(i·slice + offset)` modulo a full turn, with the offset
//! kept strictly inside the slice.
use std::f64::consts::TAU;

use crate::{config::SpinConfig, env::RandomSource};

/// Target rotation for one spin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationPlan {
    /// Absolute rotation reached at the end of the animation, in radians.
    pub target_angle: f64,
    pub duration_ms: u64,
}

impl RotationPlan {
    /// Resting angle once the animation completes, in `[0, 2π)`.
    pub fn resting_angle(&self) -> f64 {
        normalize(self.target_angle)
    }
}

/// Angular width of one slice. A count of zero is treated as one slice.
#[inline]
pub fn slice_angle(slice_count: usize) -> f64 {
    TAU / slice_count.max(1) as f64
}

/// Reduce an angle into `[0, 2π)`.
#[inline]
pub fn normalize(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if reduced >= TAU { 0.0 } else { reduced }
}

/// Index of the slice under the pointer when the wheel rests at `angle`.
pub fn slice_at_pointer(angle: f64, slice_count: usize) -> usize {
    if slice_count == 0 {
        return 0;
    }
    let relative = normalize(-angle);
    let index = (relative / slice_angle(slice_count)).floor() as usize;
    index.min(slice_count - 1)
}

/// Computes landing angles for winning indices.
#[derive(Clone, Debug)]
pub struct RotationPlanner {
    full_spins: u32,
    duration_ms: u64,
}

impl RotationPlanner {
    pub fn new(config: &SpinConfig) -> Self {
        Self {
            full_spins: config.full_spins,
            duration_ms: config.duration_ms,
        }
    }

    pub fn full_spins(&self) -> u32 {
        self.full_spins
    }

    /// Plan a spin landing on `winning_index`, drawing a random offset
    /// within the slice.
    pub fn plan<R: RandomSource + ?Sized>(
        &self,
        winning_index: usize,
        slice_count: usize,
        rng: &mut R,
    ) -> RotationPlan {
        let fraction = rng.between(
            SpinConfig::OFFSET_MIN_FRACTION,
            SpinConfig::OFFSET_MAX_FRACTION,
        );
        self.plan_with_offset(winning_index, slice_count, fraction)
    }

    /// Plan a spin with an explicit offset, given as a fraction of one slice.
    ///
    /// The fraction is clamped to the landing band so the pointer never
    /// rests on a slice boundary.
    pub fn plan_with_offset(
        &self,
        winning_index: usize,
        slice_count: usize,
        offset_fraction: f64,
    ) -> RotationPlan {
        let slice = slice_angle(slice_count);
        let fraction = offset_fraction.clamp(
            SpinConfig::OFFSET_MIN_FRACTION,
            SpinConfig::OFFSET_MAX_FRACTION,
        );
        let offset = fraction * slice;

        let target_angle =
            f64::from(self.full_spins) * TAU + TAU - winning_index as f64 * slice - offset;

        tracing::debug!(
            winning_index,
            slice_count,
            offset,
            target_angle,
            "planned rotation"
        );

        RotationPlan {
            target_angle,
            duration_ms: self.duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn slice_angle_divides_full_turn() {
        assert!((slice_angle(4) - TAU / 4.0).abs() < 1e-12);
        assert!((slice_angle(0) - TAU).abs() < 1e-12);
    }

    #[test]
    fn normalize_wraps_negative_angles() {
        assert!((normalize(-TAU / 4.0) - 3.0 * TAU / 4.0).abs() < 1e-12);
        assert!(normalize(5.0 * TAU) < 1e-9);
        assert!(normalize(-1e-18) < TAU);
    }

    #[test]
    fn pointer_reads_slice_containing_angle_zero() {
        // wheel at rest: slice 0 spans [0, slice), pointer sits on its edge
        assert_eq!(slice_at_pointer(0.0, 4), 0);
        // rotate back by 1.5 slices: slice 1 straddles the pointer
        let slice = slice_angle(4);
        assert_eq!(slice_at_pointer(-1.5 * slice, 4), 1);
        assert_eq!(slice_at_pointer(-3.5 * slice, 4), 3);
    }

    #[test]
    fn target_includes_configured_full_spins() {
        let planner = RotationPlanner::new(&SpinConfig::new().with_full_spins(12));
        let plan = planner.plan_with_offset(0, 4, 0.5);
        let slice = slice_angle(4);
        assert!((plan.target_angle - (13.0 * TAU - 0.5 * slice)).abs() < 1e-9);
        assert_eq!(plan.duration_ms, SpinConfig::DEFAULT_DURATION_MS);
    }

    #[test]
    fn offset_fraction_is_clamped_into_band() {
        let planner = RotationPlanner::new(&SpinConfig::new());
        let low = planner.plan_with_offset(2, 5, 0.0);
        let clamped = planner.plan_with_offset(2, 5, SpinConfig::OFFSET_MIN_FRACTION);
        assert_eq!(low, clamped);
    }

    #[test]
    fn drawn_offset_stays_inside_slice() {
        let planner = RotationPlanner::new(&SpinConfig::new());
        let mut rng = PcgRng::seeded(17);
        let slice = slice_angle(6);
        for _ in 0..500 {
            let plan = planner.plan(3, 6, &mut rng);
            let base = f64::from(planner.full_spins()) * TAU + TAU - 3.0 * slice;
            let offset = base - plan.target_angle;
            assert!(offset >= 0.1 * slice - 1e-9 && offset <= 0.9 * slice + 1e-9);
        }
    }
}
