//! Random sources for outcome selection and landing offsets.
//!
//! All draws go through [`RandomSource`]. Only [`RandomSource::next_u64`] is
//! required; every other draw is derived from [`RandomSource::unit`], so a
//! test double that overrides `unit` controls selection, weighting and the
//! within-slice offset at once.

/// Source of uniformly distributed random values.
pub trait RandomSource {
    /// Generate the next 64 random bits.
    fn next_u64(&mut self) -> u64;

    /// Uniform float in `[0, 1)` built from the top 53 bits.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform index in `[0, bound)`.
    ///
    /// A `bound` of zero yields zero; callers only ask for indices into
    /// non-empty collections.
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        let index = (self.unit() * bound as f64) as usize;
        index.min(bound - 1)
    }

    /// Uniform percentage in `[0, 100)`.
    fn percent(&mut self) -> f64 {
        self.unit() * 100.0
    }

    /// Uniform float in `[min, max]`.
    fn between(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        min + self.unit() * (max - min)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64 bits of LCG state, 32-bit output per step.
/// Two steps are combined for each `next_u64`.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces the same spin sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator whose state is derived from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: mix_seed(seed),
        }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Advance one step and return 32 bits.
    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::step(self.state);
        Self::output(self.state)
    }
}

impl RandomSource for PcgRng {
    fn next_u64(&mut self) -> u64 {
        let high = self.next_u32() as u64;
        let low = self.next_u32() as u64;
        (high << 32) | low
    }
}

/// Avalanche a user supplied seed so nearby seeds start far apart.
///
/// Constants are the SplitMix64 / MurmurHash3 finalizer multipliers.
pub fn mix_seed(seed: u64) -> u64 {
    let mut hash = seed ^ 0x9e3779b97f4a7c15;

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;

    hash
}

/// Adapter exposing any [`rand::RngCore`] as a [`RandomSource`].
///
/// Frontends use this with `StdRng::from_entropy()` for unseeded spins.
#[cfg(feature = "rand")]
#[derive(Clone, Debug)]
pub struct RandRng<R>(pub R);

#[cfg(feature = "rand")]
impl<R: rand::RngCore> RandomSource for RandRng<R> {
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PcgRng::seeded(42);
        let mut b = PcgRng::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = PcgRng::seeded(1);
        let mut b = PcgRng::seeded(2);
        let same = (0..16).filter(|_| a.next_u64() == b.next_u64()).count();
        assert!(same < 16, "sequences from distinct seeds should differ");
    }

    #[test]
    fn unit_stays_in_half_open_range() {
        let mut rng = PcgRng::seeded(7);
        for _ in 0..10_000 {
            let value = rng.unit();
            assert!((0.0..1.0).contains(&value), "unit out of range: {value}");
        }
    }

    #[test]
    fn below_covers_every_index() {
        let mut rng = PcgRng::seeded(99);
        let mut seen = [false; 5];
        for _ in 0..1_000 {
            let index = rng.below(5);
            assert!(index < 5);
            seen[index] = true;
        }
        assert!(seen.iter().all(|hit| *hit), "every index should be drawn");
    }

    #[test]
    fn below_zero_bound_is_zero() {
        let mut rng = PcgRng::seeded(3);
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn between_respects_bounds() {
        let mut rng = PcgRng::seeded(11);
        for _ in 0..1_000 {
            let value = rng.between(0.1, 0.9);
            assert!((0.1..=0.9).contains(&value));
        }
        assert_eq!(rng.between(2.0, 2.0), 2.0);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn rand_adapter_is_deterministic_for_seeded_rng() {
        use rand::{SeedableRng, rngs::StdRng};

        let mut a = RandRng(StdRng::seed_from_u64(5));
        let mut b = RandRng(StdRng::seed_from_u64(5));
        assert_eq!(a.below(1000), b.below(1000));
    }
}
