//! Injected environment: randomness and time.
//!
//! The selector, planner and animator never reach for global entropy or a
//! wall clock. Callers hand them a [`RandomSource`] and a [`Clock`] so tests
//! can drive every branch deterministically.
mod clock;
mod rng;

pub use clock::{Clock, ManualClock};
pub use rng::{PcgRng, RandomSource, mix_seed};

#[cfg(feature = "rand")]
pub use rng::RandRng;
