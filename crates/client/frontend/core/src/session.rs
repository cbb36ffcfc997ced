//! Session bootstrap shared by every frontend.
use rand::{SeedableRng, rngs::StdRng};
use wheel_core::{PcgRng, RandomSource, WheelSession, env::RandRng};

use crate::config::SessionConfig;

/// Type-erased random source so frontends need not be generic over it.
pub type BoxedRng = Box<dyn RandomSource + Send>;

/// Session type handed to frontends.
pub type SpinSession = WheelSession<BoxedRng>;

/// Build a session preloaded with the participants parsed from `names`.
pub fn build_session(config: &SessionConfig, names: &str) -> SpinSession {
    let rng: BoxedRng = match config.seed {
        Some(seed) => {
            tracing::info!("Using seeded PCG rng");
            Box::new(PcgRng::seeded(seed))
        }
        None => Box::new(RandRng(StdRng::from_entropy())),
    };

    tracing::debug!(
        biased = !config.wheel.bias.is_fair(),
        full_spins = config.wheel.spin.full_spins,
        duration_ms = config.wheel.spin.duration_ms,
        easing = %config.wheel.spin.easing,
        "building wheel session"
    );

    let mut session = WheelSession::new(&config.wheel, rng);
    // a fresh session is idle, so the list cannot be locked
    let _ = session.set_text(names);
    session
}
