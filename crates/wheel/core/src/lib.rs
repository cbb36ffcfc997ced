//! Prize-wheel spin logic shared across frontends.
//!
//! `wheel-core` picks a winner under an optional bias policy, plans a
//! rotation that lands that winner under the fixed pointer, and animates the
//! rotation as a time-stepped state machine. Randomness and time are injected
//! through [`env::RandomSource`] and [`env::Clock`], so the whole pipeline
//! runs deterministically under test.
//!
//! ```text
//! ParticipantList ─▶ OutcomeSelector ─▶ SpinOutcome
//!                                          │
//!                    RotationPlanner ◀─────┘
//!                          │
//!                          ▼
//!                      Animator ─tick─▶ Frame ─▶ renderer
//! ```
//!
//! [`WheelSession`] ties the pieces together for a single wheel.
pub mod animation;
pub mod bias;
pub mod config;
pub mod easing;
pub mod env;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod participants;
pub mod rotation;
pub mod selector;
pub mod session;

pub use animation::{AnimationState, Animator, Frame, SpinPhase};
pub use bias::BiasPolicy;
pub use config::{BiasConfig, SpinConfig, WheelConfig};
pub use easing::Easing;
pub use env::{Clock, ManualClock, PcgRng, RandomSource};
pub use error::{ParseEasingError, SessionError, SpinError};
pub use geometry::{Slice, WheelGeometry};
pub use palette::Rgb;
pub use participants::ParticipantList;
pub use rotation::{RotationPlan, RotationPlanner, normalize, slice_angle, slice_at_pointer};
pub use selector::{OutcomeSelector, SpinOutcome, select};
pub use session::WheelSession;
