//! Cross-frontend primitives for presenting the wheel.
//!
//! Houses configuration loaders, the message log, participant loading and
//! session bootstrap that both the terminal client and future graphical
//! clients can reuse.
pub mod config;
pub mod frontend;
pub mod message;
pub mod names;
pub mod session;

pub use config::{FrontendConfig, MessageConfig, NamesConfig, SessionConfig};
pub use frontend::Frontend;
pub use session::{BoxedRng, SpinSession, build_session};
