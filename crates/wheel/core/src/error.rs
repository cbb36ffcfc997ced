//! Rejections surfaced by the spin session.
//!
//! None of these are failures in the usual sense: each one describes a
//! request that was ignored and left every piece of state untouched.
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SpinError {
    #[error("no participants on the wheel")]
    NoParticipants,

    #[error("a spin is already in progress")]
    AlreadySpinning,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("participant list is locked while the wheel is spinning")]
    Locked,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown easing curve `{0}` (expected `cubic` or `quartic`)")]
pub struct ParseEasingError(pub String);
