//! Time-stepped spin animation.
//!
//! The animator is an explicit state machine advanced by timestamps:
//!
//! ```text
//! Idle ──start──▶ Spinning ──elapsed ≥ duration──▶ Completed ──tick──▶ Idle
//!                    ▲                                  │
//!                    └──────────────start───────────────┘
//! ```
//!
//! It never reads a clock itself; callers pass `now_ms` from whatever drives
//! frames (a display refresh, a tokio interval, a virtual test clock).
use crate::{
    easing::Easing, error::SpinError, rotation::RotationPlan, rotation::normalize,
    selector::SpinOutcome,
};

/// Current phase of the animator.
#[derive(Clone, Debug, PartialEq)]
pub enum SpinPhase {
    Idle,
    Spinning {
        start_ms: u64,
        plan: RotationPlan,
        outcome: SpinOutcome,
    },
    /// Reached for exactly one tick after the animation ends.
    Completed { outcome: SpinOutcome },
}

/// What a single tick produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    Idle {
        angle: f64,
    },
    Spinning {
        angle: f64,
        /// Linear progress in `[0, 1)`.
        progress: f64,
    },
    /// Emitted once, on the tick that reaches the duration.
    Completed {
        angle: f64,
        outcome: SpinOutcome,
    },
}

impl Frame {
    pub fn angle(&self) -> f64 {
        match self {
            Frame::Idle { angle }
            | Frame::Spinning { angle, .. }
            | Frame::Completed { angle, .. } => *angle,
        }
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self, Frame::Spinning { .. })
    }

    pub fn outcome(&self) -> Option<&SpinOutcome> {
        match self {
            Frame::Completed { outcome, .. } => Some(outcome),
            _ => None,
        }
    }
}

/// Snapshot of the animation bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub start_ms: Option<u64>,
    pub current_angle: f64,
    pub is_spinning: bool,
}

/// Drives the wheel angle from rest to a planned target.
#[derive(Clone, Debug)]
pub struct Animator {
    easing: Easing,
    phase: SpinPhase,
    current_angle: f64,
}

impl Animator {
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            phase: SpinPhase::Idle,
            current_angle: 0.0,
        }
    }

    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning { .. })
    }

    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    pub fn state(&self) -> AnimationState {
        let start_ms = match self.phase {
            SpinPhase::Spinning { start_ms, .. } => Some(start_ms),
            _ => None,
        };
        AnimationState {
            start_ms,
            current_angle: self.current_angle,
            is_spinning: self.is_spinning(),
        }
    }

    /// Begin animating toward `plan`.
    ///
    /// Rejected while another spin is in flight; the running spin is left
    /// untouched.
    pub fn start(
        &mut self,
        plan: RotationPlan,
        outcome: SpinOutcome,
        now_ms: u64,
    ) -> Result<(), SpinError> {
        if self.is_spinning() {
            return Err(SpinError::AlreadySpinning);
        }

        self.phase = SpinPhase::Spinning {
            start_ms: now_ms,
            plan,
            outcome,
        };
        Ok(())
    }

    /// Advance to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Frame {
        match std::mem::replace(&mut self.phase, SpinPhase::Idle) {
            SpinPhase::Idle | SpinPhase::Completed { .. } => Frame::Idle {
                angle: self.current_angle,
            },
            SpinPhase::Spinning {
                start_ms,
                plan,
                outcome,
            } => {
                let elapsed = now_ms.saturating_sub(start_ms);
                if elapsed < plan.duration_ms {
                    let progress = elapsed as f64 / plan.duration_ms as f64;
                    self.current_angle = plan.target_angle * self.easing.apply(progress);
                    self.phase = SpinPhase::Spinning {
                        start_ms,
                        plan,
                        outcome,
                    };
                    return Frame::Spinning {
                        angle: self.current_angle,
                        progress,
                    };
                }

                self.current_angle = normalize(plan.target_angle);
                self.phase = SpinPhase::Completed {
                    outcome: outcome.clone(),
                };
                Frame::Completed {
                    angle: self.current_angle,
                    outcome,
                }
            }
        }
    }

    /// Feed frame timestamps until the running spin completes.
    ///
    /// `on_frame` sees every angle including the final resting one;
    /// `on_complete` runs once with the outcome. Returns `None` when nothing
    /// was spinning or the timestamps ran out first.
    pub fn drive<I, F, C>(
        &mut self,
        timestamps: I,
        mut on_frame: F,
        on_complete: C,
    ) -> Option<SpinOutcome>
    where
        I: IntoIterator<Item = u64>,
        F: FnMut(f64),
        C: FnOnce(&SpinOutcome),
    {
        if !self.is_spinning() {
            return None;
        }

        for now_ms in timestamps {
            match self.tick(now_ms) {
                Frame::Spinning { angle, .. } => on_frame(angle),
                Frame::Completed { angle, outcome } => {
                    on_frame(angle);
                    on_complete(&outcome);
                    return Some(outcome);
                }
                Frame::Idle { .. } => return None,
            }
        }

        None
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(Easing::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use super::*;

    fn outcome() -> SpinOutcome {
        SpinOutcome {
            winning_index: 1,
            winning_name: "Bob".into(),
        }
    }

    fn plan() -> RotationPlan {
        RotationPlan {
            target_angle: 10.5 * TAU,
            duration_ms: 1000,
        }
    }

    #[test]
    fn idle_tick_keeps_angle() {
        let mut animator = Animator::default();
        assert_eq!(animator.tick(500), Frame::Idle { angle: 0.0 });
        assert!(!animator.state().is_spinning);
    }

    #[test]
    fn angle_follows_eased_curve() {
        let mut animator = Animator::new(Easing::Cubic);
        animator.start(plan(), outcome(), 100).unwrap();

        let frame = animator.tick(600);
        let expected = plan().target_angle * Easing::Cubic.apply(0.5);
        assert!((frame.angle() - expected).abs() < 1e-9);
        assert!(frame.is_spinning());
        assert_eq!(animator.state().start_ms, Some(100));
    }

    #[test]
    fn completion_normalizes_and_reports_once() {
        let mut animator = Animator::default();
        animator.start(plan(), outcome(), 0).unwrap();

        let frame = animator.tick(1000);
        assert_eq!(frame.outcome(), Some(&outcome()));
        assert!((frame.angle() - 0.5 * TAU).abs() < 1e-9);
        assert!(!animator.is_spinning());

        assert!(matches!(animator.tick(1016), Frame::Idle { .. }));
        assert_eq!(animator.phase(), &SpinPhase::Idle);
        assert!((animator.current_angle() - 0.5 * TAU).abs() < 1e-9);
    }

    #[test]
    fn start_while_spinning_is_rejected() {
        let mut animator = Animator::default();
        animator.start(plan(), outcome(), 0).unwrap();
        animator.tick(300);
        let before = animator.state();

        let other = RotationPlan {
            target_angle: 1.0,
            duration_ms: 10,
        };
        assert_eq!(
            animator.start(other, outcome(), 400),
            Err(SpinError::AlreadySpinning)
        );
        assert_eq!(animator.state(), before);
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut animator = Animator::default();
        let instant = RotationPlan {
            target_angle: 8.25 * TAU,
            duration_ms: 0,
        };
        animator.start(instant, outcome(), 50).unwrap();
        assert!(animator.tick(50).outcome().is_some());
    }

    #[test]
    fn clock_running_backwards_does_not_underflow() {
        let mut animator = Animator::default();
        animator.start(plan(), outcome(), 1_000).unwrap();
        let frame = animator.tick(10);
        assert_eq!(frame.angle(), 0.0);
    }

    #[test]
    fn drive_runs_callbacks_until_completion() {
        let mut animator = Animator::default();
        animator.start(plan(), outcome(), 0).unwrap();

        let mut frames = 0;
        let mut winner = None;
        let result = animator.drive(
            (0..).step_by(16),
            |_| frames += 1,
            |outcome| winner = Some(outcome.winning_name.clone()),
        );

        assert_eq!(result, Some(outcome()));
        assert_eq!(winner.as_deref(), Some("Bob"));
        // 0, 16, ..., 992 spinning plus the completing frame at 1008
        assert_eq!(frames, 64);
    }

    #[test]
    fn drive_without_spin_is_a_no_op() {
        let mut animator = Animator::default();
        let result = animator.drive([0, 16], |_| panic!("no frames"), |_| panic!("no outcome"));
        assert_eq!(result, None);
    }
}
