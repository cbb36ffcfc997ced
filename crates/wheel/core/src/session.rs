//! A single wheel: participants, selection, planning and animation.
use crate::{
    animation::{AnimationState, Animator, Frame},
    config::WheelConfig,
    env::{Clock, RandomSource},
    error::{SessionError, SpinError},
    geometry::WheelGeometry,
    participants::ParticipantList,
    rotation::{RotationPlan, RotationPlanner},
    selector::{OutcomeSelector, SpinOutcome},
};

/// Owns the participant list and the spin state machine.
///
/// The list is frozen while a spin is in flight so the winning index stays
/// valid until the outcome is reported.
pub struct WheelSession<R> {
    participants: ParticipantList,
    selector: OutcomeSelector,
    planner: RotationPlanner,
    animator: Animator,
    rng: R,
    last_outcome: Option<SpinOutcome>,
}

impl<R: RandomSource> WheelSession<R> {
    pub fn new(config: &WheelConfig, rng: R) -> Self {
        Self {
            participants: ParticipantList::default(),
            selector: OutcomeSelector::new(&config.bias),
            planner: RotationPlanner::new(&config.spin),
            animator: Animator::new(config.spin.easing),
            rng,
            last_outcome: None,
        }
    }

    /// Replace the selector, e.g. to apply a single explicit policy.
    pub fn with_selector(mut self, selector: OutcomeSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_participants(mut self, participants: ParticipantList) -> Self {
        self.participants = participants;
        self
    }

    pub fn participants(&self) -> &ParticipantList {
        &self.participants
    }

    pub fn set_participants(&mut self, participants: ParticipantList) -> Result<(), SessionError> {
        if self.animator.is_spinning() {
            tracing::warn!("participant update rejected while spinning");
            return Err(SessionError::Locked);
        }
        self.participants = participants;
        Ok(())
    }

    /// Rebuild the list from one-name-per-line text.
    pub fn set_text(&mut self, text: &str) -> Result<(), SessionError> {
        self.set_participants(ParticipantList::from_text(text))
    }

    /// Pick a winner and start animating toward it.
    ///
    /// Rejected without side effects while spinning or when the list is
    /// empty. The outcome is kept private until the animation completes.
    pub fn request_spin<C: Clock + ?Sized>(&mut self, clock: &C) -> Result<RotationPlan, SpinError> {
        if self.animator.is_spinning() {
            tracing::warn!("spin request ignored: already spinning");
            return Err(SpinError::AlreadySpinning);
        }

        let Some(outcome) = self.selector.select(&self.participants, &mut self.rng) else {
            tracing::warn!("spin request ignored: no participants");
            return Err(SpinError::NoParticipants);
        };

        let plan = self.planner.plan(
            outcome.winning_index,
            self.participants.len(),
            &mut self.rng,
        );
        self.animator.start(plan, outcome, clock.now_ms())?;
        self.last_outcome = None;

        tracing::info!(
            slices = self.participants.len(),
            duration_ms = plan.duration_ms,
            "spin started"
        );
        Ok(plan)
    }

    /// Advance the animation to the clock's current reading.
    pub fn advance<C: Clock + ?Sized>(&mut self, clock: &C) -> Frame {
        let frame = self.animator.tick(clock.now_ms());
        if let Frame::Completed { outcome, .. } = &frame {
            tracing::info!(winner = %outcome.winning_name, "spin completed");
            self.last_outcome = Some(outcome.clone());
        }
        frame
    }

    pub fn is_spinning(&self) -> bool {
        self.animator.is_spinning()
    }

    pub fn current_angle(&self) -> f64 {
        self.animator.current_angle()
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animator.state()
    }

    /// Outcome of the most recent completed spin.
    pub fn last_outcome(&self) -> Option<&SpinOutcome> {
        self.last_outcome.as_ref()
    }

    /// Forget the last outcome (result panel dismissed).
    pub fn dismiss_outcome(&mut self) {
        self.last_outcome = None;
    }

    pub fn geometry(&self) -> WheelGeometry<'_> {
        WheelGeometry::new(&self.participants, self.animator.current_angle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{BiasConfig, SpinConfig},
        env::{ManualClock, PcgRng},
    };

    fn session(names: &str) -> WheelSession<PcgRng> {
        let config = WheelConfig::new(
            SpinConfig::new().with_duration_ms(100),
            BiasConfig::fair(),
        );
        WheelSession::new(&config, PcgRng::seeded(9))
            .with_participants(ParticipantList::from_text(names))
    }

    #[test]
    fn empty_list_spin_is_rejected() {
        let clock = ManualClock::new(0);
        let mut wheel = session("");
        assert_eq!(wheel.request_spin(&clock), Err(SpinError::NoParticipants));
        assert!(!wheel.is_spinning());
    }

    #[test]
    fn list_is_locked_while_spinning() {
        let clock = ManualClock::new(0);
        let mut wheel = session("Ann\nBob");
        wheel.request_spin(&clock).unwrap();

        assert_eq!(wheel.set_text("Cid"), Err(SessionError::Locked));
        assert_eq!(wheel.participants().len(), 2);

        clock.advance(100);
        assert!(wheel.advance(&clock).outcome().is_some());
        assert!(wheel.set_text("Cid").is_ok());
        assert_eq!(wheel.participants().as_slice(), ["Cid"]);
    }

    #[test]
    fn dismissing_clears_last_outcome() {
        let clock = ManualClock::new(0);
        let mut wheel = session("Ann");
        wheel.request_spin(&clock).unwrap();
        clock.advance(100);
        wheel.advance(&clock);
        assert_eq!(
            wheel.last_outcome().map(|o| o.winning_name.as_str()),
            Some("Ann")
        );
        wheel.dismiss_outcome();
        assert!(wheel.last_outcome().is_none());
    }
}
