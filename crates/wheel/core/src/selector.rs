//! Outcome selection under a bias policy.
//!
//! Both the avoid and the weighted branches draw directly from the filtered
//! candidate set, so selection always finishes in a single pass.
use crate::{
    bias::BiasPolicy, config::BiasConfig, env::RandomSource, participants::ParticipantList,
};

/// Result of a spin request. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpinOutcome {
    pub winning_index: usize,
    pub winning_name: String,
}

impl SpinOutcome {
    fn at(names: &ParticipantList, index: usize) -> Option<Self> {
        names.get(index).map(|name| Self {
            winning_index: index,
            winning_name: name.to_string(),
        })
    }
}

/// Picks winners according to an ordered chain of bias policies.
///
/// The first policy whose target is in the list decides; otherwise the spin
/// is fair.
#[derive(Clone, Debug, Default)]
pub struct OutcomeSelector {
    policies: Vec<BiasPolicy>,
}

impl OutcomeSelector {
    pub fn new(config: &BiasConfig) -> Self {
        Self {
            policies: config.policies(),
        }
    }

    pub fn fair() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: BiasPolicy) -> Self {
        Self {
            policies: vec![policy],
        }
    }

    pub fn policies(&self) -> &[BiasPolicy] {
        &self.policies
    }

    /// Policy that will decide a spin over `names`.
    pub fn effective_policy(&self, names: &ParticipantList) -> &BiasPolicy {
        static FAIR: BiasPolicy = BiasPolicy::Fair;

        self.policies
            .iter()
            .find(|policy| policy.target().is_some_and(|name| names.contains(name)))
            .unwrap_or(&FAIR)
    }

    /// Select a winner. Returns `None` for an empty list.
    pub fn select<R: RandomSource + ?Sized>(
        &self,
        names: &ParticipantList,
        rng: &mut R,
    ) -> Option<SpinOutcome> {
        select(names, self.effective_policy(names), rng)
    }
}

/// Select a winner from `names` under a single `policy`.
///
/// Returns `None` for an empty list. Biased policies whose target is unset
/// or missing fall back to a fair draw.
pub fn select<R: RandomSource + ?Sized>(
    names: &ParticipantList,
    policy: &BiasPolicy,
    rng: &mut R,
) -> Option<SpinOutcome> {
    if names.is_empty() {
        return None;
    }

    let target = policy
        .target()
        .and_then(|name| names.position(name).map(|index| (name, index)));

    let index = match (policy, target) {
        (BiasPolicy::ForcedWin(_), Some((_, index))) => index,
        (BiasPolicy::ForcedAvoid(_), Some((name, index))) => {
            pick_excluding(names, name, rng).unwrap_or(index)
        }
        (BiasPolicy::WeightedWin { percent, .. }, Some((name, index))) => {
            let draw = rng.percent();
            if draw < f64::from((*percent).min(BiasPolicy::MAX_PERCENT)) {
                index
            } else {
                pick_excluding(names, name, rng).unwrap_or(index)
            }
        }
        _ => rng.below(names.len()),
    };

    let rule = if target.is_some() {
        policy.label()
    } else {
        "fair"
    };
    tracing::debug!(
        rule,
        index,
        slices = names.len(),
        "selected spin outcome"
    );

    SpinOutcome::at(names, index)
}

/// Uniform pick among entries not equal to `excluded`.
fn pick_excluding<R: RandomSource + ?Sized>(
    names: &ParticipantList,
    excluded: &str,
    rng: &mut R,
) -> Option<usize> {
    let candidates: Vec<usize> = names.indices_excluding(excluded).collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.below(candidates.len())])
}
