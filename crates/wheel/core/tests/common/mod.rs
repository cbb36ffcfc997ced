#![allow(dead_code)]

use std::collections::VecDeque;

use wheel_core::{ParticipantList, RandomSource};

/// Replays a fixed cycle of `[0, 1)` draws.
pub struct ScriptedRng {
    draws: VecDeque<f64>,
}

impl ScriptedRng {
    pub fn new(draws: &[f64]) -> Self {
        assert!(!draws.is_empty(), "scripted rng needs at least one draw");
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_u64(&mut self) -> u64 {
        ((self.unit() * (1u64 << 53) as f64) as u64) << 11
    }

    fn unit(&mut self) -> f64 {
        let value = self.draws.pop_front().unwrap();
        self.draws.push_back(value);
        value
    }
}

pub fn names(list: &[&str]) -> ParticipantList {
    ParticipantList::new(list.iter().copied())
}
