//! Round score with a growing per-pipe increment
//!
//! Later pipes are worth more: the first cleared pipe gives `base`, the next
//! `base + step`, and so on. `best` only ever grows.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub current: u64,
    /// Points the next cleared pipe is worth
    pub increment: u64,
    /// Best score ever, including earlier sessions
    pub best: u64,
    base: u64,
    step: u64,
}

impl Score {
    pub fn new(tuning: &Tuning, best: u64) -> Self {
        Self {
            current: 0,
            increment: tuning.score_base,
            best,
            base: tuning.score_base,
            step: tuning.score_step,
        }
    }

    /// Credit one cleared pipe
    pub fn increase(&mut self) {
        self.current += self.increment;
        self.increment += self.step;
        self.best = self.best.max(self.current);
    }

    /// New round: current and increment reset, best carries over
    pub fn restart(&mut self) {
        self.current = 0;
        self.increment = self.base;
    }
}
