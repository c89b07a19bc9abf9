//! Score keeper
//!
//! Owns the round score behind its own lock, plus the store the best score
//! is persisted to. Persisting snapshots the score first, so no lock is held
//! while the store does I/O.

use parking_lot::{Mutex, RwLock};

use crate::error::Result;
use crate::persistence::{load_best, save_best};
use crate::platform::storage::HighScoreStore;
use crate::sim::Score;
use crate::tuning::Tuning;

pub struct ScoreKeeper {
    score: RwLock<Score>,
    store: Box<dyn HighScoreStore>,
    /// Last best value read from or written to the store
    persisted: Mutex<u64>,
}

impl ScoreKeeper {
    /// Seed the best score from the store. A malformed record is fatal.
    pub fn load(store: Box<dyn HighScoreStore>, tuning: &Tuning) -> Result<Self> {
        let best = load_best(store.as_ref())?;
        log::info!("High score: {}", best);
        Ok(Self {
            score: RwLock::new(Score::new(tuning, best)),
            store,
            persisted: Mutex::new(best),
        })
    }

    /// Copy of the current score
    pub fn snapshot(&self) -> Score {
        *self.score.read()
    }

    pub fn current(&self) -> u64 {
        self.score.read().current
    }

    pub fn best(&self) -> u64 {
        self.score.read().best
    }

    /// Credit one cleared pipe
    pub fn increase(&self) {
        let mut score = self.score.write();
        score.increase();
        log::debug!("Score {} (next pipe worth {})", score.current, score.increment);
    }

    pub fn restart(&self) {
        self.score.write().restart();
    }

    /// Write the best score to the store
    pub fn persist_best(&self) -> Result<()> {
        let best = self.best();
        save_best(self.store.as_ref(), best)?;
        *self.persisted.lock() = best;
        log::info!("High score {} saved", best);
        Ok(())
    }

    /// Write the best score only if it beats what the store already has
    pub fn persist_if_improved(&self) -> Result<bool> {
        let best = self.best();
        if best <= *self.persisted.lock() {
            return Ok(false);
        }
        self.persist_best()?;
        Ok(true)
    }
}

impl std::fmt::Debug for ScoreKeeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreKeeper")
            .field("score", &*self.score.read())
            .field("persisted", &*self.persisted.lock())
            .finish()
    }
}
