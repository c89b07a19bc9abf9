//! Shared world state
//!
//! Bird, pipe stream and score each sit behind their own reader/writer lock.
//! The scene loop is the only writer; renderers and other readers take read
//! locks per entity. Code that needs two locks at once takes the bird before
//! the pipes.

use parking_lot::RwLock;

use crate::error::Result;
use crate::highscore::ScoreKeeper;
use crate::platform::storage::HighScoreStore;
use crate::settings::Settings;
use crate::sim::{Bird, Pipe, PipeStream, Score};

pub struct World {
    pub bird: RwLock<Bird>,
    pub pipes: RwLock<PipeStream>,
    pub score: ScoreKeeper,
}

/// Copy of the whole world, taken one entity at a time
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: Score,
}

impl World {
    /// Fresh world; the best score is loaded from `store`
    pub fn new(settings: &Settings, seed: u64, store: Box<dyn HighScoreStore>) -> Result<Self> {
        let tuning = &settings.tuning;
        Ok(Self {
            bird: RwLock::new(Bird::new(tuning)),
            pipes: RwLock::new(PipeStream::new(tuning, seed)),
            score: ScoreKeeper::load(store, tuning)?,
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        let bird = self.bird.read().clone();
        let pipes = self.pipes.read().pipes().to_vec();
        let score = self.score.snapshot();
        Snapshot { bird, pipes, score }
    }

    pub fn bird_alive(&self) -> bool {
        self.bird.read().is_alive()
    }

    /// Kill the bird if it touches any live pipe. Every pipe is checked.
    /// Returns true if the bird died in this pass.
    pub fn collide(&self) -> bool {
        let mut bird = self.bird.write();
        let pipes = self.pipes.read();
        let mut hit = false;
        for pipe in pipes.pipes() {
            hit |= bird.touch(pipe);
        }
        hit
    }

    /// Reset bird, pipe stream and current score for a new round
    pub fn restart(&self) {
        self.bird.write().restart();
        self.pipes.write().restart();
        self.score.restart();
    }
}
