//! Fixed-period tick source
//!
//! The clock is just a channel of `Instant`s. The real clock is a crossbeam
//! ticker, which never blocks on a slow consumer and keeps at most one
//! pending tick. The manual clock queues every tick it is given.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::consts::TICK_MILLIS;

/// A stream of tick signals
pub struct Clock {
    period: Duration,
    ticks: Receiver<Instant>,
}

impl Clock {
    /// Tick every `period` of wall-clock time
    pub fn fixed(period: Duration) -> Self {
        Self {
            period,
            ticks: crossbeam_channel::tick(period),
        }
    }

    /// A clock that only ticks when the returned [`Ticker`] says so.
    /// Dropping the ticker stops the clock.
    pub fn manual() -> (Ticker, Self) {
        let (tx, rx) = unbounded();
        let clock = Self {
            period: Duration::from_millis(TICK_MILLIS),
            ticks: rx,
        };
        (Ticker { tx }, clock)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn receiver(&self) -> &Receiver<Instant> {
        &self.ticks
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::fixed(Duration::from_millis(TICK_MILLIS))
    }
}

/// Drives a manual [`Clock`]
#[derive(Clone)]
pub struct Ticker {
    tx: Sender<Instant>,
}

impl Ticker {
    /// Queue one tick. Returns false if the clock is gone.
    pub fn tick(&self) -> bool {
        self.tx.send(Instant::now()).is_ok()
    }

    /// Queue `n` ticks
    pub fn tick_n(&self, n: usize) -> bool {
        (0..n).all(|_| self.tick())
    }
}

/// Tick timing statistics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Ticks processed
    pub ticks: u64,
    /// Ticks whose processing took longer than the period
    pub late_ticks: u64,
    /// Slowest tick observed
    pub max_tick: Duration,
}

impl TickStats {
    /// Record a processed tick that started at `start`
    pub fn record(&mut self, start: Instant, period: Duration) {
        let took = start.elapsed();
        self.ticks += 1;
        self.max_tick = self.max_tick.max(took);
        if took > period {
            self.late_ticks += 1;
            log::debug!("Tick {} took {:?} (budget {:?})", self.ticks, took, period);
        }
    }
}
