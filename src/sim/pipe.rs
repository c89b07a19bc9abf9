//! Pipes and the scrolling pipe stream
//!
//! Pipes enter at the right edge of the world, scroll left at a fixed speed
//! and are retired once fully past the left edge. A new pipe spawns whenever
//! the rightmost one has travelled `pipe_spacing` units, so the stream stays
//! sorted by x and pipes never overlap.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::round_seed;
use crate::tuning::Tuning;

/// Which edge of the world a pipe grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Rises from the ground; the gap is above it
    Floor,
    /// Hangs from the top (drawn inverted); the gap is below it
    Ceiling,
}

/// A single pipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Solid length measured from the edge it grows from
    pub height: f32,
    pub orientation: Orientation,
    /// The bird has flown past this pipe (scored exactly once)
    pub passed: bool,
}

impl Pipe {
    pub fn new(id: u32, x: f32, width: f32, height: f32, orientation: Orientation) -> Self {
        Self {
            id,
            x,
            width,
            height,
            orientation,
            passed: false,
        }
    }

    /// Right edge
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    pub fn is_inverted(&self) -> bool {
        self.orientation == Orientation::Ceiling
    }

    /// Bounds of the solid part
    pub fn bounds(&self) -> Aabb {
        let bottom = match self.orientation {
            Orientation::Floor => 0.0,
            Orientation::Ceiling => WORLD_HEIGHT - self.height,
        };
        Aabb::new(
            Vec2::new(self.x, bottom),
            Vec2::new(self.trailing_edge(), bottom + self.height),
        )
    }

    /// Fully past the left edge of the world
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.trailing_edge() < 0.0
    }
}

/// The ordered set of live pipes
#[derive(Debug, Clone)]
pub struct PipeStream {
    tuning: Tuning,
    seed: u64,
    /// Rounds started so far (0 for the first)
    round: u32,
    rng: Pcg32,
    /// Sorted by x, oldest (leftmost) first
    pipes: Vec<Pipe>,
    next_id: u32,
    /// Total pipes spawned this round
    spawned: u64,
}

impl PipeStream {
    /// Create an empty stream; the first pipe spawns on the first update
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            tuning: tuning.clone(),
            seed,
            round: 0,
            rng: Pcg32::seed_from_u64(round_seed(seed, 0)),
            pipes: Vec::new(),
            next_id: 1,
            spawned: 0,
        }
    }

    /// Advance one tick
    ///
    /// Scrolls every pipe, marks pipes the bird (left edge at `bird_x`) has
    /// just cleared, spawns on cadence and retires off-screen pipes. Returns
    /// the number of pipes cleared this tick.
    pub fn update(&mut self, bird_x: f32) -> u32 {
        let mut cleared = 0;
        for pipe in &mut self.pipes {
            pipe.x -= self.tuning.scroll_speed;
            if !pipe.passed && pipe.trailing_edge() < bird_x {
                pipe.passed = true;
                cleared += 1;
            }
        }

        if self.spawn_due() {
            self.spawn();
        }

        let before = self.pipes.len();
        self.pipes.retain(|p| !p.is_off_screen());
        let retired = before - self.pipes.len();
        if retired > 0 {
            log::debug!("Retired {} pipe(s), {} live", retired, self.pipes.len());
        }

        cleared
    }

    /// The rightmost pipe has scrolled far enough for the next one
    fn spawn_due(&self) -> bool {
        match self.rightmost() {
            None => true,
            Some(last) => last.x <= WORLD_WIDTH - self.tuning.pipe_spacing,
        }
    }

    /// Append a pipe at the right edge with a random height and orientation
    fn spawn(&mut self) {
        let extra = if self.tuning.pipe_height_range > 0.0 {
            self.rng.random_range(0.0..self.tuning.pipe_height_range)
        } else {
            0.0
        };
        let height = self.tuning.pipe_min_height + extra;
        let orientation = if self.rng.random_bool(0.5) {
            Orientation::Ceiling
        } else {
            Orientation::Floor
        };

        let id = self.next_id;
        self.next_id += 1;
        self.spawned += 1;
        log::debug!("Spawned pipe {} ({:?}, height {:.0})", id, orientation, height);

        self.pipes.push(Pipe::new(
            id,
            WORLD_WIDTH,
            self.tuning.pipe_width,
            height,
            orientation,
        ));
    }

    /// Back to the initial spawn state for a new round
    pub fn restart(&mut self) {
        self.round = self.round.wrapping_add(1);
        self.rng = Pcg32::seed_from_u64(round_seed(self.seed, self.round));
        self.pipes.clear();
        self.next_id = 1;
        self.spawned = 0;
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn rightmost(&self) -> Option<&Pipe> {
        self.pipes.last()
    }

    /// Pipes spawned since the round started
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Insert a pipe directly, keeping x order. Used to stage scenarios.
    pub fn push(&mut self, mut pipe: Pipe) {
        pipe.id = self.next_id;
        self.next_id += 1;
        let at = self.pipes.partition_point(|p| p.x <= pipe.x);
        self.pipes.insert(at, pipe);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BIRD_X;

    fn stream() -> PipeStream {
        PipeStream::new(&Tuning::default(), 12345)
    }

    #[test]
    fn test_first_update_spawns_at_right_edge() {
        let mut pipes = stream();
        assert!(pipes.is_empty());
        assert_eq!(pipes.update(BIRD_X), 0);
        assert_eq!(pipes.len(), 1);
        let pipe = &pipes.pipes()[0];
        assert_eq!(pipe.x, WORLD_WIDTH);
        assert!(!pipe.passed);
        assert!(pipe.height >= 100.0 && pipe.height < 400.0);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut pipes = stream();
        pipes.update(BIRD_X);
        // 200 units of spacing at 2 units per tick
        for _ in 0..99 {
            pipes.update(BIRD_X);
        }
        assert_eq!(pipes.len(), 1);
        pipes.update(BIRD_X);
        assert_eq!(pipes.len(), 2);
        assert_eq!(pipes.spawned(), 2);
    }

    #[test]
    fn test_sorted_and_non_overlapping() {
        let mut pipes = stream();
        for _ in 0..2000 {
            pipes.update(BIRD_X);
            for pair in pipes.pipes().windows(2) {
                assert!(pair[0].trailing_edge() < pair[1].x);
            }
        }
    }

    #[test]
    fn test_pipes_retired_only_off_screen() {
        let mut pipes = stream();
        for _ in 0..2000 {
            pipes.update(BIRD_X);
            assert!(pipes.pipes().iter().all(|p| !p.is_off_screen()));
        }
        // 800 + 50 units to leave at 2 per tick: the first pipe is long gone
        assert!(pipes.pipes()[0].id > 1);
    }

    #[test]
    fn test_each_pipe_cleared_once() {
        let mut pipes = stream();
        let mut cleared = 0;
        for _ in 0..3000 {
            cleared += pipes.update(BIRD_X);
        }
        let passed_ever = pipes.spawned() - pipes.pipes().iter().filter(|p| !p.passed).count() as u64;
        assert_eq!(u64::from(cleared), passed_ever);
    }

    #[test]
    fn test_clear_happens_when_trailing_edge_crosses_bird() {
        let mut pipes = PipeStream::new(&Tuning::default(), 1);
        pipes.push(Pipe::new(0, BIRD_X - 50.0 + 1.0, 50.0, 100.0, Orientation::Floor));
        // trailing edge 11 -> 9 after one tick
        assert_eq!(pipes.update(BIRD_X), 1);
        assert!(pipes.pipes()[0].passed);
        assert_eq!(pipes.update(BIRD_X), 0);
    }

    #[test]
    fn test_restart() {
        let mut pipes = stream();
        for _ in 0..500 {
            pipes.update(BIRD_X);
        }
        pipes.restart();
        assert!(pipes.is_empty());
        assert_eq!(pipes.spawned(), 0);
        assert_eq!(pipes.round(), 1);
        pipes.update(BIRD_X);
        assert_eq!(pipes.pipes()[0].id, 1);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = stream();
        let mut b = stream();
        for _ in 0..400 {
            a.update(BIRD_X);
            b.update(BIRD_X);
        }
        assert_eq!(a.pipes(), b.pipes());
    }

    #[test]
    fn test_pipe_bounds() {
        let floor = Pipe::new(1, 100.0, 50.0, 150.0, Orientation::Floor);
        assert_eq!(floor.bounds().min, Vec2::new(100.0, 0.0));
        assert_eq!(floor.bounds().max, Vec2::new(150.0, 150.0));
        let ceiling = Pipe::new(2, 100.0, 50.0, 150.0, Orientation::Ceiling);
        assert_eq!(ceiling.bounds().min, Vec2::new(100.0, 450.0));
        assert_eq!(ceiling.bounds().max, Vec2::new(150.0, 600.0));
        assert!(ceiling.is_inverted());
    }
}
