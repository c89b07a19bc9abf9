//! The bird: gravity, jumps and the liveness flag
//!
//! World space has y growing upward. `speed` is positive while falling, so
//! each tick adds gravity to it and subtracts it from y; a jump sets it to
//! `-jump_speed`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, hits_pipe};
use super::pipe::Pipe;
use crate::consts::*;
use crate::tuning::Tuning;

/// The player-controlled bird
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Left edge (fixed) and vertical centre
    pub pos: Vec2,
    pub size: Vec2,
    /// Falling speed (negative while rising)
    pub speed: f32,
    alive: bool,
    /// Ticks since the round started, drives the flap animation
    time: u64,
    gravity: f32,
    jump_speed: f32,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Self::start_pos(),
            size: Vec2::splat(BIRD_SIZE),
            speed: 0.0,
            alive: true,
            time: 0,
            gravity: tuning.gravity,
            jump_speed: tuning.jump_speed,
        }
    }

    fn start_pos() -> Vec2 {
        Vec2::new(BIRD_X, WORLD_HEIGHT / 2.0)
    }

    /// Apply one tick of gravity. Leaving the world through the top or the
    /// bottom kills the bird. Does nothing once dead.
    pub fn update(&mut self) {
        if !self.alive {
            return;
        }
        self.time += 1;
        self.speed += self.gravity;
        self.pos.y -= self.speed;

        if self.pos.y < 0.0 || self.pos.y > WORLD_HEIGHT {
            log::debug!("Bird left the world at y={:.1}", self.pos.y);
            self.alive = false;
        }
    }

    /// Set the upward jump speed. Returns false (and changes nothing) if dead.
    pub fn jump(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.speed = -self.jump_speed;
        true
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_left_center(self.pos.x, self.pos.y, self.size)
    }

    /// Whether the bird's box overlaps the solid part of `pipe`
    pub fn collides_with(&self, pipe: &Pipe) -> bool {
        hits_pipe(&self.bounds(), pipe)
    }

    /// Kill the bird if it hits `pipe`. Returns true on a hit.
    pub fn touch(&mut self, pipe: &Pipe) -> bool {
        if !self.alive || !self.collides_with(pipe) {
            return false;
        }
        log::debug!("Bird hit pipe {}", pipe.id);
        self.alive = false;
        true
    }

    /// Current animation frame index
    pub fn frame(&self) -> usize {
        (self.time / TICKS_PER_FRAME) as usize % BIRD_FRAMES
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    /// Back to the starting position, alive and at rest
    pub fn restart(&mut self) {
        self.pos = Self::start_pos();
        self.speed = 0.0;
        self.alive = true;
        self.time = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::pipe::Orientation;
    use proptest::prelude::*;

    fn bird() -> Bird {
        Bird::new(&Tuning::default())
    }

    #[test]
    fn test_new_bird() {
        let b = bird();
        assert!(b.is_alive());
        assert_eq!(b.pos, Vec2::new(10.0, 300.0));
        assert_eq!(b.speed, 0.0);
        assert_eq!(b.frame(), 0);
    }

    #[test]
    fn test_falls_under_gravity() {
        let mut b = bird();
        b.update();
        assert_eq!(b.speed, 0.25);
        assert_eq!(b.pos.y, 299.75);
        b.update();
        assert_eq!(b.speed, 0.5);
        assert_eq!(b.pos.y, 299.25);
    }

    #[test]
    fn test_jump_moves_up() {
        let mut b = bird();
        assert!(b.jump());
        assert_eq!(b.speed, -5.0);
        b.update();
        assert!(b.pos.y > 300.0);
    }

    #[test]
    fn test_dies_at_bottom() {
        let mut b = bird();
        let mut ticks = 0;
        while b.is_alive() {
            b.update();
            ticks += 1;
            assert!(ticks < 1000);
        }
        assert!(b.pos.y < 0.0);
    }

    #[test]
    fn test_dies_at_top() {
        let mut b = bird();
        let mut ticks = 0;
        while b.is_alive() {
            b.jump();
            b.update();
            ticks += 1;
            assert!(ticks < 1000);
        }
        assert!(b.pos.y > WORLD_HEIGHT);
    }

    #[test]
    fn test_dead_bird_is_frozen() {
        let mut b = bird();
        b.pos.y = -1.0;
        b.update();
        assert!(!b.is_alive());
        let frozen = b.clone();
        b.update();
        assert!(!b.jump());
        assert_eq!(b, frozen);
    }

    #[test]
    fn test_mid_height_bird_hits_ceiling_pipe_reaching_below_it() {
        let mut b = bird();
        // Hangs from the top down to y=100, well below the bird at 300
        let pipe = Pipe::new(1, b.pos.x, 50.0, 500.0, Orientation::Ceiling);
        assert!(b.collides_with(&pipe));

        let far = Pipe::new(2, b.pos.x + 500.0, 50.0, 500.0, Orientation::Ceiling);
        assert!(!b.collides_with(&far));

        assert!(!b.touch(&far));
        assert!(b.is_alive());
        assert!(b.touch(&pipe));
        assert!(!b.is_alive());
    }

    #[test]
    fn test_animation_cycles() {
        let mut b = bird();
        for _ in 0..10 {
            b.jump();
            b.update();
        }
        assert_eq!(b.frame(), 1);
        for _ in 0..30 {
            b.jump();
            b.update();
        }
        assert_eq!(b.time(), 40);
        assert_eq!(b.frame(), 0);
    }

    #[test]
    fn test_restart() {
        let mut b = bird();
        for _ in 0..200 {
            b.update();
        }
        assert!(!b.is_alive());
        b.restart();
        assert_eq!(b, bird());
    }

    proptest! {
        #[test]
        fn prop_speed_grows_linearly(n in 0u32..30, start in -5.0f32..5.0) {
            let mut b = bird();
            b.speed = start;
            for _ in 0..n {
                b.update();
            }
            prop_assert!(b.is_alive());
            let expected = start + n as f32 * GRAVITY;
            prop_assert!((b.speed - expected).abs() < 1e-3);
        }

        #[test]
        fn prop_jump_resets_speed(speed in -100.0f32..100.0) {
            let mut b = bird();
            b.speed = speed;
            prop_assert!(b.jump());
            prop_assert_eq!(b.speed, -JUMP_SPEED);
        }

        #[test]
        fn prop_no_horizontal_overlap_never_collides(
            y in -100.0f32..700.0,
            gap in 0.001f32..500.0,
            height in 0.0f32..600.0,
            left in any::<bool>(),
            inverted in any::<bool>(),
        ) {
            let mut b = bird();
            b.pos.y = y;
            let orientation = if inverted { Orientation::Ceiling } else { Orientation::Floor };
            let x = if left {
                b.pos.x - PIPE_WIDTH - gap
            } else {
                b.pos.x + b.size.x + gap
            };
            let pipe = Pipe::new(1, x, PIPE_WIDTH, height, orientation);
            prop_assert!(!b.collides_with(&pipe));
        }
    }
}
