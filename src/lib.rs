//! Flappy - A side-scrolling arcade game core
//!
//! Core modules:
//! - `sim`: Pure simulation (bird physics, pipe stream, collisions, score)
//! - `world`: Per-entity locked state shared between the loop and readers
//! - `scene`: Fixed-tick loop and the playing/game-over/quitting state machine
//! - `renderer`: Draw collaborator contract and the sprite painter
//! - `audio`: Sound collaborator contract
//! - `platform`: Clock, input events, high score storage, retry prompt
//! - `persistence`: High score text format
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod highscore;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod world;

pub use error::{GameError, Result};
pub use highscore::ScoreKeeper;
pub use scene::{RunSummary, Scene, SceneState};
pub use settings::Settings;
pub use tuning::Tuning;
pub use world::World;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick (10 ms, 100 Hz)
    pub const TICK_MILLIS: u64 = 10;

    /// World dimensions (origin bottom-left, y grows upward)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Bird defaults - the bird never moves horizontally
    pub const BIRD_X: f32 = 10.0;
    pub const BIRD_SIZE: f32 = WORLD_HEIGHT * 0.07;
    /// Number of flap animation frames
    pub const BIRD_FRAMES: usize = 4;
    /// Ticks each animation frame stays on screen
    pub const TICKS_PER_FRAME: u64 = 10;

    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.25;
    /// Upward speed set by a jump (units/tick)
    pub const JUMP_SPEED: f32 = 5.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 50.0;
    pub const PIPE_SCROLL_SPEED: f32 = 2.0;
    /// Horizontal distance the rightmost pipe travels before the next spawns
    pub const PIPE_SPACING: f32 = 200.0;
    pub const PIPE_MIN_HEIGHT: f32 = 100.0;
    pub const PIPE_HEIGHT_RANGE: f32 = 300.0;

    /// Score awarded for the first cleared pipe, and its growth per pipe
    pub const SCORE_BASE: u64 = 10;
    pub const SCORE_STEP: u64 = 10;
}

/// Stir a round number into the run seed so every round gets its own layout
#[inline]
pub fn round_seed(seed: u64, round: u32) -> u64 {
    (u64::from(round)).wrapping_mul(2654435761).wrapping_add(seed)
}
