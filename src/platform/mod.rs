//! Platform abstraction layer
//!
//! Everything the scene needs from outside the simulation:
//! - Time/ticks
//! - Input events
//! - Storage (the high score file)
//! - The retry/quit prompt shown at game over
//! - Headless stand-ins for running without a window

pub mod headless;
pub mod input;
pub mod prompt;
pub mod storage;
pub mod time;

pub use input::InputEvent;
pub use prompt::{Choice, Prompt, PromptError};
pub use storage::{FileStore, HighScoreStore, MemoryStore};
pub use time::{Clock, TickStats, Ticker};
