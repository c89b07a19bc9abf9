//! Simulation module
//!
//! All gameplay rules live here. This module must stay free of locks, I/O
//! and platform dependencies:
//! - Fixed tick only
//! - Seeded RNG only
//! - Pipes kept in x order

pub mod bird;
pub mod collision;
pub mod pipe;
pub mod score;

pub use bird::Bird;
pub use collision::{Aabb, hits_pipe};
pub use pipe::{Orientation, Pipe, PipeStream};
pub use score::Score;
