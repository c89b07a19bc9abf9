//! Data-driven game balance
//!
//! Physics, pipe geometry and scoring constants. Defaults come from
//! [`crate::consts`]; any field may be overridden from the settings file.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to the bird's falling speed every tick
    pub gravity: f32,
    /// Upward speed a jump sets
    pub jump_speed: f32,
    /// Leftward pipe movement per tick
    pub scroll_speed: f32,
    pub pipe_width: f32,
    /// Distance the rightmost pipe travels before the next one spawns
    pub pipe_spacing: f32,
    pub pipe_min_height: f32,
    /// Random extra pipe height, drawn from `[0, pipe_height_range)`
    pub pipe_height_range: f32,
    /// Points for the first cleared pipe of a round
    pub score_base: u64,
    /// Extra points each further pipe is worth
    pub score_step: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            scroll_speed: PIPE_SCROLL_SPEED,
            pipe_width: PIPE_WIDTH,
            pipe_spacing: PIPE_SPACING,
            pipe_min_height: PIPE_MIN_HEIGHT,
            pipe_height_range: PIPE_HEIGHT_RANGE,
            score_base: SCORE_BASE,
            score_step: SCORE_STEP,
        }
    }
}

impl Tuning {
    /// Tallest pipe the stream can produce
    pub fn max_pipe_height(&self) -> f32 {
        self.pipe_min_height + self.pipe_height_range
    }

    /// Pipes may never overlap horizontally, otherwise more than one pipe
    /// could score or collide at the bird's position in the same tick.
    pub fn spacing_is_valid(&self) -> bool {
        self.pipe_spacing > self.pipe_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.jump_speed, JUMP_SPEED);
        assert_eq!(tuning.score_base, 10);
        assert_eq!(tuning.score_step, 10);
        assert!(tuning.spacing_is_valid());
        assert!(tuning.max_pipe_height() < WORLD_HEIGHT);
    }

    #[test]
    fn test_partial_override() {
        let tuning: Tuning = serde_json::from_str(r#"{ "gravity": 0.5 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.jump_speed, JUMP_SPEED);
        assert_eq!(tuning.pipe_spacing, PIPE_SPACING);
    }
}
