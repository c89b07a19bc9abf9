//! Collision detection for axis-aligned boxes
//!
//! The bird and the pipes are plain rectangles in world space (y up). A pipe
//! is solid from its base to its tip, and everything beyond the tip on the
//! open side is the gap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pipe::{Orientation, Pipe};
use crate::consts::WORLD_HEIGHT;

/// An axis-aligned bounding box in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box with its left edge at `left` and its vertical centre at `center_y`
    pub fn from_left_center(left: f32, center_y: f32, size: Vec2) -> Self {
        let min = Vec2::new(left, center_y - size.y / 2.0);
        Self::new(min, min + size)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Horizontal extents overlap (touching edges count)
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && other.min.x <= self.max.x
    }

    /// Full 2D overlap (touching edges count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.min.y <= other.max.y && other.min.y <= self.max.y
    }
}

/// Check whether a box hits the solid part of a pipe
///
/// No horizontal overlap is never a hit. Otherwise a floor pipe is hit when
/// the box's bottom edge is below the pipe's top, and a ceiling pipe is hit
/// when the box's top edge is above the pipe's lower end
/// (`WORLD_HEIGHT - height`).
pub fn hits_pipe(bounds: &Aabb, pipe: &Pipe) -> bool {
    if !bounds.overlaps_x(&pipe.bounds()) {
        return false;
    }
    match pipe.orientation {
        Orientation::Floor => bounds.min.y < pipe.height,
        Orientation::Ceiling => bounds.max.y > WORLD_HEIGHT - pipe.height,
    }
}
