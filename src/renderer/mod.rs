//! Rendering module
//!
//! The scene never touches pixels. It loads textures once, then each tick
//! clears the frame, draws textured rectangles and presents.

pub mod sprites;

pub use sprites::{Sprites, paint};

use std::path::Path;

use thiserror::Error;

/// Handle to a texture owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Destination rectangle in screen pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// A draw or load call failed; the graphics context is likely gone
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct RenderError(pub String);

/// Low-level drawing backend
pub trait Renderer {
    fn clear_frame(&mut self) -> Result<(), RenderError>;

    fn draw_sprite(&mut self, texture: TextureId, dest: Rect) -> Result<(), RenderError>;

    /// Draw upside down. Backends without flipping draw it upright.
    fn draw_sprite_flipped(&mut self, texture: TextureId, dest: Rect) -> Result<(), RenderError> {
        self.draw_sprite(texture, dest)
    }

    /// Draw a line of HUD text. Backends without fonts skip it.
    fn draw_text(&mut self, _text: &str, _dest: Rect) -> Result<(), RenderError> {
        Ok(())
    }

    fn present_frame(&mut self) -> Result<(), RenderError>;

    fn load_texture(&mut self, path: &Path) -> Result<TextureId, RenderError>;

    fn destroy_texture(&mut self, texture: TextureId);
}
