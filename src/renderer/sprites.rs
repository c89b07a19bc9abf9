//! Sprite painter
//!
//! Converts world space (y up) into screen rectangles (y down) and issues
//! draw calls. Each entity is read under its own read lock, one at a time.

use crate::consts::*;
use crate::error::{GameError, Result};
use crate::settings::Settings;
use crate::sim::collision::Aabb;
use crate::world::World;

use super::{Rect, RenderError, Renderer, TextureId};

/// HUD placement, matching an 800×600 window
const HIGH_SCORE_RECT: Rect = Rect::new(10, 10, 200, 30);
const SCORE_RECT: Rect = Rect::new(580, 10, 200, 30);

/// Textures loaded at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprites {
    pub background: TextureId,
    pub bird_frames: Vec<TextureId>,
    pub pipe: TextureId,
}

impl Sprites {
    /// Load every texture the scene draws. Any failure aborts startup.
    pub fn load<R: Renderer>(renderer: &mut R, settings: &Settings) -> Result<Self> {
        let mut load = |name: String| {
            let path = settings.image_path(&name);
            renderer
                .load_texture(&path)
                .map_err(|source| GameError::Asset { path, source })
        };

        let background = load("background.png".to_string())?;
        let bird_frames = (1..=BIRD_FRAMES)
            .map(|i| load(format!("bird_frame_{i}.png")))
            .collect::<Result<Vec<_>>>()?;
        let pipe = load("pipe.png".to_string())?;

        log::info!("Loaded {} textures", bird_frames.len() + 2);
        Ok(Self {
            background,
            bird_frames,
            pipe,
        })
    }

    /// Destroy every texture
    pub fn release<R: Renderer>(&self, renderer: &mut R) {
        renderer.destroy_texture(self.background);
        for &frame in &self.bird_frames {
            renderer.destroy_texture(frame);
        }
        renderer.destroy_texture(self.pipe);
    }
}

/// Map a world box to a screen rectangle
pub fn to_screen(bounds: &Aabb) -> Rect {
    Rect::new(
        bounds.min.x.round() as i32,
        (WORLD_HEIGHT - bounds.max.y).round() as i32,
        bounds.width().round() as i32,
        bounds.height().round() as i32,
    )
}

/// Draw one full frame: background, pipes, bird, score
pub fn paint<R: Renderer>(
    world: &World,
    sprites: &Sprites,
    renderer: &mut R,
) -> std::result::Result<(), RenderError> {
    renderer.clear_frame()?;
    renderer.draw_sprite(
        sprites.background,
        Rect::new(0, 0, WORLD_WIDTH as i32, WORLD_HEIGHT as i32),
    )?;

    {
        let pipes = world.pipes.read();
        for pipe in pipes.pipes() {
            let dest = to_screen(&pipe.bounds());
            if pipe.is_inverted() {
                renderer.draw_sprite_flipped(sprites.pipe, dest)?;
            } else {
                renderer.draw_sprite(sprites.pipe, dest)?;
            }
        }
    }

    let (frame, dest) = {
        let bird = world.bird.read();
        (bird.frame(), to_screen(&bird.bounds()))
    };
    if let Some(&texture) = sprites.bird_frames.get(frame) {
        renderer.draw_sprite(texture, dest)?;
    }

    let score = world.score.snapshot();
    renderer.draw_text(&format!("High Score: {}", score.best), HIGH_SCORE_RECT)?;
    renderer.draw_text(&format!("Score: {}", score.current), SCORE_RECT)?;

    renderer.present_frame()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::{DrawCall, HeadlessRenderer};
    use crate::platform::storage::MemoryStore;
    use crate::sim::{Orientation, Pipe};
    use glam::Vec2;

    fn world() -> World {
        World::new(&Settings::default(), 1, Box::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_load_and_release() {
        let mut renderer = HeadlessRenderer::new();
        let sprites = Sprites::load(&mut renderer, &Settings::default()).unwrap();
        assert_eq!(sprites.bird_frames.len(), 4);
        assert_eq!(renderer.loaded().len(), 6);
        sprites.release(&mut renderer);
        assert_eq!(renderer.live_textures(), 0);
    }

    #[test]
    fn test_missing_texture_is_fatal() {
        let mut renderer = HeadlessRenderer::new().fail_loading("bird_frame_3");
        let err = Sprites::load(&mut renderer, &Settings::default()).unwrap_err();
        match err {
            GameError::Asset { path, .. } => {
                assert!(path.ends_with("imgs/bird_frame_3.png"))
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_to_screen_flips_y() {
        let b = Aabb::from_left_center(10.0, 300.0, Vec2::splat(42.0));
        assert_eq!(to_screen(&b), Rect::new(10, 279, 42, 42));
        let top = Aabb::new(Vec2::new(0.0, 500.0), Vec2::new(50.0, 600.0));
        assert_eq!(to_screen(&top), Rect::new(0, 0, 50, 100));
    }

    #[test]
    fn test_paint_frame() {
        let world = world();
        world
            .pipes
            .write()
            .push(Pipe::new(0, 400.0, 50.0, 150.0, Orientation::Ceiling));
        world.score.increase();

        let mut renderer = HeadlessRenderer::new();
        let sprites = Sprites::load(&mut renderer, &Settings::default()).unwrap();
        paint(&world, &sprites, &mut renderer).unwrap();

        assert_eq!(renderer.frames(), 1);
        let calls = renderer.last_frame();
        assert_eq!(calls[0], DrawCall::Sprite(sprites.background, Rect::new(0, 0, 800, 600)));
        assert_eq!(calls[1], DrawCall::Flipped(sprites.pipe, Rect::new(400, 0, 50, 150)));
        assert_eq!(
            calls[2],
            DrawCall::Sprite(sprites.bird_frames[0], Rect::new(10, 279, 42, 42))
        );
        assert_eq!(calls[3], DrawCall::Text("High Score: 10".to_string()));
        assert_eq!(calls[4], DrawCall::Text("Score: 10".to_string()));
    }

    #[test]
    fn test_paint_surfaces_present_failure() {
        let world = world();
        let mut renderer = HeadlessRenderer::new().fail_after_frames(0);
        let sprites = Sprites::load(&mut renderer, &Settings::default()).unwrap();
        assert!(paint(&world, &sprites, &mut renderer).is_err());
    }
}
