//! Headless collaborators
//!
//! Stand-ins for the window, the mixer and the modal so the scene can run
//! without a display: the demo binary and the tests both use them.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use super::prompt::{Choice, Prompt, PromptError};
use crate::audio::{Audio, AudioError, SoundId};
use crate::renderer::{Rect, RenderError, Renderer, TextureId};
use crate::sim::Score;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Sprite(TextureId, Rect),
    Flipped(TextureId, Rect),
    Text(String),
}

/// Renderer that records frames instead of drawing them
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    next_texture: u32,
    loaded: Vec<(TextureId, PathBuf)>,
    destroyed: Vec<TextureId>,
    current: Vec<DrawCall>,
    last_frame: Vec<DrawCall>,
    frames: u32,
    fail_loading: Option<String>,
    fail_after_frames: Option<u32>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail to load any texture whose path contains `pattern`
    pub fn fail_loading(mut self, pattern: &str) -> Self {
        self.fail_loading = Some(pattern.to_string());
        self
    }

    /// Fail to present once `frames` frames have been shown
    pub fn fail_after_frames(mut self, frames: u32) -> Self {
        self.fail_after_frames = Some(frames);
        self
    }

    /// Frames presented so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    pub fn loaded(&self) -> Vec<&Path> {
        self.loaded.iter().map(|(_, p)| p.as_path()).collect()
    }

    /// Textures loaded and not yet destroyed
    pub fn live_textures(&self) -> usize {
        self.loaded
            .iter()
            .filter(|(id, _)| !self.destroyed.contains(id))
            .count()
    }
}

impl Renderer for HeadlessRenderer {
    fn clear_frame(&mut self) -> Result<(), RenderError> {
        self.current.clear();
        Ok(())
    }

    fn draw_sprite(&mut self, texture: TextureId, dest: Rect) -> Result<(), RenderError> {
        self.current.push(DrawCall::Sprite(texture, dest));
        Ok(())
    }

    fn draw_sprite_flipped(&mut self, texture: TextureId, dest: Rect) -> Result<(), RenderError> {
        self.current.push(DrawCall::Flipped(texture, dest));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, _dest: Rect) -> Result<(), RenderError> {
        self.current.push(DrawCall::Text(text.to_string()));
        Ok(())
    }

    fn present_frame(&mut self) -> Result<(), RenderError> {
        if self.fail_after_frames.is_some_and(|n| self.frames >= n) {
            return Err(RenderError("graphics context lost".to_string()));
        }
        self.frames += 1;
        self.last_frame = std::mem::take(&mut self.current);
        Ok(())
    }

    fn load_texture(&mut self, path: &Path) -> Result<TextureId, RenderError> {
        if let Some(pattern) = &self.fail_loading {
            if path.to_string_lossy().contains(pattern.as_str()) {
                return Err(RenderError(format!("no such file {}", path.display())));
            }
        }
        self.next_texture += 1;
        let id = TextureId(self.next_texture);
        self.loaded.push((id, path.to_path_buf()));
        Ok(id)
    }

    fn destroy_texture(&mut self, texture: TextureId) {
        self.destroyed.push(texture);
    }
}

/// Music transport state seen by [`RecordingAudio`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MusicState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Audio that records what it was asked to do
#[derive(Debug, Default)]
pub struct RecordingAudio {
    played: Vec<SoundId>,
    busy: bool,
    music_loaded: bool,
    music: MusicState,
    rewinds: u32,
    fail_loading: bool,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_loading(mut self) -> Self {
        self.fail_loading = true;
        self
    }

    /// Pretend an effect is still playing
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn played(&self) -> &[SoundId] {
        &self.played
    }

    pub fn music_loaded(&self) -> bool {
        self.music_loaded
    }

    pub fn music(&self) -> MusicState {
        self.music
    }

    pub fn rewinds(&self) -> u32 {
        self.rewinds
    }
}

impl Audio for RecordingAudio {
    fn load_sound(&mut self, path: &Path) -> Result<SoundId, AudioError> {
        if self.fail_loading {
            return Err(AudioError(format!("could not open {}", path.display())));
        }
        Ok(SoundId(1))
    }

    fn load_music(&mut self, path: &Path) -> Result<(), AudioError> {
        if self.fail_loading {
            return Err(AudioError(format!("could not open {}", path.display())));
        }
        self.music_loaded = true;
        Ok(())
    }

    fn play_one_shot(&mut self, sound: SoundId) {
        self.played.push(sound);
    }

    fn is_any_playing(&self) -> bool {
        self.busy
    }

    fn play_music(&mut self, _looped: bool) {
        self.music = MusicState::Playing;
    }

    fn pause_music(&mut self) {
        if self.music == MusicState::Playing {
            self.music = MusicState::Paused;
        }
    }

    fn resume_music(&mut self) {
        if self.music == MusicState::Paused {
            self.music = MusicState::Playing;
        }
    }

    fn rewind_music(&mut self) {
        self.rewinds += 1;
    }
}

/// Answers from a fixed script, then quits
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    script: VecDeque<Choice>,
    shown: Vec<Score>,
}

impl ScriptedPrompt {
    pub fn new(script: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            script: script.into_iter().collect(),
            shown: Vec::new(),
        }
    }

    /// Final scores of every round the prompt was shown for
    pub fn shown(&self) -> &[Score] {
        &self.shown
    }
}

impl Prompt for ScriptedPrompt {
    fn choose(&mut self, score: &Score) -> Result<Choice, PromptError> {
        self.shown.push(*score);
        Ok(self.script.pop_front().unwrap_or(Choice::Quit))
    }
}

/// Retries until `rounds` rounds have been played
#[derive(Debug, Clone, Copy)]
pub struct RoundLimit {
    rounds: u32,
    played: u32,
}

impl RoundLimit {
    pub fn new(rounds: u32) -> Self {
        Self { rounds, played: 0 }
    }
}

impl Prompt for RoundLimit {
    fn choose(&mut self, score: &Score) -> Result<Choice, PromptError> {
        self.played += 1;
        log::info!(
            "Round {} over: score {}, best {}",
            self.played,
            score.current,
            score.best
        );
        if self.played < self.rounds {
            Ok(Choice::Retry)
        } else {
            Ok(Choice::Quit)
        }
    }
}
