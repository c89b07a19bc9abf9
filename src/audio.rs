//! Audio collaborator
//!
//! The core only asks for one-shot effects and background music control;
//! decoding and mixing belong to the backend.

use std::path::Path;

use thiserror::Error;

use crate::error::{GameError, Result};
use crate::settings::Settings;

/// Handle to a loaded sound effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u32);

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bird flaps
    Jump,
}

impl SoundEffect {
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "boing.wav",
        }
    }
}

/// Background music file under the audio directory
pub const MUSIC_FILE: &str = "music.mp3";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct AudioError(pub String);

/// Audio backend
pub trait Audio {
    fn load_sound(&mut self, path: &Path) -> std::result::Result<SoundId, AudioError>;

    fn load_music(&mut self, path: &Path) -> std::result::Result<(), AudioError>;

    fn play_one_shot(&mut self, sound: SoundId);

    /// Whether any sound effect is still playing
    fn is_any_playing(&self) -> bool;

    /// Start the music, forever if `looped`
    fn play_music(&mut self, looped: bool);

    fn pause_music(&mut self);

    fn resume_music(&mut self);

    fn rewind_music(&mut self);
}

/// Loaded sound handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sounds {
    pub jump: SoundId,
}

impl Sounds {
    /// Load effects, and the music track when music is enabled
    pub fn load<A: Audio>(audio: &mut A, settings: &Settings) -> Result<Self> {
        let path = settings.audio_path(SoundEffect::Jump.file_name());
        let jump = audio
            .load_sound(&path)
            .map_err(|source| GameError::Sound { path, source })?;

        if settings.music {
            let path = settings.audio_path(MUSIC_FILE);
            audio
                .load_music(&path)
                .map_err(|source| GameError::Sound { path, source })?;
        }

        Ok(Self { jump })
    }

    pub fn id(&self, effect: SoundEffect) -> SoundId {
        match effect {
            SoundEffect::Jump => self.jump,
        }
    }
}

/// Audio that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl Audio for SilentAudio {
    fn load_sound(&mut self, _path: &Path) -> std::result::Result<SoundId, AudioError> {
        Ok(SoundId(0))
    }

    fn load_music(&mut self, _path: &Path) -> std::result::Result<(), AudioError> {
        Ok(())
    }

    fn play_one_shot(&mut self, _sound: SoundId) {}

    fn is_any_playing(&self) -> bool {
        false
    }

    fn play_music(&mut self, _looped: bool) {}

    fn pause_music(&mut self) {}

    fn resume_music(&mut self) {}

    fn rewind_music(&mut self) {}
}
