//! Error types
//!
//! Every error here ends the current run; there is no retry policy.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::audio::AudioError;
use crate::platform::prompt::PromptError;
use crate::renderer::RenderError;

/// Errors surfaced by the scene and its collaborators.
#[derive(Error, Debug)]
pub enum GameError {
    /// A texture could not be loaded at startup.
    #[error("could not load texture {path}: {source}")]
    Asset {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    /// A sound or the music track could not be loaded at startup.
    #[error("could not load sound {path}: {source}")]
    Sound {
        path: PathBuf,
        #[source]
        source: AudioError,
    },

    /// The high score store failed for a reason other than a missing file.
    #[error("could not read high score: {0}")]
    HighScoreRead(#[source] io::Error),

    #[error("could not write high score: {0}")]
    HighScoreWrite(#[source] io::Error),

    /// The stored high score is not an integer. Never silently reset.
    #[error("could not convert high score {content:?}: {source}")]
    MalformedHighScore {
        content: String,
        #[source]
        source: ParseIntError,
    },

    /// Draw or present failed mid-round.
    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    /// The retry prompt failed.
    #[error("prompt failed: {0}")]
    Prompt(#[from] PromptError),

    /// The settings file exists but could not be read or parsed.
    #[error("invalid settings file {path}: {reason}")]
    Settings { path: PathBuf, reason: String },
}

/// Result type for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
