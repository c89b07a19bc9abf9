//! The game-over choice
//!
//! Shown once per lost round with two buttons. One means play again, the
//! other means quit; there is no third outcome.

use thiserror::Error;

use crate::sim::Score;

/// The player's answer at game over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Retry,
    Quit,
}

impl Choice {
    /// Button labels, in display order
    pub const LABELS: [(&'static str, Choice); 2] = [("Retry", Choice::Retry), ("Quit", Choice::Quit)];

    /// Map a pressed button label to a choice. Unknown labels mean quit.
    pub fn from_label(label: &str) -> Self {
        Self::LABELS
            .iter()
            .find(|(l, _)| l.eq_ignore_ascii_case(label))
            .map(|(_, c)| *c)
            .unwrap_or(Choice::Quit)
    }
}

/// The modal could not be shown
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct PromptError(pub String);

/// A retry/quit modal
pub trait Prompt {
    /// Ask the player, showing the final score of the round
    fn choose(&mut self, score: &Score) -> Result<Choice, PromptError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(Choice::from_label("Retry"), Choice::Retry);
        assert_eq!(Choice::from_label("retry"), Choice::Retry);
        assert_eq!(Choice::from_label("Quit"), Choice::Quit);
        assert_eq!(Choice::from_label("???"), Choice::Quit);
    }
}
