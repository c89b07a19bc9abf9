//! High score persistence
//!
//! The best score is stored as a bare base-10 integer. Surrounding ASCII
//! whitespace (a trailing newline from an editor) is tolerated; anything
//! else is an error, so a corrupt record is never silently replaced by 0.

use crate::error::{GameError, Result};
use crate::platform::storage::HighScoreStore;

/// Parse stored text into a score
pub fn parse_high_score(content: &str) -> Result<u64> {
    content
        .trim()
        .parse::<u64>()
        .map_err(|source| GameError::MalformedHighScore {
            content: content.to_string(),
            source,
        })
}

/// Text written for a score
pub fn format_high_score(score: u64) -> String {
    score.to_string()
}

/// Read the best score; nothing stored means 0
pub fn load_best(store: &dyn HighScoreStore) -> Result<u64> {
    match store.read().map_err(GameError::HighScoreRead)? {
        Some(content) => parse_high_score(&content),
        None => Ok(0),
    }
}

/// Write the best score
pub fn save_best(store: &dyn HighScoreStore, best: u64) -> Result<()> {
    store
        .write(&format_high_score(best))
        .map_err(GameError::HighScoreWrite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::{FileStore, MemoryStore};

    #[test]
    fn test_parse() {
        assert_eq!(parse_high_score("150").unwrap(), 150);
        assert_eq!(parse_high_score("0").unwrap(), 0);
        assert_eq!(parse_high_score("320\n").unwrap(), 320);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "abc", "12abc", "-5", "1.5"] {
            assert!(
                matches!(parse_high_score(bad), Err(GameError::MalformedHighScore { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_absent_is_zero() {
        assert_eq!(load_best(&MemoryStore::new()).unwrap(), 0);
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("high.txt"));
        assert_eq!(load_best(&store).unwrap(), 0);
    }

    #[test]
    fn test_save_writes_plain_integer() {
        let store = MemoryStore::new();
        save_best(&store, 150).unwrap();
        assert_eq!(store.content().as_deref(), Some("150"));
        assert_eq!(load_best(&store).unwrap(), 150);
    }

    #[test]
    fn test_unreadable_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(load_best(&store), Err(GameError::HighScoreRead(_))));
    }
}
