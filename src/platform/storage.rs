//! Raw high score storage
//!
//! Stores move text in and out and nothing else; parsing lives in
//! [`crate::persistence`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

/// Where the best score text lives
pub trait HighScoreStore: Send + Sync {
    /// Stored text, or `None` if nothing has been stored yet
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the stored text
    fn write(&self, content: &str) -> io::Result<()>;
}

/// A plain text file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, content: &str) -> io::Result<()> {
        fs::write(&self.path, content)
    }
}

/// In-memory store; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
    writes: Arc<Mutex<u32>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        let store = Self::new();
        *store.slot.lock() = Some(content.to_string());
        store
    }

    pub fn content(&self) -> Option<String> {
        self.slot.lock().clone()
    }

    /// Number of writes so far
    pub fn writes(&self) -> u32 {
        *self.writes.lock()
    }
}

impl HighScoreStore for MemoryStore {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.slot.lock().clone())
    }

    fn write(&self, content: &str) -> io::Result<()> {
        *self.slot.lock() = Some(content.to_string());
        *self.writes.lock() += 1;
        Ok(())
    }
}
