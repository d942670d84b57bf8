use super::DataStore;
use crate::book::CarparkBook;
use crate::error::{CarparkError, Result};

/// Keeps the saved book in memory. Can be told to fail, to exercise error paths.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<CarparkBook>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: CarparkBook) -> Self {
        Self {
            saved: Some(book),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Option<&CarparkBook> {
        self.saved.as_ref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_book(&self) -> Result<CarparkBook> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save_book(&mut self, book: &CarparkBook) -> Result<()> {
        if self.fail_saves {
            return Err(CarparkError::Io(std::io::Error::other("save failed")));
        }
        self.saved = Some(book.clone());
        self.saves += 1;
        Ok(())
    }
}
