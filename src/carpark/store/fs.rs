use super::DataStore;
use crate::book::CarparkBook;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "carparks.json";

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

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_book(&self) -> Result<CarparkBook> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no data file, starting with an empty list");
            return Ok(CarparkBook::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let book: CarparkBook = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), carparks = book.len(), "loaded car parks");
        Ok(book)
    }

    fn save_book(&mut self, book: &CarparkBook) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(book)?;
        // Write to a sibling file first so a crash never leaves a truncated data file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), carparks = book.len(), "saved car parks");
        Ok(())
    }
}
