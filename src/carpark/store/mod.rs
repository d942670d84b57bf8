//! # Storage Layer
//!
//! The versioned model lives in memory; this layer only loads the initial book
//! and saves the current one after it changes. The [`DataStore`] trait lets the
//! application run against different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one pretty-printed JSON file
//!   holding the car park list. A missing file is an empty book.
//! - [`memory::InMemoryStore`]: In-memory storage for testing.
//!
//! ## Failure Policy
//!
//! Persistence is best effort from the model's point of view. The API layer
//! logs save failures and carries on: a command that succeeded in memory is
//! never reported as failed because the disk was full.

use crate::book::CarparkBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for car park persistence.
pub trait DataStore {
    /// Load the saved book. Implementations return an empty book when nothing was saved yet.
    fn load_book(&self) -> Result<CarparkBook>;

    /// Replace the saved book with `book`.
    fn save_book(&mut self, book: &CarparkBook) -> Result<()>;
}
