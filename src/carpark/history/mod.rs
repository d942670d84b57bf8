//! # Command History
//!
//! Two pieces work together to give the input box shell-like recall:
//!
//! - [`CommandHistory`]: the permanent, append-only log of every submitted
//!   command line, owned by the API layer. Failed commands are recorded too,
//!   so a typo can be recalled and fixed.
//! - [`HistoryNavigator`]: a throwaway cursor over a *copy* of that log with an
//!   extra empty draft entry at the newest end. A fresh navigator is created for
//!   every submission cycle and discarded afterwards.
//!
//! ```text
//!  persisted:  ["find a", "select 2"]
//!  navigator:  ["find a", "select 2", ""]
//!                                      ^ cursor starts on the draft
//! ```

mod navigator;

pub use navigator::HistoryNavigator;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandHistory {
    entries: Vec<String>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` verbatim. Duplicates are kept.
    pub fn add(&mut self, text: impl Into<String>) {
        self.entries.push(text.into());
    }

    /// Entries from oldest to newest.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A fresh navigator for one submission cycle.
    pub fn navigator(&self) -> HistoryNavigator {
        HistoryNavigator::new(self.entries.clone())
    }
}
