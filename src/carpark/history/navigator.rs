use crate::error::{CarparkError, Result};

/// A cursor over a copy of the command history plus a trailing draft entry.
///
/// `previous` walks toward the oldest entry, `next` walks back toward the draft.
/// Moving past either end is an error rather than a clamp, so callers can tell
/// "moved" apart from "already at the end".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryNavigator {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryNavigator {
    /// Builds a navigator over `history` with an empty draft appended.
    pub fn new(history: Vec<String>) -> Self {
        let mut entries = history;
        entries.push(String::new());
        let cursor = entries.len() - 1;
        Self { entries, cursor }
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.draft_index()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn previous(&mut self) -> Result<&str> {
        if !self.has_previous() {
            return Err(CarparkError::NoPreviousHistory);
        }
        self.cursor -= 1;
        Ok(&self.entries[self.cursor])
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&str> {
        if !self.has_next() {
            return Err(CarparkError::NoNextHistory);
        }
        self.cursor += 1;
        Ok(&self.entries[self.cursor])
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn is_at_draft(&self) -> bool {
        self.cursor == self.draft_index()
    }

    pub fn draft(&self) -> &str {
        &self.entries[self.draft_index()]
    }

    /// Overwrites the draft. Only allowed while the cursor is on it.
    pub fn set_draft(&mut self, text: impl Into<String>) -> Result<()> {
        if !self.is_at_draft() {
            return Err(CarparkError::NotAtDraft);
        }
        let draft = self.draft_index();
        self.entries[draft] = text.into();
        Ok(())
    }

    fn draft_index(&self) -> usize {
        self.entries.len() - 1
    }
}
