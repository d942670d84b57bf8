//! A UI-agnostic model of the command input box.
//!
//! [`CommandBox`] owns the text being typed and the [`HistoryNavigator`] for the
//! current submission cycle. Up/down keys map to [`CommandBox::navigate_previous`]
//! and [`CommandBox::navigate_next`]; running off either end of the history is a
//! silent no-op, exactly like a shell.

use crate::history::{CommandHistory, HistoryNavigator};

#[derive(Debug, Clone)]
pub struct CommandBox {
    text: String,
    navigator: HistoryNavigator,
}

impl CommandBox {
    pub fn new(history: &CommandHistory) -> Self {
        Self {
            text: String::new(),
            navigator: history.navigator(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the typed text. While the cursor sits on the draft, the draft
    /// follows the text so that navigating away and back restores it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if let Err(err) = self.navigator.set_draft(self.text.clone()) {
            tracing::trace!(error = %err, "editing a recalled entry, draft kept");
        }
    }

    /// Shows the previous history entry. Returns `false` when already at the oldest.
    pub fn navigate_previous(&mut self) -> bool {
        match self.navigator.previous() {
            Ok(entry) => {
                self.text = entry.to_string();
                true
            }
            Err(_) => false,
        }
    }

    /// Shows the next history entry, ending at the draft. Returns `false` at the draft.
    pub fn navigate_next(&mut self) -> bool {
        match self.navigator.next() {
            Ok(entry) => {
                self.text = entry.to_string();
                true
            }
            Err(_) => false,
        }
    }

    /// Records the current text in `history`, clears the box and starts a new cycle.
    ///
    /// The text is recorded before it is executed, so failed commands are recalled too.
    pub fn submit(&mut self, history: &mut CommandHistory) -> String {
        let submitted = std::mem::take(&mut self.text);
        history.add(submitted.clone());
        self.navigator = history.navigator();
        tracing::trace!(command = %submitted, entries = history.len(), "command submitted");
        submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(entries: &[&str]) -> CommandHistory {
        let mut history = CommandHistory::new();
        for entry in entries {
            history.add(*entry);
        }
        history
    }

    #[test]
    fn navigation_replaces_text() {
        let history = history(&["find a", "select 2"]);
        let mut input = CommandBox::new(&history);

        assert!(input.navigate_previous());
        assert_eq!(input.text(), "select 2");
        assert!(input.navigate_previous());
        assert_eq!(input.text(), "find a");
        assert!(!input.navigate_previous());
        assert_eq!(input.text(), "find a");

        assert!(input.navigate_next());
        assert!(input.navigate_next());
        assert_eq!(input.text(), "");
        assert!(!input.navigate_next());
    }

    #[test]
    fn draft_is_restored_after_browsing() {
        let history = history(&["list"]);
        let mut input = CommandBox::new(&history);
        input.set_text("find tel");

        assert!(input.navigate_previous());
        assert_eq!(input.text(), "list");
        assert!(input.navigate_next());
        assert_eq!(input.text(), "find tel");
    }

    #[test]
    fn editing_a_recalled_entry_does_not_touch_history() {
        let mut history = history(&["list"]);
        let mut input = CommandBox::new(&history);
        input.navigate_previous();
        input.set_text("list all");

        let submitted = input.submit(&mut history);
        assert_eq!(submitted, "list all");
        assert_eq!(history.entries(), &["list", "list all"]);
    }

    #[test]
    fn editing_a_recalled_entry_keeps_the_draft() {
        let history = history(&["list"]);
        let mut input = CommandBox::new(&history);
        input.set_text("find tel");
        input.navigate_previous();
        input.set_text("list all");

        assert!(input.navigate_next());
        assert_eq!(input.text(), "find tel");
        assert!(input.navigate_previous());
        assert_eq!(input.text(), "list");
    }

    #[test]
    fn submit_starts_a_new_cycle() {
        let mut history = CommandHistory::new();
        let mut input = CommandBox::new(&history);
        assert!(!input.navigate_previous());

        input.set_text("undo");
        input.submit(&mut history);
        assert_eq!(input.text(), "");

        assert!(input.navigate_previous());
        assert_eq!(input.text(), "undo");
    }
}
