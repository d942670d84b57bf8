//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every UI client (the bundled REPL, tests, a future GUI).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the model, the permanent command history and the data store
//! - **Persists** the current book after every successful change of data
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## Persistence
//!
//! The model publishes changes through [`ModelManager::subscribe`]. The API
//! registers a listener that forwards changed snapshots into a channel and
//! drains it after each call, saving only the newest snapshot. Snapshots are
//! immutable `Arc`s, so handing them to the store never blocks or aliases the
//! model. A failed save is logged and otherwise ignored: the in-memory model
//! stays authoritative.
//!
//! ## Generic Over DataStore
//!
//! - Production: `CarparkApi<FileStore>`
//! - Testing: `CarparkApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::filter::FilterCriteria;
use crate::history::CommandHistory;
use crate::index::DisplayIndex;
use crate::manager::{ModelEvent, ModelManager};
use crate::model::{Carpark, CarparkEdit};
use crate::store::DataStore;
use crate::versioned::Snapshot;
use crate::view::FilteredView;
use std::sync::mpsc::{self, Receiver};

pub struct CarparkApi<S: DataStore> {
    model: ModelManager,
    history: CommandHistory,
    store: S,
    changes: Receiver<Snapshot>,
}

impl<S: DataStore> CarparkApi<S> {
    /// Seeds the model from `store`. A store that fails to load yields an empty list.
    pub fn load(store: S) -> Self {
        let book = match store.load_book() {
            Ok(book) => book,
            Err(err) => {
                tracing::warn!(error = %err, "could not load car parks, starting with an empty list");
                Default::default()
            }
        };
        Self::with_model(ModelManager::new(book), store)
    }

    pub fn with_model(mut model: ModelManager, store: S) -> Self {
        let (tx, changes) = mpsc::channel();
        model.subscribe(move |event: &ModelEvent, _view| {
            if let Some(snapshot) = event.snapshot() {
                // The receiver lives as long as the API, which owns the model.
                let _ = tx.send(snapshot.clone());
            }
        });
        Self {
            model,
            history: CommandHistory::new(),
            store,
            changes,
        }
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    /// Registers a UI listener on the model.
    ///
    /// The model is only changed through this API, so every change is saved.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ModelEvent, &FilteredView) + 'static,
    {
        self.model.subscribe(listener);
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Records a submitted command line, whether or not it will succeed.
    ///
    /// For clients that do not drive input through a [`CommandBox`](crate::input::CommandBox).
    pub fn record_input(&mut self, text: impl Into<String>) {
        self.history.add(text);
    }

    pub fn add_carpark(&mut self, carpark: Carpark) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.model, carpark);
        self.persist_changes();
        result
    }

    pub fn delete_carpark(&mut self, index: DisplayIndex) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.model, index);
        self.persist_changes();
        result
    }

    pub fn edit_carpark(&mut self, index: DisplayIndex, edit: &CarparkEdit) -> Result<CmdResult> {
        let result = commands::edit::run(&mut self.model, index, edit);
        self.persist_changes();
        result
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        let result = commands::clear::run(&mut self.model);
        self.persist_changes();
        result
    }

    pub fn undo(&mut self) -> Result<CmdResult> {
        let result = commands::versioning::undo(&mut self.model);
        self.persist_changes();
        result
    }

    pub fn redo(&mut self) -> Result<CmdResult> {
        let result = commands::versioning::redo(&mut self.model);
        self.persist_changes();
        result
    }

    pub fn find(&mut self, keywords: Vec<String>) -> Result<CmdResult> {
        commands::find::run(&mut self.model, keywords)
    }

    pub fn filter(&mut self, criteria: FilterCriteria) -> Result<CmdResult> {
        commands::filter::run(&mut self.model, criteria)
    }

    pub fn list(&mut self) -> Result<CmdResult> {
        commands::list::run(&mut self.model)
    }

    pub fn select(&self, index: DisplayIndex) -> Result<CmdResult> {
        commands::select::run(&self.model, index)
    }

    pub fn show_history(&self) -> Result<CmdResult> {
        commands::history::run(&self.history)
    }

    fn persist_changes(&mut self) {
        let Some(latest) = self.changes.try_iter().last() else {
            return;
        };
        if let Err(err) = self.store.save_book(&latest) {
            tracing::warn!(error = %err, "failed to save car parks");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::CarparkBook;
    use crate::model::fixtures::{carpark, typical_carparks};
    use crate::store::memory::InMemoryStore;

    fn idx(n: usize) -> DisplayIndex {
        DisplayIndex::from_one_based(n).unwrap()
    }

    fn api() -> CarparkApi<InMemoryStore> {
        let book = CarparkBook::from_carparks(typical_carparks()).unwrap();
        CarparkApi::load(InMemoryStore::with_book(book))
    }

    #[test]
    fn load_seeds_model_from_store() {
        let api = api();
        assert_eq!(api.model().current_snapshot().len(), 4);
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn mutations_are_saved() {
        let mut api = api();
        api.add_carpark(carpark("NEW1", "New Street")).unwrap();
        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.store().saved().unwrap().len(), 5);

        api.delete_carpark(idx(1)).unwrap();
        assert_eq!(api.store().save_count(), 2);
        assert_eq!(api.store().saved().unwrap().len(), 4);
    }

    #[test]
    fn undo_and_redo_are_saved() {
        let mut api = api();
        api.delete_carpark(idx(1)).unwrap();
        api.undo().unwrap();
        assert_eq!(api.store().saved().unwrap().len(), 4);
        api.redo().unwrap();
        assert_eq!(api.store().saved().unwrap().len(), 3);
        assert_eq!(api.store().save_count(), 3);
    }

    #[test]
    fn failures_and_queries_are_not_saved() {
        let mut api = api();
        assert!(api.delete_carpark(idx(10)).is_err());
        assert!(api.undo().is_err());
        api.find(vec!["Telok".into()]).unwrap();
        api.list().unwrap();
        api.select(idx(1)).unwrap();
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn save_failure_does_not_fail_command() {
        let mut api = CarparkApi::load(InMemoryStore::failing());
        let result = api.add_carpark(carpark("A1", "First")).unwrap();
        assert_eq!(result.affected.len(), 1);
        assert_eq!(api.model().current_snapshot().len(), 1);
    }

    #[test]
    fn edit_through_api() {
        let mut api = api();
        let edit = CarparkEdit {
            total_lots: Some(999),
            ..Default::default()
        };
        api.edit_carpark(idx(4), &edit).unwrap();
        let saved = api.store().saved().unwrap();
        assert_eq!(saved.iter().nth(3).unwrap().total_lots, 999);
    }

    #[test]
    fn history_records_every_input() {
        let mut api = api();
        api.record_input("delete 99");
        api.record_input("list");
        let result = api.show_history().unwrap();
        assert_eq!(result.history, vec!["list", "delete 99"]);
    }

    #[test]
    fn clear_is_saved_and_undoable() {
        let mut api = api();
        api.clear().unwrap();
        assert!(api.store().saved().unwrap().is_empty());
        api.undo().unwrap();
        assert_eq!(api.store().saved().unwrap().len(), 4);
    }

    #[test]
    fn ui_listeners_and_saving_share_every_change() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut api = api();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        api.subscribe(move |event, view| {
            sink.borrow_mut()
                .push((event.snapshot().is_some(), view.len()));
        });

        api.find(vec!["Telok".into()]).unwrap();
        api.delete_carpark(idx(1)).unwrap();
        api.list().unwrap();

        assert_eq!(*seen.borrow(), vec![(false, 1), (true, 0), (false, 3)]);
        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.store().saved().unwrap().len(), 3);
    }
}
