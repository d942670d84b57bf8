//! # Model Facade
//!
//! [`ModelManager`] is the only component allowed to touch the versioned history.
//! Every mutation follows the same three steps:
//!
//! 1. Copy the current book (cheap: entities are shared `Arc`s).
//! 2. Apply the mutation to the copy. On error, return it; nothing was committed.
//! 3. Commit the copy, recompute the filtered view, notify listeners.
//!
//! Undo and redo move the history cursor instead, then re-apply the **active**
//! filter to the restored snapshot. The filter is view state, not data, so it is
//! not versioned: undoing a deletion while `find telok` is active restores the
//! car park, and it shows up only if it matches `telok`.
//!
//! ## Notifications
//!
//! Presentation code registers callbacks with [`ModelManager::subscribe`]. Callbacks
//! run synchronously, after the history and the view are both up to date, so a
//! listener never observes a view computed against a stale snapshot.

use crate::book::CarparkBook;
use crate::error::Result;
use crate::filter::CarparkFilter;
use crate::model::Carpark;
use crate::versioned::{Snapshot, VersionedBook};
use crate::view::FilteredView;
use std::sync::Arc;

/// What changed in the model.
#[derive(Debug, Clone)]
pub enum ModelEvent {
    /// A mutation was committed; carries the new current snapshot.
    Committed(Snapshot),
    Undone(Snapshot),
    Redone(Snapshot),
    FilterUpdated,
}

impl ModelEvent {
    /// The new current snapshot, for events that changed the data.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            ModelEvent::Committed(s) | ModelEvent::Undone(s) | ModelEvent::Redone(s) => Some(s),
            ModelEvent::FilterUpdated => None,
        }
    }
}

pub type ModelListener = Box<dyn FnMut(&ModelEvent, &FilteredView)>;

pub struct ModelManager {
    history: VersionedBook,
    filter: CarparkFilter,
    view: FilteredView,
    listeners: Vec<ModelListener>,
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(CarparkBook::new())
    }
}

impl ModelManager {
    pub fn new(initial: CarparkBook) -> Self {
        let history = VersionedBook::new(initial);
        let filter = CarparkFilter::All;
        let view = FilteredView::compute(history.current_snapshot(), &filter);
        Self {
            history,
            filter,
            view,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ModelEvent, &FilteredView) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn current_snapshot(&self) -> &Snapshot {
        self.history.current_snapshot()
    }

    pub fn filtered_carparks(&self) -> &FilteredView {
        &self.view
    }

    pub fn filter(&self) -> &CarparkFilter {
        &self.filter
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of retained snapshots, including the redo tail.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_index(&self) -> usize {
        self.history.current_index()
    }

    pub fn has_carpark(&self, carpark: &Carpark) -> bool {
        self.current_snapshot().contains(&carpark.code)
    }

    /// Adds a car park and resets the filter so the new entry is visible.
    pub fn add_carpark(&mut self, carpark: Carpark) -> Result<Arc<Carpark>> {
        let carpark = Arc::new(carpark);
        let mut book = self.working_copy();
        book.add(Arc::clone(&carpark))?;
        self.filter = CarparkFilter::All;
        self.commit(book);
        Ok(carpark)
    }

    pub fn delete_carpark(&mut self, target: &Carpark) -> Result<Arc<Carpark>> {
        let mut book = self.working_copy();
        let removed = book.remove(target)?;
        self.commit(book);
        Ok(removed)
    }

    pub fn edit_carpark(&mut self, target: &Carpark, edited: Carpark) -> Result<Arc<Carpark>> {
        let edited = Arc::new(edited);
        let mut book = self.working_copy();
        book.replace(target, Arc::clone(&edited))?;
        self.commit(book);
        Ok(edited)
    }

    /// Replaces the whole book, as a single undoable step.
    pub fn reset_data(&mut self, book: CarparkBook) {
        self.commit(book);
    }

    /// Changes the active filter. Filtering is not recorded in the history.
    pub fn update_filter(&mut self, filter: CarparkFilter) {
        tracing::debug!(?filter, "updating filter");
        self.filter = filter;
        self.refresh(ModelEvent::FilterUpdated);
    }

    pub fn undo(&mut self) -> Result<Snapshot> {
        let snapshot = Arc::clone(self.history.undo()?);
        self.refresh(ModelEvent::Undone(Arc::clone(&snapshot)));
        Ok(snapshot)
    }

    pub fn redo(&mut self) -> Result<Snapshot> {
        let snapshot = Arc::clone(self.history.redo()?);
        self.refresh(ModelEvent::Redone(Arc::clone(&snapshot)));
        Ok(snapshot)
    }

    fn working_copy(&self) -> CarparkBook {
        CarparkBook::clone(self.current_snapshot())
    }

    fn commit(&mut self, book: CarparkBook) {
        let snapshot = Arc::clone(self.history.commit(book));
        self.refresh(ModelEvent::Committed(snapshot));
    }

    fn refresh(&mut self, event: ModelEvent) {
        self.view = FilteredView::compute(self.history.current_snapshot(), &self.filter);
        for listener in self.listeners.iter_mut() {
            listener(&event, &self.view);
        }
    }
}
