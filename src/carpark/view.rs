//! The filtered view shown to the user.
//!
//! A [`FilteredView`] is a plain list computed from a snapshot and a filter. It is
//! rebuilt from scratch whenever either input changes; nothing is cached across
//! commits.

use crate::error::{CarparkError, Result};
use crate::filter::CarparkFilter;
use crate::index::{index_carparks, DisplayCarpark, DisplayIndex};
use crate::model::{Carpark, CarparkCode};
use crate::versioned::Snapshot;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    carparks: Vec<Arc<Carpark>>,
}

impl FilteredView {
    /// Every car park of `snapshot` accepted by `filter`, in book order.
    pub fn compute(snapshot: &Snapshot, filter: &CarparkFilter) -> Self {
        let carparks = snapshot
            .iter()
            .filter(|carpark| filter.matches(carpark))
            .cloned()
            .collect();
        Self { carparks }
    }

    pub fn len(&self) -> usize {
        self.carparks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carparks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Carpark>> {
        self.carparks.iter()
    }

    pub fn as_slice(&self) -> &[Arc<Carpark>] {
        &self.carparks
    }

    /// Resolves a display index against this view.
    pub fn get(&self, index: DisplayIndex) -> Result<&Arc<Carpark>> {
        self.carparks
            .get(index.zero_based())
            .ok_or(CarparkError::InvalidIndex {
                index: index.one_based(),
                len: self.carparks.len(),
            })
    }

    pub fn position_of(&self, code: &CarparkCode) -> Option<DisplayIndex> {
        self.carparks
            .iter()
            .position(|c| &c.code == code)
            .map(DisplayIndex::from_zero_based)
    }

    pub fn indexed(&self) -> Vec<DisplayCarpark> {
        index_carparks(&self.carparks)
    }
}
