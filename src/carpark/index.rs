//! # Display Indexes
//!
//! Users refer to car parks by their one-based position in the list they are
//! currently looking at, i.e. the **filtered** view, not the full book.
//! `delete 1` after `find telok` deletes the first *matching* car park.
//!
//! Because a display index is only meaningful against one particular view, it
//! must be resolved into a [`Carpark`] immediately, before anything is mutated.
//! From then on the model works with entity values, which is what keeps
//! undo/redo correct when a different filter is active later.

use crate::error::{CarparkError, Result};
use crate::model::Carpark;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A one-based position in the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub fn from_one_based(index: usize) -> Result<Self> {
        if index == 0 {
            return Err(CarparkError::InvalidIndex { index, len: 0 });
        }
        Ok(Self(index))
    }

    pub fn from_zero_based(index: usize) -> Self {
        Self(index + 1)
    }

    pub fn one_based(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for DisplayIndex {
    type Err = CarparkError;

    fn from_str(s: &str) -> Result<Self> {
        let n = s
            .trim()
            .parse::<usize>()
            .map_err(|_| CarparkError::InvalidValue(format!("Invalid index: {}", s)))?;
        Self::from_one_based(n)
    }
}

/// A car park paired with its position in the view it was listed from.
#[derive(Debug, Clone)]
pub struct DisplayCarpark {
    pub index: DisplayIndex,
    pub carpark: Arc<Carpark>,
}

/// Numbers a list of car parks 1..=n in the given order.
pub fn index_carparks<'a, I>(carparks: I) -> Vec<DisplayCarpark>
where
    I: IntoIterator<Item = &'a Arc<Carpark>>,
{
    carparks
        .into_iter()
        .enumerate()
        .map(|(i, carpark)| DisplayCarpark {
            index: DisplayIndex::from_zero_based(i),
            carpark: Arc::clone(carpark),
        })
        .collect()
}
