//! The record store: an ordered list of car parks with unique codes.
//!
//! Entities are held as `Arc<Carpark>`, so cloning a book is a shallow copy of
//! pointers. The versioned history relies on this: each snapshot is a separate
//! book, but unchanged car parks are shared between all of them.

use crate::error::{CarparkError, Result};
use crate::model::{Carpark, CarparkCode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarparkBook {
    carparks: Vec<Arc<Carpark>>,
}

impl CarparkBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from a list of car parks, rejecting duplicate codes.
    pub fn from_carparks<I>(carparks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Carpark>,
    {
        let mut book = Self::new();
        for carpark in carparks {
            book.add(Arc::new(carpark))?;
        }
        Ok(book)
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

    pub fn contains(&self, code: &CarparkCode) -> bool {
        self.position(code).is_some()
    }

    pub fn get(&self, code: &CarparkCode) -> Option<&Arc<Carpark>> {
        self.position(code).map(|i| &self.carparks[i])
    }

    fn position(&self, code: &CarparkCode) -> Option<usize> {
        self.carparks.iter().position(|c| &c.code == code)
    }

    /// Appends a car park. Fails if its code is already present.
    pub fn add(&mut self, carpark: Arc<Carpark>) -> Result<()> {
        if self.contains(&carpark.code) {
            return Err(CarparkError::DuplicateCarpark(carpark.code.clone()));
        }
        self.carparks.push(carpark);
        Ok(())
    }

    /// Removes the car park with the same code as `target`.
    pub fn remove(&mut self, target: &Carpark) -> Result<Arc<Carpark>> {
        let index = self
            .position(&target.code)
            .ok_or_else(|| CarparkError::CarparkNotFound(target.code.clone()))?;
        Ok(self.carparks.remove(index))
    }

    /// Replaces `target` with `edited` in place, keeping the list order.
    ///
    /// `edited` may keep the target's code or take a new one, but it may not take
    /// the code of another car park already in the book.
    pub fn replace(&mut self, target: &Carpark, edited: Arc<Carpark>) -> Result<()> {
        let index = self
            .position(&target.code)
            .ok_or_else(|| CarparkError::CarparkNotFound(target.code.clone()))?;
        if !target.is_same_carpark(&edited) && self.contains(&edited.code) {
            return Err(CarparkError::DuplicateCarpark(edited.code.clone()));
        }
        self.carparks[index] = edited;
        Ok(())
    }
}

impl Serialize for CarparkBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.carparks.iter().map(|c| c.as_ref()))
    }
}

impl<'de> Deserialize<'de> for CarparkBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let carparks = Vec::<Carpark>::deserialize(deserializer)?;
        CarparkBook::from_carparks(carparks).map_err(serde::de::Error::custom)
    }
}
