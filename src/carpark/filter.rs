//! Car park predicates.
//!
//! Filters are plain data where possible so they can be compared, logged and
//! shown back to the user. [`CarparkFilter::Custom`] is the escape hatch for
//! embedders that need an arbitrary closure.

use crate::model::{CarType, Carpark, CarparkCode};
use chrono::{NaiveTime, Weekday};
use std::fmt;
use std::sync::Arc;

/// A requested parking slot: on `day`, from `from` until `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkingSlot {
    pub day: Weekday,
    pub from: NaiveTime,
    pub to: NaiveTime,
}

/// Conjunction of optional criteria. Absent criteria always match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub parking_at: Option<ParkingSlot>,
    pub night_parking: Option<bool>,
    pub free_parking: Option<bool>,
    pub car_type: Option<CarType>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self == &FilterCriteria::default()
    }

    pub fn matches(&self, carpark: &Carpark) -> bool {
        if let Some(slot) = &self.parking_at {
            if !carpark.allows_parking(slot.day, slot.from, slot.to) {
                return false;
            }
        }
        if let Some(night) = self.night_parking {
            if carpark.night_parking != night {
                return false;
            }
        }
        if let Some(free) = self.free_parking {
            if carpark.free_parking != free {
                return false;
            }
        }
        if let Some(car_type) = self.car_type {
            if !carpark.accepts(car_type) {
                return false;
            }
        }
        true
    }
}

pub type CarparkPredicate = Arc<dyn Fn(&Carpark) -> bool>;

#[derive(Clone, Default)]
pub enum CarparkFilter {
    /// Every car park.
    #[default]
    All,
    /// Any keyword equals (ignoring case) a word of the code or address.
    Keywords(Vec<String>),
    Criteria(FilterCriteria),
    /// Exactly the listed codes.
    Codes(Vec<CarparkCode>),
    Custom(CarparkPredicate),
}

impl CarparkFilter {
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&Carpark) -> bool + 'static,
    {
        CarparkFilter::Custom(Arc::new(predicate))
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CarparkFilter::All)
    }

    pub fn matches(&self, carpark: &Carpark) -> bool {
        match self {
            CarparkFilter::All => true,
            CarparkFilter::Keywords(keywords) => matches_keywords(carpark, keywords),
            CarparkFilter::Criteria(criteria) => criteria.matches(carpark),
            CarparkFilter::Codes(codes) => codes.contains(&carpark.code),
            CarparkFilter::Custom(predicate) => predicate(carpark),
        }
    }
}

fn matches_keywords(carpark: &Carpark, keywords: &[String]) -> bool {
    let words = std::iter::once(carpark.code.as_str()).chain(
        carpark
            .address
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/'),
    );
    let words: Vec<&str> = words.filter(|w| !w.is_empty()).collect();
    keywords
        .iter()
        .any(|keyword| words.iter().any(|word| word.eq_ignore_ascii_case(keyword)))
}

impl fmt::Debug for CarparkFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarparkFilter::All => write!(f, "All"),
            CarparkFilter::Keywords(k) => f.debug_tuple("Keywords").field(k).finish(),
            CarparkFilter::Criteria(c) => f.debug_tuple("Criteria").field(c).finish(),
            CarparkFilter::Codes(c) => f.debug_tuple("Codes").field(c).finish(),
            CarparkFilter::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
