//! # Domain Model: Car Parks as Immutable Values
//!
//! This module defines [`Carpark`] and the small value types it is built from:
//! [`CarparkCode`], [`CarType`], [`Coordinates`] and [`ParkingWindow`].
//!
//! ## Immutability
//!
//! A `Carpark` is never edited in place once it is part of a [`crate::book::CarparkBook`].
//! Books hold `Arc<Carpark>`, so every snapshot in the undo history can share the
//! same entity allocations. An "edit" is expressed as a [`CarparkEdit`] that
//! produces a brand new `Carpark` which then replaces the old one in a new book.
//!
//! ## Identity vs Equality
//!
//! - **Identity**: the car park code. Codes are case-insensitive and normalized
//!   to upper case when parsed, so `tbm4` and `TBM4` are the same car park.
//!   Use [`Carpark::is_same_carpark`] to compare identity.
//! - **Equality**: `PartialEq` compares every field.
//!
//! ## Parking Windows
//!
//! Parking availability is a list of per-weekday time windows:
//!
//! - `start < end`: a regular window, `start <= t < end`
//! - `start > end`: wraps past midnight, `t >= start || t < end`
//! - `start == end`: the whole day

use crate::error::{CarparkError, Result};
use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// The unique, case-insensitive identifier of a car park (e.g. `TBM4`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CarparkCode(String);

impl CarparkCode {
    pub fn new(code: impl AsRef<str>) -> Result<Self> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(CarparkError::InvalidValue(
                "Car park code must not be empty".to_string(),
            ));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CarparkError::InvalidValue(format!(
                "Car park code must be alphanumeric: {}",
                code
            )));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarparkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for CarparkCode {
    type Err = CarparkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for CarparkCode {
    type Error = CarparkError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CarparkCode> for String {
    fn from(code: CarparkCode) -> Self {
        code.0
    }
}

/// Vehicle classes a car park accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarType {
    Car,
    Motorcycle,
    HeavyVehicle,
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CarType::Car => "car",
            CarType::Motorcycle => "motorcycle",
            CarType::HeavyVehicle => "heavy-vehicle",
        };
        f.write_str(name)
    }
}

impl FromStr for CarType {
    type Err = CarparkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" | "c" => Ok(CarType::Car),
            "motorcycle" | "m" => Ok(CarType::Motorcycle),
            "heavy-vehicle" | "heavy" | "h" => Ok(CarType::HeavyVehicle),
            other => Err(CarparkError::InvalidValue(format!(
                "Unknown car type: {} (expected car, motorcycle or heavy-vehicle)",
                other
            ))),
        }
    }
}

/// Planar map coordinates of a car park entrance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.x, self.y)
    }
}

impl FromStr for Coordinates {
    type Err = CarparkError;

    /// Parses `"x,y"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CarparkError::InvalidValue(format!("Invalid coordinates: {}", s));
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<f64>().map_err(|_| invalid())?;
        let y = y.trim().parse::<f64>().map_err(|_| invalid())?;
        if !x.is_finite() || !y.is_finite() {
            return Err(invalid());
        }
        Ok(Self { x, y })
    }
}

/// Parses a wall clock time written as `HH:MM`.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| CarparkError::InvalidValue(format!("Invalid time (expected HH:MM): {}", s)))
}

/// Parses a weekday name or its three letter abbreviation.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| CarparkError::InvalidValue(format!("Invalid weekday: {}", s)))
}

/// A time range on a single weekday during which parking is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParkingWindow {
    pub day: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ParkingWindow {
    pub fn new(day: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        Self { day, start, end }
    }

    pub fn whole_day(day: Weekday) -> Self {
        Self::new(day, NaiveTime::MIN, NaiveTime::MIN)
    }

    pub fn is_whole_day(&self) -> bool {
        self.start == self.end
    }

    /// True when the whole stay from `from` to `to` on `day` lies inside the window.
    ///
    /// A stay with `to < from` runs past midnight, as does a window with `end < start`.
    pub fn covers(&self, day: Weekday, from: NaiveTime, to: NaiveTime) -> bool {
        if self.day != day {
            return false;
        }
        if self.is_whole_day() {
            return true;
        }
        let start = minutes(self.start);
        let end = unwrap_after(start, minutes(self.end));
        let from = minutes(from);
        let to = unwrap_after(from, minutes(to));
        // A stay early in the morning may sit in the tail of a window opened the evening before.
        [0, MINUTES_PER_DAY].iter().any(|shift| {
            let (from, to) = (from + shift, to + shift);
            start <= from && from < end && to <= end
        })
    }
}

const MINUTES_PER_DAY: u32 = 24 * 60;

fn minutes(t: NaiveTime) -> u32 {
    t.num_seconds_from_midnight() / 60
}

/// Places `later` on or after `earlier`, adding a day when it wraps past midnight.
fn unwrap_after(earlier: u32, later: u32) -> u32 {
    if later < earlier {
        later + MINUTES_PER_DAY
    } else {
        later
    }
}

impl fmt::Display for ParkingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole_day() {
            write!(f, "{} whole day", self.day)
        } else {
            write!(
                f,
                "{} {}-{}",
                self.day,
                self.start.format("%H:%M"),
                self.end.format("%H:%M")
            )
        }
    }
}

impl FromStr for ParkingWindow {
    type Err = CarparkError;

    /// Parses `"MON 07:00-22:30"` or `"MON"` (whole day).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (day, range) = match s.split_once(char::is_whitespace) {
            Some((day, range)) => (day, Some(range.trim())),
            None => (s, None),
        };
        let day = parse_weekday(day)?;
        match range {
            None => Ok(Self::whole_day(day)),
            Some(range) => {
                let (start, end) = range.split_once('-').ok_or_else(|| {
                    CarparkError::InvalidValue(format!("Invalid parking window: {}", s))
                })?;
                Ok(Self::new(day, parse_time(start)?, parse_time(end)?))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carpark {
    pub code: CarparkCode,
    pub address: String,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub total_lots: u32,
    #[serde(default)]
    pub car_types: BTreeSet<CarType>,
    #[serde(default)]
    pub parking_windows: Vec<ParkingWindow>,
    #[serde(default)]
    pub night_parking: bool,
    #[serde(default)]
    pub free_parking: bool,
}

impl Carpark {
    pub fn new(code: CarparkCode, address: impl Into<String>) -> Result<Self> {
        Ok(Self {
            code,
            address: validate_address(address.into())?,
            coordinates: Coordinates::default(),
            total_lots: 0,
            car_types: BTreeSet::new(),
            parking_windows: Vec::new(),
            night_parking: false,
            free_parking: false,
        })
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = coordinates;
        self
    }

    pub fn with_total_lots(mut self, total_lots: u32) -> Self {
        self.total_lots = total_lots;
        self
    }

    pub fn with_car_type(mut self, car_type: CarType) -> Self {
        self.car_types.insert(car_type);
        self
    }

    pub fn with_parking_window(mut self, window: ParkingWindow) -> Self {
        self.parking_windows.push(window);
        self
    }

    pub fn with_night_parking(mut self, night_parking: bool) -> Self {
        self.night_parking = night_parking;
        self
    }

    pub fn with_free_parking(mut self, free_parking: bool) -> Self {
        self.free_parking = free_parking;
        self
    }

    /// Identity comparison: same code, regardless of other fields.
    pub fn is_same_carpark(&self, other: &Carpark) -> bool {
        self.code == other.code
    }

    pub fn accepts(&self, car_type: CarType) -> bool {
        self.car_types.contains(&car_type)
    }

    pub fn allows_parking(&self, day: Weekday, from: NaiveTime, to: NaiveTime) -> bool {
        self.parking_windows
            .iter()
            .any(|window| window.covers(day, from, to))
    }
}

impl fmt::Display for Carpark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.address)
    }
}

fn validate_address(address: String) -> Result<String> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(CarparkError::InvalidValue(
            "Address must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// A set of field replacements. Applying it never touches the original value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarparkEdit {
    pub code: Option<CarparkCode>,
    pub address: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub total_lots: Option<u32>,
    pub car_types: Option<BTreeSet<CarType>>,
    pub parking_windows: Option<Vec<ParkingWindow>>,
    pub night_parking: Option<bool>,
    pub free_parking: Option<bool>,
}

impl CarparkEdit {
    pub fn is_empty(&self) -> bool {
        self == &CarparkEdit::default()
    }

    pub fn apply(&self, original: &Carpark) -> Result<Carpark> {
        let address = match &self.address {
            Some(address) => validate_address(address.clone())?,
            None => original.address.clone(),
        };
        Ok(Carpark {
            code: self.code.clone().unwrap_or_else(|| original.code.clone()),
            address,
            coordinates: self.coordinates.unwrap_or(original.coordinates),
            total_lots: self.total_lots.unwrap_or(original.total_lots),
            car_types: self
                .car_types
                .clone()
                .unwrap_or_else(|| original.car_types.clone()),
            parking_windows: self
                .parking_windows
                .clone()
                .unwrap_or_else(|| original.parking_windows.clone()),
            night_parking: self.night_parking.unwrap_or(original.night_parking),
            free_parking: self.free_parking.unwrap_or(original.free_parking),
        })
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds a car park with a code and address, panicking on invalid input.
    pub fn carpark(code: &str, address: &str) -> Carpark {
        Carpark::new(CarparkCode::new(code).unwrap(), address).unwrap()
    }

    pub fn time(s: &str) -> NaiveTime {
        parse_time(s).unwrap()
    }

    /// A handful of car parks in a stable order.
    pub fn typical_carparks() -> Vec<Carpark> {
        vec![
            carpark("TBM4", "Blk 2 Telok Blangah Street")
                .with_car_type(CarType::Car)
                .with_total_lots(220)
                .with_night_parking(true)
                .with_parking_window(ParkingWindow::whole_day(Weekday::Mon))
                .with_parking_window(ParkingWindow::whole_day(Weekday::Sun)),
            carpark("ACB", "Blk 270/271 Albert Centre Basement")
                .with_car_type(CarType::Car)
                .with_car_type(CarType::Motorcycle)
                .with_total_lots(95)
                .with_free_parking(true)
                .with_parking_window(ParkingWindow::new(
                    Weekday::Mon,
                    time("07:00"),
                    time("22:30"),
                )),
            carpark("HG55", "Blk 102 Punggol Field")
                .with_car_type(CarType::HeavyVehicle)
                .with_total_lots(40)
                .with_night_parking(true)
                .with_parking_window(ParkingWindow::new(
                    Weekday::Sat,
                    time("22:00"),
                    time("07:00"),
                )),
            carpark("KAB", "Blk 2 Kallang Bahru Street")
                .with_car_type(CarType::Car)
                .with_total_lots(310),
        ]
    }
}
