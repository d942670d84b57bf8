use carpark::error::{CarparkError, Result};
use carpark::filter::{FilterCriteria, ParkingSlot};
use carpark::index::DisplayIndex;
use carpark::model::{
    parse_time, parse_weekday, CarType, Carpark, CarparkCode, CarparkEdit, Coordinates,
    ParkingWindow,
};
use chrono::{NaiveTime, Weekday};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "carpark", bin_name = "carpark", version)]
#[command(
    about = "Browse and query car park records from an interactive prompt",
    long_about = None
)]
pub struct Cli {
    /// Read settings from this TOML file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Load and save car parks in this file
    #[arg(short, long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed at the prompt.
#[derive(Parser, Debug)]
#[command(name = "carpark", no_binary_name = true, disable_version_flag = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

#[derive(Subcommand, Debug)]
pub enum ReplCommand {
    /// Add a car park
    Add(AddArgs),

    /// Delete the car park at INDEX in the displayed list
    Delete { index: DisplayIndex },

    /// Change fields of the car park at INDEX in the displayed list
    Edit(EditArgs),

    /// List car parks whose code or address contains any of the keywords
    Find {
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,
    },

    /// List car parks matching every given criterion
    Filter(FilterArgs),

    /// List all car parks
    #[command(alias = "ls")]
    List,

    /// Select the car park at INDEX in the displayed list
    Select { index: DisplayIndex },

    /// Undo the last change
    Undo,

    /// Redo the last undone change
    Redo,

    /// Remove every car park
    Clear,

    /// Show previously entered commands
    History,

    /// Leave the prompt
    #[command(alias = "quit")]
    Exit,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    pub code: CarparkCode,

    #[arg(short, long, required = true, num_args = 1..)]
    pub address: Vec<String>,

    /// Coordinates as X,Y
    #[arg(long, allow_hyphen_values = true)]
    pub coords: Option<Coordinates>,

    #[arg(long, default_value_t = 0)]
    pub lots: u32,

    /// Accepted vehicle class; repeat for more than one
    #[arg(long = "car-type")]
    pub car_types: Vec<CarType>,

    /// Parking window such as "MON 07:00-22:30", or a bare day for the whole day
    #[arg(short, long = "window")]
    pub windows: Vec<ParkingWindow>,

    #[arg(long)]
    pub night: bool,

    #[arg(long)]
    pub free: bool,
}

impl AddArgs {
    pub fn into_carpark(self) -> Result<Carpark> {
        let mut carpark = Carpark::new(self.code, self.address.join(" "))?
            .with_total_lots(self.lots)
            .with_night_parking(self.night)
            .with_free_parking(self.free);
        if let Some(coords) = self.coords {
            carpark = carpark.with_coordinates(coords);
        }
        for car_type in self.car_types {
            carpark = carpark.with_car_type(car_type);
        }
        for window in self.windows {
            carpark = carpark.with_parking_window(window);
        }
        Ok(carpark)
    }
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub index: DisplayIndex,

    #[arg(long)]
    pub code: Option<CarparkCode>,

    #[arg(short, long, num_args = 1..)]
    pub address: Vec<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub coords: Option<Coordinates>,

    #[arg(long)]
    pub lots: Option<u32>,

    /// Replaces all accepted vehicle classes; repeat for more than one
    #[arg(long = "car-type")]
    pub car_types: Vec<CarType>,

    /// Replaces all parking windows; repeat for more than one
    #[arg(short, long = "window")]
    pub windows: Vec<ParkingWindow>,

    #[arg(long, value_name = "BOOL")]
    pub night: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub free: Option<bool>,
}

impl EditArgs {
    pub fn to_edit(&self) -> CarparkEdit {
        CarparkEdit {
            code: self.code.clone(),
            address: (!self.address.is_empty()).then(|| self.address.join(" ")),
            coordinates: self.coords,
            total_lots: self.lots,
            car_types: (!self.car_types.is_empty())
                .then(|| self.car_types.iter().copied().collect()),
            parking_windows: (!self.windows.is_empty()).then(|| self.windows.clone()),
            night_parking: self.night,
            free_parking: self.free,
        }
    }
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Day of the stay; needs --from and --to
    #[arg(long, value_parser = parse_weekday, requires_all = ["from", "to"])]
    pub day: Option<Weekday>,

    /// Start of the stay as HH:MM
    #[arg(long, value_parser = parse_time, requires = "day")]
    pub from: Option<NaiveTime>,

    /// End of the stay as HH:MM
    #[arg(long, value_parser = parse_time, requires = "day")]
    pub to: Option<NaiveTime>,

    #[arg(long, value_name = "BOOL")]
    pub night: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub free: Option<bool>,

    #[arg(long = "car-type")]
    pub car_type: Option<CarType>,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> FilterCriteria {
        let parking_at = match (self.day, self.from, self.to) {
            (Some(day), Some(from), Some(to)) => Some(ParkingSlot { day, from, to }),
            _ => None,
        };
        FilterCriteria {
            parking_at,
            night_parking: self.night,
            free_parking: self.free,
            car_type: self.car_type,
        }
    }
}

/// Splits a prompt line into words. Single or double quotes group words.
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(CarparkError::InvalidValue(format!(
            "Unterminated quote in: {}",
            line
        )));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
