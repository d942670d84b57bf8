//! # Configuration
//!
//! Configuration is managed by [`confique`], which layers values from
//! environment variables, a TOML file, and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `CARPARK_DATA_FILE`, `CARPARK_LOG_FILTER`.
//! 2. **Config file**: `--config PATH`, or `carpark.toml` in the OS config
//!    directory (via the `directories` crate).
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | OS data dir `/carparks.json` | Where the car park list is saved |
//! | `log_filter` | `warn` | `tracing` filter directive, overridden by `RUST_LOG` |

use crate::error::Result;
use crate::store::fs::DEFAULT_FILE_NAME;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "carpark.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CarparkConfig {
    /// Path of the JSON file holding the car park list.
    #[config(env = "CARPARK_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Log filter directive, e.g. "warn" or "carpark=debug".
    #[config(env = "CARPARK_LOG_FILTER", default = "warn")]
    pub log_filter: String,
}

impl Default for CarparkConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            log_filter: "warn".to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "carpark")
}

impl CarparkConfig {
    /// Loads env vars, then `explicit` (or the default config file if it exists), then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = CarparkConfig::builder().env();
        match explicit {
            Some(path) => builder = builder.file(path),
            None => {
                if let Some(path) = default_config_path() {
                    builder = builder.file(path);
                }
            }
        }
        Ok(builder.load()?)
    }

    /// The configured data file, falling back to the OS data directory.
    pub fn data_file(&self) -> PathBuf {
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        match project_dirs() {
            Some(dirs) => dirs.data_dir().join(DEFAULT_FILE_NAME),
            None => PathBuf::from(DEFAULT_FILE_NAME),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
