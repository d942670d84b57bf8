//! # Command Layer
//!
//! Each user command lives in its own submodule as a plain function over the
//! [`ModelManager`](crate::manager::ModelManager). Commands:
//!
//! - Resolve display indexes against the **current filtered view**
//! - Call the model facade with entity values
//! - Return a structured [`CmdResult`], never strings printed to a terminal
//!
//! Rendering is the client's job. The CLI turns `CmdResult` into colored lines;
//! a GUI would highlight `highlight` and redraw `listed`.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a car park
//! - [`delete`]: Delete the car park at a display index
//! - [`edit`]: Replace fields of the car park at a display index
//! - [`find`]: Keyword search
//! - [`filter`]: Criteria search (parking time, night parking, car type)
//! - [`list`]: Clear the filter
//! - [`select`]: Validate an index and ask the UI to jump to it
//! - [`clear`]: Remove every car park
//! - [`versioning`]: Undo and redo
//! - [`history`]: List previously entered commands
//! - [`helpers`]: Shared index resolution

use crate::index::{DisplayCarpark, DisplayIndex};
use crate::model::Carpark;
use serde::Serialize;
use std::sync::Arc;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod find;
pub mod helpers;
pub mod history;
pub mod list;
pub mod select;
pub mod versioning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Car parks created, removed or changed by the command.
    pub affected: Vec<Arc<Carpark>>,
    /// The filtered view after the command, numbered for display.
    pub listed: Vec<DisplayCarpark>,
    /// Index the UI should scroll to and select.
    pub highlight: Option<DisplayIndex>,
    /// Previously entered commands, most recent first.
    pub history: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, carparks: Vec<Arc<Carpark>>) -> Self {
        self.affected = carparks;
        self
    }

    pub fn with_listed(mut self, carparks: Vec<DisplayCarpark>) -> Self {
        self.listed = carparks;
        self
    }

    pub fn with_highlight(mut self, index: Option<DisplayIndex>) -> Self {
        self.highlight = index;
        self
    }
}
