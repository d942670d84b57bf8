//! # Carpark Architecture
//!
//! Carpark is a **UI-agnostic car park browser library**: a versioned list of car
//! parks with undo/redo, filtered views, and shell-like command recall. The bundled
//! REPL is one client of it; a GUI would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads lines, parses them with clap, prints results       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, input.rs)                               │
//! │  - Dispatches to commands, owns command history             │
//! │  - Persists the current book after changes                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves display indexes against the filtered view       │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model Layer (manager.rs, versioned.rs, view.rs, book.rs)   │
//! │  - Immutable snapshots, linear undo/redo                    │
//! │  - Filtered view recomputed on every change                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Snapshots Are Values
//!
//! Car parks are immutable and shared through `Arc`. A mutation copies the list
//! of pointers, changes the copy, and commits it as a new snapshot. Old snapshots
//! are never touched, which is what makes undo/redo a matter of moving a cursor.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`manager`]: Model facade: mutation, commit, undo/redo, filter, listeners
//! - [`versioned`]: Versioned snapshot log
//! - [`view`]: Filtered view
//! - [`filter`]: Car park predicates
//! - [`book`]: Ordered record store with unique codes
//! - [`model`]: Car park entity and value types
//! - [`index`]: One-based display indexes
//! - [`history`]: Command history and its navigator
//! - [`input`]: Input box model driving the navigator
//! - [`store`]: Persistence abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod history;
pub mod index;
pub mod input;
pub mod manager;
pub mod model;
pub mod store;
pub mod versioned;
pub mod view;
