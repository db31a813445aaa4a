//! # Addrbook Architecture
//!
//! Addrbook is a command-driven personal address book. The library holds all
//! of the behaviour; the `addrbook` binary is a thin terminal client over it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, cli/)                               │
//! │  - Reads command lines, prints results, owns exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - parse → execute → save, one command per call             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (parser.rs, commands/*.rs)                        │
//! │  - Text to Command, Command to CmdResult                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (book.rs, session.rs)                                 │
//! │  - RecordStore: unique, ordered contacts                    │
//! │  - ViewSession: last shown list + 1-based index lookup      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (storage/)                                         │
//! │  - Storage trait: JsonFileStorage, InMemoryStorage          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The last shown list
//!
//! Users refer to contacts by the number they were listed under ("delete 2").
//! Those numbers resolve against the session's shown list, which is only fully
//! recomputed by `list` and `find`. Deletions and edits do not renumber it, so
//! a sequence of commands typed against one listing keeps meaning what the
//! user saw. See [`session`] for the exact rules.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints, never exits the process and never
//! assumes a terminal. Only storage touches the filesystem.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user command
//! - [`parser`]: Command line grammar
//! - [`session`]: The view session and shown list
//! - [`book`]: The record store
//! - [`model`]: `Contact` and the shared `ContactRef` handle
//! - [`fields`]: Validated field values
//! - [`index`]: Display index parsing
//! - [`storage`]: Persistence
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod index;
pub mod model;
pub mod parser;
pub mod session;
pub mod storage;
