//! # Userstore
//!
//! Keeps a list of user records (`id`, `email`, `age`) in a single JSON file
//! and offers four operations on it: add, list, find by id and remove.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses flags, owns stdout/stderr and the exit code       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Validates arguments, dispatches one operation            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Load, change or query, save                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - RecordStore trait: JsonFileStore, InMemoryStore          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation reads the whole file and mutating operations rewrite the
//! whole file. Nothing is cached between invocations and nothing is locked:
//! two processes writing the same file at once can lose an update.
//!
//! Output goes to any [`std::io::Write`] handed in by the caller, so the
//! library never assumes a terminal.
//!
//! ## Module Overview
//!
//! - [`api`]: argument validation and dispatch
//! - [`commands`]: one module per operation
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: `Record` and `RecordId`
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
