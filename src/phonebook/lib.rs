//! # Phonebook Architecture
//!
//! Phonebook is a small contact manager: named contacts, each with one or more
//! phone numbers, kept in a plain text file. The binary is an interactive shell
//! plus one-shot subcommands, but everything below the CLI is a library that
//! never touches the terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap parsing, interactive shell, rendering, exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's ContactBook and DataStore             │
//! │  - One method per user command                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - validate → mutate a copy → flush → commit                │
//! │  - Returns CmdResult with an Outcome, never prints          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (book.rs, model.rs, validation.rs, codec.rs)          │
//! │  Storage (store/): DataStore, FileStore, InMemoryStore      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency
//!
//! Every successful mutation rewrites the whole contacts file before the
//! command returns. Mutations run on a copy of the book, and the copy replaces
//! the live book only once the file is written, so a failed write is reported
//! and leaves both memory and disk at the previous state.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user command
//! - [`book`]: The in-memory contact collection and its operations
//! - [`model`]: `Contact`, `NumberMatch`, `Outcome`
//! - [`validation`]: Name and number rules
//! - [`codec`]: The persisted line format
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: `config.json` settings
//! - [`init`]: Path resolution and wiring for the binary
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod validation;
