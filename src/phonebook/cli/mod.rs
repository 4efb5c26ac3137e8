//! # CLI Layer
//!
//! This module is the **only** place that knows about the terminal:
//! argument parsing, prompts, colors, stdout/stderr and exit codes.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `setup`: clap argument definitions
//! - `shell`: the interactive session, generic over its input and output so
//!   it can be driven from tests
//! - `render`: `CmdResult` and outcomes to strings
//!
//! CLI tests should **not** test business logic, that's the command layer's job.

mod commands;
mod render;
mod setup;
mod shell;

pub use commands::run;
