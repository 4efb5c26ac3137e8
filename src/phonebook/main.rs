//! # Phonebook CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and turns an error into exit status 1.
//!
//! - `cli/setup.rs`: clap definitions
//! - `cli/commands.rs`: logging setup, context wiring, one-shot handlers
//! - `cli/shell.rs`: the interactive prompt loop
//! - `cli/render.rs`: turning `CmdResult` values into text

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
