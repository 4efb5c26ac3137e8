use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version)]
#[command(about = "A small phone book for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Contacts file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all contacts in alphabetical order
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Show a contact by name
    #[command(display_order = 2)]
    Show {
        /// Name words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Find who a number belongs to
    #[command(display_order = 3)]
    Find {
        /// Number parts (joined with spaces, e.g. +7 999 123)
        #[arg(required = true, num_args = 1..)]
        number: Vec<String>,
    },

    /// Add a contact, or another number to an existing contact
    #[command(alias = "n", display_order = 4)]
    Add {
        /// Contact name (quote names with spaces)
        name: String,

        /// Phone number (quote numbers with spaces)
        number: String,
    },

    /// Change the numbers of an existing contact
    #[command(display_order = 5)]
    Edit {
        #[command(subcommand)]
        action: EditCommands,
    },

    /// Delete a contact with all its numbers
    #[command(alias = "rm", display_order = 6)]
    Delete {
        /// Name words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Get or set configuration
    #[command(display_order = 7)]
    Config {
        /// Configuration key (data-file, confirm-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Start the interactive shell (the default without a command)
    #[command(display_order = 8)]
    Shell,
}

#[derive(Subcommand, Debug)]
pub enum EditCommands {
    /// Add a number to an existing contact
    Add {
        /// Contact name (quote names with spaces)
        name: String,

        /// Phone number to add
        number: String,
    },

    /// Remove a number from a contact
    #[command(alias = "rm")]
    Delete {
        /// Contact name (quote names with spaces)
        name: String,

        /// Phone number to remove
        number: String,
    },
}
