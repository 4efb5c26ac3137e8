//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every phone book operation, whatever the UI.
//!
//! `PhonebookApi` owns the one [`ContactBook`] of the session and the one
//! [`DataStore`] it is flushed to. Handlers receive the API explicitly; there
//! is no global state.
//!
//! ## Generic Over DataStore
//!
//! - Production: `PhonebookApi<FileStore>`
//! - Testing: `PhonebookApi<InMemoryStore>`
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and `book.rs`
//! - **I/O to the terminal**: No stdout, stderr, or prompts
//! - **Wording**: Returns outcomes and data, not sentences

use crate::book::ContactBook;
use crate::commands;
use crate::commands::helpers::load_book;
use crate::error::Result;
use crate::store::DataStore;
use tracing::warn;

pub struct PhonebookApi<S: DataStore> {
    store: S,
    book: ContactBook,
    paths: commands::PhonebookPaths,
    startup_messages: Vec<commands::CmdMessage>,
}

impl<S: DataStore> PhonebookApi<S> {
    /// Loads the book from `store`. A store that cannot be read is not fatal:
    /// the session starts empty and a warning is kept for the UI.
    pub fn open(store: S, paths: commands::PhonebookPaths) -> Self {
        let mut startup_messages = Vec::new();
        let book = match load_book(&store) {
            Ok(book) => book,
            Err(e) => {
                warn!(error = %e, "starting with an empty phone book");
                startup_messages.push(commands::CmdMessage::warning(format!(
                    "{}. Starting with an empty phone book.",
                    e
                )));
                ContactBook::new()
            }
        };

        Self {
            store,
            book,
            paths,
            startup_messages,
        }
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn show(&self, name: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.book, name)
    }

    pub fn find(&self, number: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.book, number)
    }

    pub fn add(&mut self, name: &str, number: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &mut self.book, name, number)
    }

    pub fn edit_add(&mut self, name: &str, number: &str) -> Result<commands::CmdResult> {
        commands::edit::add_number(&mut self.store, &mut self.book, name, number)
    }

    pub fn edit_delete(&mut self, name: &str, number: &str) -> Result<commands::CmdResult> {
        commands::edit::delete_number(&mut self.store, &mut self.book, name, number)
    }

    pub fn delete(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &mut self.book, name)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Read-only view of the session's book.
    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// Warnings produced while opening, handed out once.
    pub fn take_startup_messages(&mut self) -> Vec<commands::CmdMessage> {
        std::mem::take(&mut self.startup_messages)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{Change, CmdMessage, CmdResult, MessageLevel, PhonebookPaths};
