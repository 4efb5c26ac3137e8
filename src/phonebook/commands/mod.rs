//! # Command Layer
//!
//! One module per user-facing command. Every command is a plain function that
//! takes the store and the book explicitly and returns a [`CmdResult`]:
//!
//! - Read commands (`list`, `show`, `find`) borrow the book.
//! - Write commands (`add`, `edit`, `delete`) work on a copy of the book,
//!   flush the copy, and only then replace the live book (see
//!   [`helpers::apply`]). A failed flush leaves memory and disk as they were.
//!
//! Commands never print. Outcomes are returned as data in [`Change`] and the
//! UI decides how to word them.

use crate::config::PhonebookConfig;
use crate::model::{Contact, NumberMatch, Outcome};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod find;
pub mod helpers;
pub mod list;
pub mod show;

#[derive(Debug, Clone)]
pub struct PhonebookPaths {
    /// Holds `config.json` and, by default, the contacts file
    pub data_dir: PathBuf,
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
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

/// What a write command did, and to whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub outcome: Outcome,
    pub name: String,
    pub number: Option<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub change: Option<Change>,
    pub listed_contacts: Vec<Contact>,
    pub number_matches: Vec<NumberMatch>,
    pub config: Option<PhonebookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_change(mut self, change: Change) -> Self {
        self.change = Some(change);
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_number_matches(mut self, matches: Vec<NumberMatch>) -> Self {
        self.number_matches = matches;
        self
    }

    pub fn with_config(mut self, config: PhonebookConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.change.as_ref().map(|c| c.outcome)
    }
}
