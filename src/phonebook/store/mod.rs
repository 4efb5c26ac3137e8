//! # Storage Layer
//!
//! This module defines where the persisted text lives. The [`DataStore`] trait
//! only moves whole documents around: the format itself belongs to
//! [`crate::codec`], and the decision of when to flush belongs to the command
//! layer.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a single text file
//!   - Default location: `<data dir>/contacts.dat`
//!   - Every save replaces the whole file through a temporary file and a
//!     rename, so readers never see a half-written file
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── contacts.dat   # One contact per line, see codec.rs
//! └── config.json    # Optional settings
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for contact persistence.
pub trait DataStore {
    /// Read the whole persisted document.
    /// Returns Ok(None) when nothing has been saved yet.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the whole persisted document.
    /// MUST be atomic: after an error the previous document is still intact.
    fn save(&mut self, text: &str) -> Result<()>;

    /// Human readable location, for messages and logs.
    fn location(&self) -> String;
}
