use super::DataStore;
use crate::error::{PhonebookError, Result};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    text: Option<String>,
    saves: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an already persisted document.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// The last successfully saved document.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.text.clone())
    }

    fn save(&mut self, text: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(PhonebookError::PersistenceWrite {
                location: self.location(),
                source: std::io::Error::other("Simulated write error"),
            });
        }
        self.text = Some(text.to_string());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory://contacts".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::book::ContactBook;
    use crate::codec;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub book: ContactBook,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                book: ContactBook::new(),
            }
        }

        /// Adds a contact to the book and persists it, as a finished command would.
        pub fn with_contact(mut self, name: &str, numbers: &[&str]) -> Self {
            for number in numbers {
                self.book.add_number(name, number).unwrap();
            }
            self.store.save(&codec::serialize(&self.book)).unwrap();
            self
        }

        pub fn failing_writes(mut self) -> Self {
            self.store.set_simulate_write_error(true);
            self
        }
    }
}
