use crate::error::Result;
use crate::validation::{validate_name, validate_number};

/// A named entry holding one or more phone numbers, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    numbers: Vec<String>,
}

impl Contact {
    /// Builds a contact from a name and its first number, validating both.
    pub fn new(name: &str, number: &str) -> Result<Self> {
        let name = validate_name(name)?;
        let number = validate_number(number)?;
        Ok(Self {
            name,
            numbers: vec![number],
        })
    }

    /// Rebuilds a contact from persisted data without re-validating numbers.
    /// Callers must pass at least one number.
    pub(crate) fn from_parts(name: String, numbers: Vec<String>) -> Self {
        debug_assert!(!numbers.is_empty());
        Self { name, numbers }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    pub fn has_number(&self, number: &str) -> bool {
        self.numbers.iter().any(|n| n == number)
    }

    /// Appends a number; returns false when it is already present.
    pub(crate) fn push_number(&mut self, number: String) -> bool {
        if self.has_number(&number) {
            return false;
        }
        self.numbers.push(number);
        true
    }

    /// Removes a number; returns false when it was not present.
    pub(crate) fn remove_number(&mut self, number: &str) -> bool {
        match self.numbers.iter().position(|n| n == number) {
            Some(pos) => {
                self.numbers.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// One hit of a reverse lookup: the contact owning the number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberMatch {
    pub name: String,
    pub number: String,
}

/// Result tag of a book operation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new contact was created with its first number.
    Created,
    /// A number was appended to an existing contact.
    NumberAdded,
    /// The contact already holds this number; nothing changed.
    DuplicateNumber,
    /// A number was removed and the contact still has others.
    Removed,
    /// The contact's only number was removed, so the contact is gone too.
    RemovedLastNumber,
    /// The contact does not hold this number; nothing changed.
    NumberNotFound,
    /// The whole contact was removed.
    Deleted,
}

impl Outcome {
    /// Whether the book changed and must be flushed.
    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            Outcome::Created
                | Outcome::NumberAdded
                | Outcome::Removed
                | Outcome::RemovedLastNumber
                | Outcome::Deleted
        )
    }
}
