//! # Contact Book
//!
//! The in-memory collection of all contacts, keyed by name. This is pure data:
//! nothing here touches the filesystem. Flushing after a mutation is the job of
//! the command layer (see `commands::helpers::apply`).
//!
//! Names are unique (exact, case-sensitive) and kept in a `BTreeMap`, so
//! iteration order is the listing order: lexicographic by code point, which
//! puts `"Bob"` and `"Zoe"` before `"alice"`.

use crate::error::{PhonebookError, Result};
use crate::model::{Contact, NumberMatch, Outcome};
use crate::validation::{validate_name, validate_number};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: BTreeMap<String, Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All contacts, sorted by name.
    pub fn list(&self) -> Vec<&Contact> {
        self.contacts.values().collect()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    /// Every contact holding exactly `number`, in name order.
    pub fn find_by_number(&self, number: &str) -> Result<Vec<NumberMatch>> {
        let number = validate_number(number)?;
        Ok(self
            .contacts
            .values()
            .filter(|c| c.has_number(&number))
            .map(|c| NumberMatch {
                name: c.name().to_string(),
                number: number.clone(),
            })
            .collect())
    }

    pub fn add_number(&mut self, name: &str, number: &str) -> Result<Outcome> {
        let name = validate_name(name)?;
        let number = validate_number(number)?;

        match self.contacts.get_mut(&name) {
            Some(contact) => {
                if contact.push_number(number) {
                    Ok(Outcome::NumberAdded)
                } else {
                    Ok(Outcome::DuplicateNumber)
                }
            }
            None => {
                let contact = Contact::new(&name, &number)?;
                self.contacts.insert(name, contact);
                Ok(Outcome::Created)
            }
        }
    }

    /// Removes one number. A contact left without numbers is removed as well.
    pub fn remove_number(&mut self, name: &str, number: &str) -> Result<Outcome> {
        let contact = self
            .contacts
            .get_mut(name)
            .ok_or_else(|| PhonebookError::NameNotFound(name.to_string()))?;

        if !contact.remove_number(number) {
            return Ok(Outcome::NumberNotFound);
        }

        if contact.numbers().is_empty() {
            self.contacts.remove(name);
            Ok(Outcome::RemovedLastNumber)
        } else {
            Ok(Outcome::Removed)
        }
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<Outcome> {
        self.contacts
            .remove(name)
            .map(|_| Outcome::Deleted)
            .ok_or_else(|| PhonebookError::NameNotFound(name.to_string()))
    }

    /// Inserts a loaded contact, replacing any contact with the same name.
    pub(crate) fn insert(&mut self, contact: Contact) -> Option<Contact> {
        self.contacts.insert(contact.name().to_string(), contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(book: &ContactBook) -> Vec<&str> {
        book.list().iter().map(|c| c.name()).collect()
    }

    #[test]
    fn test_add_then_find_by_name() {
        let mut book = ContactBook::new();
        assert_eq!(book.add_number("Ann", "123").unwrap(), Outcome::Created);

        let found = book.find_by_name("Ann").unwrap();
        assert!(found.has_number("123"));
        assert!(book.find_by_name("ann").is_none());
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut book = ContactBook::new();
        book.add_number("Ann", "456").unwrap();
        assert_eq!(book.add_number("Ann", "123").unwrap(), Outcome::NumberAdded);
        assert_eq!(
            book.find_by_name("Ann").unwrap().numbers(),
            ["456".to_string(), "123".to_string()]
        );
    }

    #[test]
    fn test_add_same_number_twice_is_duplicate() {
        let mut book = ContactBook::new();
        book.add_number("Ann", "123").unwrap();
        let before = book.clone();

        assert_eq!(
            book.add_number("Ann", "123").unwrap(),
            Outcome::DuplicateNumber
        );
        assert_eq!(book, before);
    }

    #[test]
    fn test_add_validates_before_mutating() {
        let mut book = ContactBook::new();
        assert!(matches!(
            book.add_number("A", "123"),
            Err(PhonebookError::InvalidName(_))
        ));
        assert!(matches!(
            book.add_number("Ann", "12a"),
            Err(PhonebookError::InvalidNumber(_))
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn test_list_uses_code_point_order() {
        let mut book = ContactBook::new();
        book.add_number("alice", "111").unwrap();
        book.add_number("Zoe", "222").unwrap();
        book.add_number("Bob", "333").unwrap();
        book.add_number("Émile", "444").unwrap();

        assert_eq!(names(&book), vec!["Bob", "Zoe", "alice", "Émile"]);
    }

    #[test]
    fn test_find_by_number_returns_every_owner() {
        let mut book = ContactBook::new();
        book.add_number("Bob", "555 01").unwrap();
        book.add_number("Ann", "555 01").unwrap();
        book.add_number("Ann", "999").unwrap();

        let matches = book.find_by_number("555 01").unwrap();
        assert_eq!(
            matches,
            vec![
                NumberMatch {
                    name: "Ann".into(),
                    number: "555 01".into()
                },
                NumberMatch {
                    name: "Bob".into(),
                    number: "555 01".into()
                },
            ]
        );
        assert!(book.find_by_number("55501").unwrap().is_empty());
    }

    #[test]
    fn test_find_by_number_validates_first() {
        let book = ContactBook::new();
        assert!(matches!(
            book.find_by_number("abc"),
            Err(PhonebookError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_remove_number_outcomes() {
        let mut book = ContactBook::new();
        book.add_number("Ann", "123").unwrap();
        book.add_number("Ann", "456").unwrap();

        let before = book.clone();
        assert_eq!(
            book.remove_number("Ann", "789").unwrap(),
            Outcome::NumberNotFound
        );
        assert_eq!(book, before);

        assert_eq!(book.remove_number("Ann", "123").unwrap(), Outcome::Removed);
        assert_eq!(
            book.find_by_name("Ann").unwrap().numbers(),
            ["456".to_string()]
        );
    }

    #[test]
    fn test_remove_last_number_deletes_contact() {
        let mut book = ContactBook::new();
        book.add_number("Ann", "123").unwrap();

        assert_eq!(
            book.remove_number("Ann", "123").unwrap(),
            Outcome::RemovedLastNumber
        );
        assert!(book.find_by_name("Ann").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_remove_from_missing_contact_fails_without_change() {
        let mut book = ContactBook::new();
        book.add_number("Ann", "123").unwrap();
        let before = book.clone();

        assert!(matches!(
            book.remove_number("Bob", "123"),
            Err(PhonebookError::NameNotFound(name)) if name == "Bob"
        ));
        assert_eq!(book, before);
    }

    #[test]
    fn test_delete_contact() {
        let mut book = ContactBook::new();
        book.add_number("Ann", "123").unwrap();

        assert_eq!(book.delete_contact("Ann").unwrap(), Outcome::Deleted);
        assert!(matches!(
            book.delete_contact("Ann"),
            Err(PhonebookError::NameNotFound(_))
        ));
    }

    #[test]
    fn test_end_to_end_session() {
        let mut book = ContactBook::new();
        assert_eq!(book.add_number("Ann", "123").unwrap(), Outcome::Created);
        assert_eq!(book.add_number("Ann", "456").unwrap(), Outcome::NumberAdded);

        let listed: Vec<(&str, &[String])> =
            book.list().iter().map(|c| (c.name(), c.numbers())).collect();
        assert_eq!(
            listed,
            vec![("Ann", &["123".to_string(), "456".to_string()][..])]
        );

        assert_eq!(book.delete_contact("Ann").unwrap(), Outcome::Deleted);
        assert!(book.list().is_empty());
    }
}
