use crate::book::ContactBook;
use crate::commands::{helpers::apply, Change, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::store::DataStore;

/// Adds a number to a contact that must already exist.
pub fn add_number<S: DataStore>(
    store: &mut S,
    book: &mut ContactBook,
    name: &str,
    number: &str,
) -> Result<CmdResult> {
    if book.find_by_name(name).is_none() {
        return Err(PhonebookError::NameNotFound(name.to_string()));
    }
    let outcome = apply(store, book, |b| b.add_number(name, number))?;
    Ok(CmdResult::default().with_change(Change {
        outcome,
        name: name.to_string(),
        number: Some(number.to_string()),
    }))
}

/// Removes one number from a contact. Removing the last one removes the contact.
pub fn delete_number<S: DataStore>(
    store: &mut S,
    book: &mut ContactBook,
    name: &str,
    number: &str,
) -> Result<CmdResult> {
    let outcome = apply(store, book, |b| b.remove_number(name, number))?;
    Ok(CmdResult::default().with_change(Change {
        outcome,
        name: name.to_string(),
        number: Some(number.to_string()),
    }))
}
