use crate::book::ContactBook;
use crate::commands::{helpers::apply, Change, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Creates the contact, or appends the number to an existing one.
pub fn run<S: DataStore>(
    store: &mut S,
    book: &mut ContactBook,
    name: &str,
    number: &str,
) -> Result<CmdResult> {
    let outcome = apply(store, book, |b| b.add_number(name, number))?;
    Ok(CmdResult::default().with_change(Change {
        outcome,
        name: name.to_string(),
        number: Some(number.to_string()),
    }))
}
