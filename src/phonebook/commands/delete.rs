use crate::book::ContactBook;
use crate::commands::{helpers::apply, Change, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, book: &mut ContactBook, name: &str) -> Result<CmdResult> {
    let outcome = apply(store, book, |b| b.delete_contact(name))?;
    Ok(CmdResult::default().with_change(Change {
        outcome,
        name: name.to_string(),
        number: None,
    }))
}
