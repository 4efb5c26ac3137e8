use crate::book::ContactBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &ContactBook) -> Result<CmdResult> {
    let contacts = book.list().into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_contacts(contacts))
}
