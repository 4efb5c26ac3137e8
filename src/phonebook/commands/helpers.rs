use crate::book::ContactBook;
use crate::codec;
use crate::error::Result;
use crate::model::Outcome;
use crate::store::DataStore;
use tracing::{error, info, warn};

/// Runs a book operation on a copy of `book`, flushes the copy when it
/// changed, and swaps it in only after the flush succeeded.
pub fn apply<S, F>(store: &mut S, book: &mut ContactBook, op: F) -> Result<Outcome>
where
    S: DataStore,
    F: FnOnce(&mut ContactBook) -> Result<Outcome>,
{
    let mut working = book.clone();
    let outcome = op(&mut working)?;

    if outcome.is_mutation() {
        let text = codec::serialize(&working);
        if let Err(e) = store.save(&text) {
            error!(location = %store.location(), error = %e, "flush failed, change discarded");
            return Err(e);
        }
        *book = working;
        info!(?outcome, contacts = book.len(), "contacts updated");
    }

    Ok(outcome)
}

/// Reads the persisted book. A missing document is an empty book.
pub fn load_book<S: DataStore>(store: &S) -> Result<ContactBook> {
    let Some(text) = store.load()? else {
        info!(location = %store.location(), "no contacts file yet, starting empty");
        return Ok(ContactBook::new());
    };

    let report = codec::deserialize(&text);
    if report.skipped_lines > 0 {
        warn!(
            location = %store.location(),
            skipped = report.skipped_lines,
            "ignored malformed lines in contacts file"
        );
    }
    info!(contacts = report.book.len(), "contacts loaded");
    Ok(report.book)
}
