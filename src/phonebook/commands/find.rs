use crate::book::ContactBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &ContactBook, number: &str) -> Result<CmdResult> {
    let matches = book.find_by_number(number)?;
    Ok(CmdResult::default().with_number_matches(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_all_owners_of_a_number() {
        let fx = StoreFixture::new()
            .with_contact("Ann", &["123", "555"])
            .with_contact("Bob", &["555"]);

        let result = run(&fx.book, "555").unwrap();
        let owners: Vec<_> = result.number_matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(owners, vec!["Ann", "Bob"]);
    }

    #[test]
    fn rejects_malformed_number() {
        let fx = StoreFixture::new().with_contact("Ann", &["123"]);
        assert!(matches!(
            run(&fx.book, "12x"),
            Err(PhonebookError::InvalidNumber(_))
        ));
    }
}
