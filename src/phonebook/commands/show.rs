use crate::book::ContactBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &ContactBook, name: &str) -> Result<CmdResult> {
    let found = book.find_by_name(name).cloned().into_iter().collect();
    Ok(CmdResult::default().with_listed_contacts(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_exact_match_only() {
        let fx = StoreFixture::new().with_contact("Ann Lee", &["123"]);

        let hit = run(&fx.book, "Ann Lee").unwrap();
        assert_eq!(hit.listed_contacts.len(), 1);
        assert_eq!(hit.listed_contacts[0].numbers(), ["123".to_string()]);

        assert!(run(&fx.book, "Ann").unwrap().listed_contacts.is_empty());
        assert!(run(&fx.book, "ann lee").unwrap().listed_contacts.is_empty());
    }
}
