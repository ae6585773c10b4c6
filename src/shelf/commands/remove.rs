use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;

pub fn run(catalog: &mut Catalog, id: BookId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match catalog.remove(id) {
        Some(book) => {
            result.add_message(CmdMessage::success(format!(
                "Book removed ({}): {}",
                id, book.title
            )));
            result.affected_books.push(book);
        }
        None => {
            result.add_message(CmdMessage::warning(format!("No book with id {}.", id)));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, edit, MessageLevel};
    use crate::model::Category;

    #[test]
    fn removes_the_record() {
        let mut catalog = Catalog::new();
        add::run(&mut catalog, "Dune", "Frank Herbert", Category::SciFi).unwrap();
        let id = catalog.books()[0].id;

        let result = run(&mut catalog, id).unwrap();
        assert!(catalog.books().is_empty());
        assert_eq!(result.affected_books[0].title, "Dune");
    }

    #[test]
    fn noop_when_absent() {
        let mut catalog = Catalog::new();
        add::run(&mut catalog, "Dune", "Frank Herbert", Category::SciFi).unwrap();

        let result = run(&mut catalog, BookId(99)).unwrap();
        assert_eq!(catalog.books().len(), 1);
        assert!(result.affected_books.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut catalog = Catalog::new();
        add::run(&mut catalog, "First", "A", Category::Fiction).unwrap();
        let first = catalog.books()[0].id;

        run(&mut catalog, first).unwrap();
        add::run(&mut catalog, "Second", "B", Category::Fiction).unwrap();

        assert!(catalog.books()[0].id > first);
    }

    #[test]
    fn closes_an_open_edit_session_on_the_same_record() {
        let mut catalog = Catalog::new();
        add::run(&mut catalog, "Dune", "Frank Herbert", Category::SciFi).unwrap();
        let id = catalog.books()[0].id;
        edit::begin(&mut catalog, id).unwrap();

        run(&mut catalog, id).unwrap();
        assert!(catalog.session().is_none());

        // the session died with the record, so commit has nothing to do
        let commit = edit::commit(&mut catalog).unwrap();
        assert!(commit.affected_books.is_empty());
    }
}
