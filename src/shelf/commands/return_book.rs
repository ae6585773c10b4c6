use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{BookId, BookStatus};

pub fn run(catalog: &mut Catalog, id: BookId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let book = match catalog.get_mut(id) {
        Some(book) => book,
        None => {
            result.add_message(CmdMessage::warning(format!("No book with id {}.", id)));
            return Ok(result);
        }
    };

    match book.status {
        BookStatus::Available => {
            result.add_message(CmdMessage::info(format!(
                "Book is not lent out ({}): {}",
                id, book.title
            )));
        }
        BookStatus::Borrowed { .. } => {
            book.status = BookStatus::Available;
            result.add_message(CmdMessage::success(format!(
                "Book returned ({}): {}",
                id, book.title
            )));
            result.affected_books.push(book.clone());
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, lend, MessageLevel};
    use crate::model::Category;

    fn seed(catalog: &mut Catalog) -> BookId {
        add::run(catalog, "Dune", "Frank Herbert", Category::SciFi).unwrap();
        catalog.books()[0].id
    }

    #[test]
    fn lend_then_return_restores_available_exactly() {
        let mut catalog = Catalog::new();
        let id = seed(&mut catalog);

        lend::run(&mut catalog, id).unwrap();
        run(&mut catalog, id).unwrap();

        let book = catalog.get(id).unwrap();
        assert_eq!(book.status, BookStatus::Available);
        assert_eq!(book.due_date(), None);
    }

    #[test]
    fn noop_when_already_available() {
        let mut catalog = Catalog::new();
        let id = seed(&mut catalog);

        let result = run(&mut catalog, id).unwrap();
        assert_eq!(catalog.get(id).unwrap().status, BookStatus::Available);
        assert!(result.affected_books.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Info));
    }

    #[test]
    fn noop_when_absent() {
        let mut catalog = Catalog::new();
        let result = run(&mut catalog, BookId(7)).unwrap();

        assert!(result.affected_books.is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
    }
}
