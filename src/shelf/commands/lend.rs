use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{format_due, BookId, BookStatus};
use chrono::{Duration, Utc};

pub const LOAN_PERIOD_DAYS: i64 = 14;

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
        BookStatus::Borrowed { due } => {
            // re-lending never touches the standing due date
            result.add_message(CmdMessage::info(format!(
                "Book already lent ({}): {}, due {}",
                id,
                book.title,
                format_due(due)
            )));
        }
        BookStatus::Available => {
            let due = Utc::now() + Duration::days(LOAN_PERIOD_DAYS);
            book.status = BookStatus::Borrowed { due };
            result.add_message(CmdMessage::success(format!(
                "Book lent ({}): {}, due {}",
                id,
                book.title,
                format_due(due)
            )));
            result.affected_books.push(book.clone());
        }
    }

    Ok(result)
}
