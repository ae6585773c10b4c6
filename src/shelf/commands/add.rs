use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, Category};

pub fn run(
    catalog: &mut Catalog,
    title: &str,
    author: &str,
    category: Category,
) -> Result<CmdResult> {
    let title = title.trim();
    let author = author.trim();

    let mut result = CmdResult::default();
    if title.is_empty() || author.is_empty() {
        result.add_message(CmdMessage::warning("Title and author are required."));
        return Ok(result);
    }

    let id = catalog.mint_id();
    let book = Book::new(id, title.to_string(), author.to_string(), category);
    catalog.insert(book.clone());

    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        id, book.title
    )));
    result.affected_books.push(book);

    Ok(result)
}
