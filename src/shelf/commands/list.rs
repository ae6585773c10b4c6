use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, BookStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Available,
    Borrowed,
}

impl StatusFilter {
    fn matches(self, book: &Book) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Available => matches!(book.status, BookStatus::Available),
            StatusFilter::Borrowed => matches!(book.status, BookStatus::Borrowed { .. }),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "available" => Ok(StatusFilter::Available),
            "borrowed" => Ok(StatusFilter::Borrowed),
            other => Err(format!(
                "Unknown status filter: {} (expected all, available or borrowed)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookFilter {
    pub query: Option<String>,
    pub status: StatusFilter,
}

impl Default for BookFilter {
    fn default() -> Self {
        Self {
            query: None,
            status: StatusFilter::All,
        }
    }
}

/// Pure view over a record slice: a record is kept when the query matches
/// its title or author (case-insensitive substring) and its status passes
/// the filter. Input order is preserved.
pub fn filter_books(books: &[Book], filter: &BookFilter) -> Vec<Book> {
    // contains("") holds for every string, so an empty query matches all
    let query = filter.query.as_deref().unwrap_or("").to_lowercase();

    books
        .iter()
        .filter(|book| {
            let text_match = book.title.to_lowercase().contains(&query)
                || book.author.to_lowercase().contains(&query);
            text_match && filter.status.matches(book)
        })
        .cloned()
        .collect()
}

pub fn run(catalog: &Catalog, filter: &BookFilter) -> Result<CmdResult> {
    let listed = filter_books(catalog.books(), filter);

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let message = if catalog.books().is_empty() {
            "No books yet. Add one with: add <title> <author>"
        } else {
            "No books match your filters."
        };
        result.add_message(CmdMessage::info(message));
    }

    Ok(result.with_listed_books(listed))
}
