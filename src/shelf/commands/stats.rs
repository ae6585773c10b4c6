use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub available: usize,
    pub borrowed: usize,
}

/// Pure aggregate over a record slice. Available and borrowed always sum
/// to the total because available is derived from it.
pub fn count_books(books: &[Book]) -> Counts {
    let borrowed = books.iter().filter(|b| b.is_borrowed()).count();
    Counts {
        total: books.len(),
        available: books.len() - borrowed,
        borrowed,
    }
}

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    Ok(CmdResult::default().with_counts(count_books(catalog.books())))
}
