use crate::catalog::{Catalog, EditDraft, EditSession};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{BookId, Category};

pub fn begin(catalog: &mut Catalog, id: BookId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let book = match catalog.get(id) {
        Some(book) => book.clone(),
        None => {
            result.add_message(CmdMessage::warning(format!("No book with id {}.", id)));
            return Ok(result);
        }
    };

    catalog.open_session(EditSession {
        book_id: id,
        draft: EditDraft {
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category,
        },
    });

    result.add_message(CmdMessage::success(format!(
        "Editing ({}): {}",
        id, book.title
    )));
    result.add_message(CmdMessage::info(
        "Change fields with draft, then save or cancel.",
    ));
    result.affected_books.push(book);

    Ok(result)
}

pub fn update(
    catalog: &mut Catalog,
    title: Option<&str>,
    author: Option<&str>,
    category: Option<Category>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let session = match catalog.session_mut() {
        Some(session) => session,
        None => {
            result.add_message(CmdMessage::warning("No edit in progress."));
            return Ok(result);
        }
    };

    if let Some(title) = title {
        session.draft.title = title.to_string();
    }
    if let Some(author) = author {
        session.draft.author = author.to_string();
    }
    if let Some(category) = category {
        session.draft.category = category;
    }

    result.add_message(CmdMessage::info(format!(
        "Draft ({}): {} by {} [{}]",
        session.book_id, session.draft.title, session.draft.author, session.draft.category
    )));

    Ok(result)
}

pub fn commit(catalog: &mut Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let session = match catalog.take_session() {
        Some(session) => session,
        None => {
            result.add_message(CmdMessage::warning("No edit in progress."));
            return Ok(result);
        }
    };

    let title = session.draft.title.trim().to_string();
    let author = session.draft.author.trim().to_string();
    if title.is_empty() || author.is_empty() {
        // refused commits keep the session open for another try
        result.add_message(CmdMessage::warning("Title and author are required."));
        catalog.open_session(session);
        return Ok(result);
    }

    // removal closes its session, so the target is normally still here
    let book = match catalog.get_mut(session.book_id) {
        Some(book) => book,
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No book with id {}.",
                session.book_id
            )));
            return Ok(result);
        }
    };

    book.title = title;
    book.author = author;
    book.category = session.draft.category;

    result.add_message(CmdMessage::success(format!(
        "Book updated ({}): {}",
        book.id, book.title
    )));
    result.affected_books.push(book.clone());

    Ok(result)
}

pub fn cancel(catalog: &mut Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match catalog.take_session() {
        Some(session) => {
            result.add_message(CmdMessage::info(format!(
                "Edit cancelled ({}).",
                session.book_id
            )));
        }
        None => {
            result.add_message(CmdMessage::info("No edit in progress."));
        }
    }

    Ok(result)
}
