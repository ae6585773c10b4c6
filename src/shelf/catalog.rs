//! In-memory store for book records and the single edit-session slot.
//! State lives for the life of the process; there is no persistence.

use crate::model::{Book, BookId, Category};

/// Draft fields for an open edit session, decoupled from the stored
/// record until committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub title: String,
    pub author: String,
    pub category: Category,
}

#[derive(Debug, Clone)]
pub struct EditSession {
    pub book_id: BookId,
    pub draft: EditDraft,
}

/// Owns the records (newest first), the id counter, and the edit slot.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
    next_id: u64,
    session: Option<EditSession>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints the next record id. Ids grow strictly and are never handed
    /// out twice, including after removals.
    pub fn mint_id(&mut self) -> BookId {
        self.next_id += 1;
        BookId(self.next_id)
    }

    /// Prepends a record; the catalog lists newest first.
    pub fn insert(&mut self, book: Book) {
        self.books.insert(0, book);
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// Removes a record if present. An edit session open on the same
    /// record is closed with it, so no session outlives its target.
    pub fn remove(&mut self, id: BookId) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.id == id)?;
        if self.session.as_ref().is_some_and(|s| s.book_id == id) {
            self.session = None;
        }
        Some(self.books.remove(pos))
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        self.session.as_mut()
    }

    /// Opens a session, replacing any previous one. At most one record
    /// is under edit at a time.
    pub fn open_session(&mut self, session: EditSession) {
        self.session = Some(session);
    }

    pub fn take_session(&mut self) -> Option<EditSession> {
        self.session.take()
    }
}
