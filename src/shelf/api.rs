//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for every catalog operation, regardless of the UI driving it.
//!
//! The facade owns the [`Catalog`] and dispatches to the matching command
//! function, returning its structured `Result<CmdResult>` unchanged. It holds
//! no business logic (that lives in `commands/*.rs`), performs no I/O, and
//! never formats for a terminal. A different client (TUI, web service) could
//! sit on top of this same surface.
//!
//! Catalog semantics never produce an `Err`: refusals travel inside the
//! `CmdResult` as warning messages. The error arm exists for callers that
//! layer fallible concerns (like terminal I/O) over the same `Result` alias.

use crate::catalog::{Catalog, EditSession};
use crate::commands;
use crate::error::Result;
use crate::model::{BookId, Category};

pub struct ShelfApi {
    catalog: Catalog,
}

impl ShelfApi {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
        }
    }

    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        category: Option<Category>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(
            &mut self.catalog,
            title,
            author,
            category.unwrap_or_default(),
        )
    }

    pub fn remove_book(&mut self, id: BookId) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.catalog, id)
    }

    pub fn lend_book(&mut self, id: BookId) -> Result<commands::CmdResult> {
        commands::lend::run(&mut self.catalog, id)
    }

    pub fn return_book(&mut self, id: BookId) -> Result<commands::CmdResult> {
        commands::return_book::run(&mut self.catalog, id)
    }

    pub fn begin_edit(&mut self, id: BookId) -> Result<commands::CmdResult> {
        commands::edit::begin(&mut self.catalog, id)
    }

    pub fn update_draft(
        &mut self,
        title: Option<&str>,
        author: Option<&str>,
        category: Option<Category>,
    ) -> Result<commands::CmdResult> {
        commands::edit::update(&mut self.catalog, title, author, category)
    }

    pub fn commit_edit(&mut self) -> Result<commands::CmdResult> {
        commands::edit::commit(&mut self.catalog)
    }

    pub fn cancel_edit(&mut self) -> Result<commands::CmdResult> {
        commands::edit::cancel(&mut self.catalog)
    }

    pub fn list_books(&self, filter: &BookFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog, filter)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.catalog)
    }

    /// Read-only view of the open edit session, if any. Used by clients to
    /// show what is being edited.
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.catalog.session()
    }
}

impl Default for ShelfApi {
    fn default() -> Self {
        Self::new()
    }
}

pub use crate::commands::list::{BookFilter, StatusFilter};
pub use crate::commands::stats::Counts;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
