//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic book-catalog library**. The interactive shell in
//! `main.rs` is one client of the library, not the reason it exists.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses shell lines, formats output, handles terminal I/O │
//! │  - Owns the prompt, stdout/stderr, and process exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the catalog              │
//! │  - Fills in defaults, returns `CmdResult`s                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Catalog semantics: add, remove, lend, return, edit,      │
//! │    filtered views, aggregate counts                         │
//! │  - Free functions over `&mut Catalog`                       │
//! │  - Never prints, never exits the process                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Store (catalog.rs)                                 │
//! │  - Records (newest first), id counter, edit-session slot    │
//! │  - In-memory only; state lives for the life of the process  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Everything from `api.rs` inward (API, commands, catalog) takes and
//! returns plain Rust values (`Result<CmdResult>`). Printing and process
//! exit belong to whichever client sits on top.
//!
//! Operations that decline to act (blank required fields, unknown ids,
//! lending an already-lent book) are not errors: they come back as warning
//! messages inside `CmdResult`, and the catalog is left untouched.
//!
//! ## Invariants the Core Maintains
//!
//! - Record ids come from a strictly monotonic counter and are never reused.
//! - A record is `Borrowed` exactly when it carries a due date; the due date
//!   lives inside the status variant, so the pairing cannot drift.
//! - The catalog lists records newest first.
//! - At most one edit session is open at a time, and removing a record
//!   closes any session targeting it.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of catalog
//!    semantics against a plain [`catalog::Catalog`]. Most of the coverage
//!    sits here.
//! 2. **API** (`api.rs`): a flow test verifying dispatch across the facade.
//! 3. **CLI** (`args.rs` + thin `main.rs`): tokenizer unit tests plus
//!    end-to-end piped sessions in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The `ShelfApi` facade that clients drive
//! - [`commands`]: Catalog semantics for each operation
//! - [`catalog`]: The in-memory store and edit-session slot
//! - [`model`]: Core data types (`Book`, `BookId`, `BookStatus`, `Category`)
//! - [`error`]: Error types for the fallible outer layers

pub mod api;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod model;
