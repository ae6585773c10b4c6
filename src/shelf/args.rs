use clap::{Parser, Subcommand};
use shelf::error::{Result, ShelfError};

#[derive(Parser, Debug)]
#[command(name = "shelf", version)]
#[command(about = "In-memory book catalog for the command line", long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}

/// One line of shell input, parsed as a subcommand without a binary name.
#[derive(Parser, Debug)]
#[command(name = "shelf", no_binary_name = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Add a book to the catalog
    #[command(alias = "a")]
    Add {
        /// Title of the book
        title: String,

        /// Author of the book
        author: String,

        /// Category (defaults to Fiction)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List books, filtered by query and status
    #[command(alias = "ls")]
    List {
        /// Substring to match against title or author
        query: Option<String>,

        /// Show all, available or borrowed books
        #[arg(short, long, default_value = "all")]
        status: String,
    },

    /// Lend a book out for 14 days
    Lend {
        /// Id of the book
        id: u64,
    },

    /// Return a lent book
    Return {
        /// Id of the book
        id: u64,
    },

    /// Remove a book from the catalog
    #[command(alias = "rm")]
    Remove {
        /// Id of the book
        id: u64,
    },

    /// Start editing a book
    #[command(alias = "e")]
    Edit {
        /// Id of the book
        id: u64,
    },

    /// Change fields on the open draft
    Draft {
        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New author
        #[arg(short, long)]
        author: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Commit the open draft to its book
    Save,

    /// Discard the open draft
    Cancel,

    /// Show catalog counts
    Stats,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Splits a shell line into arguments, honoring double quotes so titles
/// can contain spaces.
pub fn split_line(line: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                // an empty quoted string still counts as an argument
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(ShelfError::Parse("unclosed quote".into()));
    }
    if has_token {
        args.push(current);
    }

    Ok(args)
}
