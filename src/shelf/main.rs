use clap::Parser;
use colored::*;
use shelf::api::{BookFilter, CmdMessage, Counts, MessageLevel, ShelfApi, StatusFilter};
use shelf::error::Result;
use shelf::model::{format_due, Book, BookId, BookStatus, Category};
use std::io::{BufRead, IsTerminal, Write};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, ShellCommand, ShellLine};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.plain {
        colored::control::set_override(false);
    }

    let mut api = ShelfApi::new();
    let interactive = std::io::stdin().is_terminal();
    if interactive {
        println!(
            "shelf {} - in-memory book catalog. Type help for commands, quit to leave.",
            env!("CARGO_PKG_VERSION")
        );
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print_prompt(&api)?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let tokens = match args::split_line(&line) {
            Ok(tokens) => tokens,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };
        if tokens.is_empty() {
            continue;
        }

        let shell_line = match ShellLine::try_parse_from(tokens) {
            Ok(shell_line) => shell_line,
            Err(e) => {
                // clap renders its own help and usage output
                e.print()?;
                continue;
            }
        };

        match shell_line.command {
            ShellCommand::Add {
                title,
                author,
                category,
            } => handle_add(&mut api, title, author, category)?,
            ShellCommand::List { query, status } => handle_list(&api, query, status)?,
            ShellCommand::Lend { id } => handle_lend(&mut api, id)?,
            ShellCommand::Return { id } => handle_return(&mut api, id)?,
            ShellCommand::Remove { id } => handle_remove(&mut api, id)?,
            ShellCommand::Edit { id } => handle_edit(&mut api, id)?,
            ShellCommand::Draft {
                title,
                author,
                category,
            } => handle_draft(&mut api, title, author, category)?,
            ShellCommand::Save => handle_save(&mut api)?,
            ShellCommand::Cancel => handle_cancel(&mut api)?,
            ShellCommand::Stats => handle_stats(&api)?,
            ShellCommand::Quit => break,
        }
    }

    Ok(())
}

fn print_prompt(api: &ShelfApi) -> Result<()> {
    let prompt = match api.edit_session() {
        Some(session) => format!("shelf(edit {})> ", session.book_id),
        None => "shelf> ".to_string(),
    };
    print!("{}", prompt.dimmed());
    std::io::stdout().flush()?;
    Ok(())
}

fn handle_add(
    api: &mut ShelfApi,
    title: String,
    author: String,
    category: Option<String>,
) -> Result<()> {
    let category = match parse_category(category.as_deref()) {
        Ok(category) => category,
        Err(message) => {
            println!("{}", message.yellow());
            return Ok(());
        }
    };

    let result = api.add_book(&title, &author, category)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &ShelfApi, query: Option<String>, status: String) -> Result<()> {
    let status = match status.parse::<StatusFilter>() {
        Ok(status) => status,
        Err(message) => {
            println!("{}", message.yellow());
            return Ok(());
        }
    };

    let result = api.list_books(&BookFilter { query, status })?;
    print_books(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_lend(api: &mut ShelfApi, id: u64) -> Result<()> {
    let result = api.lend_book(BookId(id))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_return(api: &mut ShelfApi, id: u64) -> Result<()> {
    let result = api.return_book(BookId(id))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(api: &mut ShelfApi, id: u64) -> Result<()> {
    let result = api.remove_book(BookId(id))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &mut ShelfApi, id: u64) -> Result<()> {
    let result = api.begin_edit(BookId(id))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_draft(
    api: &mut ShelfApi,
    title: Option<String>,
    author: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let category = match parse_category(category.as_deref()) {
        Ok(category) => category,
        Err(message) => {
            println!("{}", message.yellow());
            return Ok(());
        }
    };

    let result = api.update_draft(title.as_deref(), author.as_deref(), category)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_save(api: &mut ShelfApi) -> Result<()> {
    let result = api.commit_edit()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_cancel(api: &mut ShelfApi) -> Result<()> {
    let result = api.cancel_edit()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(api: &ShelfApi) -> Result<()> {
    let result = api.stats()?;
    if let Some(counts) = result.counts {
        print_counts(&counts);
    }
    print_messages(&result.messages);
    Ok(())
}

fn parse_category(raw: Option<&str>) -> std::result::Result<Option<Category>, String> {
    match raw {
        Some(s) => s.parse::<Category>().map(Some),
        None => Ok(None),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const STATUS_WIDTH: usize = 26;

fn print_books(books: &[Book]) {
    for book in books {
        let idx_str = format!("{:>3}. ", book.id);
        let label = format!("{} by {}  [{}]", book.title, book.author, book.category);

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + STATUS_WIDTH);
        let label_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label_display.width());

        let status = match book.status {
            BookStatus::Available => "Available".to_string(),
            BookStatus::Borrowed { due } => format!("Borrowed due {}", format_due(due)),
        };
        // align before coloring; ANSI codes would skew the column
        let status = format!("{:>width$}", status, width = STATUS_WIDTH);
        let status = match book.status {
            BookStatus::Available => status.green(),
            BookStatus::Borrowed { .. } => status.yellow(),
        };

        println!(
            "{}{}{}{}",
            idx_str,
            label_display,
            " ".repeat(padding),
            status
        );
    }
}

fn print_counts(counts: &Counts) {
    let borrowed = counts.borrowed.to_string();
    let borrowed = if counts.borrowed > 0 {
        borrowed.yellow()
    } else {
        borrowed.normal()
    };
    println!(
        "Total: {}  Available: {}  Borrowed: {}",
        counts.total.to_string().bold(),
        counts.available.to_string().green(),
        borrowed
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > max_width.saturating_sub(1) {
            result.push('…');
            break;
        }
        result.push(c);
        used += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_pass_through_untruncated() {
        assert_eq!(truncate_to_width("Dune", 10), "Dune");
        assert_eq!(truncate_to_width("吾輩は猫である", 14), "吾輩は猫である");
    }

    #[test]
    fn truncation_respects_wide_character_columns() {
        let cut = truncate_to_width("吾輩は猫である", 7);
        assert_eq!(cut, "吾輩は…");
        assert!(cut.width() <= 7);

        // a wide character never straddles the boundary
        assert_eq!(truncate_to_width("吾輩は猫である", 6), "吾輩…");
    }
}
