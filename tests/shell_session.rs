use assert_cmd::Command;
use predicates::prelude::*;

fn session(lines: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.arg("--plain").write_stdin(lines.join("\n")).assert()
}

#[test]
fn adds_and_lists_books() {
    session(&[
        r#"add "Dune" "Frank Herbert" --category sci-fi"#,
        r#"add "1984" "George Orwell""#,
        "list",
        "quit",
    ])
    .success()
    .stdout(predicates::str::contains("Book added (1): Dune"))
    .stdout(predicates::str::contains("Book added (2): 1984"))
    .stdout(predicates::str::contains("Dune by Frank Herbert  [Sci-Fi]"))
    .stdout(predicates::str::contains("1984 by George Orwell  [Fiction]"));
}

#[test]
fn empty_catalog_prompts_for_a_first_book() {
    session(&["list"])
        .success()
        .stdout(predicates::str::contains("No books yet"));
}

#[test]
fn lend_marks_a_book_borrowed() {
    session(&[
        r#"add "Dune" "Frank Herbert" --category sci-fi"#,
        "lend 1",
        "list --status borrowed",
        "stats",
    ])
    .success()
    .stdout(predicates::str::contains("Book lent (1): Dune, due"))
    .stdout(predicates::str::contains("Borrowed due"))
    .stdout(predicates::str::contains("Total: 1  Available: 0  Borrowed: 1"));
}

#[test]
fn second_lend_reports_the_standing_due_date() {
    session(&[r#"add "Dune" "Frank Herbert""#, "lend 1", "lend 1"])
        .success()
        .stdout(predicates::str::contains("Book already lent (1): Dune"));
}

#[test]
fn returned_books_are_available_again() {
    session(&[
        r#"add "Dune" "Frank Herbert""#,
        "lend 1",
        "return 1",
        "stats",
        "exit",
    ])
    .success()
    .stdout(predicates::str::contains("Book returned (1): Dune"))
    .stdout(predicates::str::contains("Total: 1  Available: 1  Borrowed: 0"));
}

#[test]
fn query_filters_by_title_or_author() {
    session(&[
        r#"add "Dune" "Frank Herbert" --category sci-fi"#,
        r#"add "1984" "George Orwell""#,
        "list DUNE",
    ])
    .success()
    .stdout(predicates::str::contains("Dune by Frank Herbert"))
    .stdout(predicates::str::contains("1984 by George Orwell").not());
}

#[test]
fn edit_commits_the_corrected_draft() {
    session(&[
        r#"add "Neuromancer" "William Gibson" --category sci-fi"#,
        "edit 1",
        r#"draft --title "Count Zero""#,
        "save",
        "list",
    ])
    .success()
    .stdout(predicates::str::contains("Editing (1): Neuromancer"))
    .stdout(predicates::str::contains("Book updated (1): Count Zero"))
    .stdout(predicates::str::contains("Count Zero by William Gibson"));
}

#[test]
fn blank_draft_title_is_refused_and_the_session_survives() {
    session(&[
        r#"add "Dune" "Frank Herbert""#,
        "edit 1",
        r#"draft --title "  ""#,
        "save",
        r#"draft --title "Dune Messiah""#,
        "save",
    ])
    .success()
    .stdout(predicates::str::contains("Title and author are required."))
    .stdout(predicates::str::contains("Book updated (1): Dune Messiah"));
}

#[test]
fn blank_draft_author_is_refused_and_the_session_survives() {
    session(&[
        r#"add "Dune" "Frank Herbert""#,
        "edit 1",
        r#"draft --author "  ""#,
        "save",
        r#"draft --author "Brian Herbert""#,
        "save",
    ])
    .success()
    .stdout(predicates::str::contains("Title and author are required."))
    .stdout(predicates::str::contains("Book updated (1): Dune"));
}

#[test]
fn removing_a_book_closes_its_edit_session() {
    session(&[r#"add "Dune" "Frank Herbert""#, "edit 1", "remove 1", "save"])
        .success()
        .stdout(predicates::str::contains("Book removed (1): Dune"))
        .stdout(predicates::str::contains("No edit in progress."));
}

#[test]
fn blank_add_fields_are_refused() {
    session(&[r#"add "" "Orwell""#, "stats"])
        .success()
        .stdout(predicates::str::contains("Title and author are required."))
        .stdout(predicates::str::contains("Total: 0"));
}

#[test]
fn unknown_categories_are_never_accepted() {
    session(&[r#"add "Dune" "Frank Herbert" --category poetry"#, "stats"])
        .success()
        .stdout(predicates::str::contains("Unknown category: poetry"))
        .stdout(predicates::str::contains("Total: 0"));
}

#[test]
fn unknown_commands_keep_the_session_alive() {
    session(&["frobnicate", r#"add "Dune" "Frank Herbert""#, "stats"])
        .success()
        .stderr(predicates::str::contains("unrecognized subcommand"))
        .stdout(predicates::str::contains("Total: 1"));
}

#[test]
fn unclosed_quotes_are_reported_without_ending_the_session() {
    session(&[r#"add "Dune"#, "stats"])
        .success()
        .stdout(predicates::str::contains("unclosed quote"))
        .stdout(predicates::str::contains("Total: 0"));
}

#[test]
fn version_flag_prints_and_exits() {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}
