use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of a book record. Minted by the catalog's counter, strictly
/// increasing, never reused even after the record is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookId(pub u64);

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Mystery,
    Biography,
    History,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Fiction,
        Category::NonFiction,
        Category::SciFi,
        Category::Mystery,
        Category::Biography,
        Category::History,
        Category::Technology,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
            Category::SciFi => "Sci-Fi",
            Category::Mystery => "Mystery",
            Category::Biography => "Biography",
            Category::History => "History",
            Category::Technology => "Technology",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "Sci-Fi", "sci fi" and "scifi" all name the same category
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "fiction" => Ok(Category::Fiction),
            "nonfiction" => Ok(Category::NonFiction),
            "scifi" => Ok(Category::SciFi),
            "mystery" => Ok(Category::Mystery),
            "biography" => Ok(Category::Biography),
            "history" => Ok(Category::History),
            "technology" => Ok(Category::Technology),
            _ => {
                let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
                Err(format!(
                    "Unknown category: {} (expected one of {})",
                    s,
                    labels.join(", ")
                ))
            }
        }
    }
}

/// Lending state. The due date lives inside `Borrowed`, so a record can
/// never be borrowed without one or available with one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed { due: DateTime<Utc> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: Category,
    pub status: BookStatus,
}

impl Book {
    pub fn new(id: BookId, title: String, author: String, category: Category) -> Self {
        Self {
            id,
            title,
            author,
            category,
            status: BookStatus::Available,
        }
    }

    pub fn is_borrowed(&self) -> bool {
        matches!(self.status, BookStatus::Borrowed { .. })
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        match self.status {
            BookStatus::Available => None,
            BookStatus::Borrowed { due } => Some(due),
        }
    }
}

/// Calendar label used wherever a due date is shown, e.g. "Sep 8, 2026".
pub fn format_due(due: DateTime<Utc>) -> String {
    due.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn category_labels_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.label().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn category_parsing_is_forgiving() {
        assert_eq!("sci-fi".parse::<Category>().unwrap(), Category::SciFi);
        assert_eq!("SCI-FI".parse::<Category>().unwrap(), Category::SciFi);
        assert_eq!("scifi".parse::<Category>().unwrap(), Category::SciFi);
        assert_eq!("non fiction".parse::<Category>().unwrap(), Category::NonFiction);
    }

    #[test]
    fn unknown_category_lists_the_valid_set() {
        let err = "poetry".parse::<Category>().unwrap_err();
        assert!(err.contains("poetry"));
        assert!(err.contains("Non-Fiction"));
    }

    #[test]
    fn default_category_is_fiction() {
        assert_eq!(Category::default(), Category::Fiction);
    }

    #[test]
    fn new_book_starts_available() {
        let book = Book::new(
            BookId(1),
            "Dune".into(),
            "Frank Herbert".into(),
            Category::SciFi,
        );
        assert!(!book.is_borrowed());
        assert_eq!(book.due_date(), None);
    }

    #[test]
    fn book_json_shape_is_stable() {
        let book = Book::new(
            BookId(7),
            "Dune".into(),
            "Frank Herbert".into(),
            Category::SciFi,
        );
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["category"], "Sci-Fi");
        assert_eq!(json["status"], "Available");

        let back: Book = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, book.id);
        assert!(!back.is_borrowed());
    }

    #[test]
    fn borrowed_status_carries_due_date_in_json() {
        let mut book = Book::new(
            BookId(1),
            "Dune".into(),
            "Frank Herbert".into(),
            Category::SciFi,
        );
        let due = Utc::now() + Duration::days(14);
        book.status = BookStatus::Borrowed { due };

        let json = serde_json::to_value(&book).unwrap();
        assert!(json["status"]["Borrowed"]["due"].is_string());

        let back: Book = serde_json::from_value(json).unwrap();
        assert_eq!(back.due_date(), Some(due));
    }
}
