//! Domain model for a single book in the collection plus the pure input
//! validators used by the add-book form. Records are deserialized through a
//! validating conversion so a hand-edited file with a blank title or an
//! impossible year is rejected at load time instead of leaking into the UI.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Earliest publication year accepted for a book.
pub const MIN_YEAR: i32 = 1800;
/// Latest publication year accepted for a book.
pub const MAX_YEAR: i32 = 2024;

/// Validation failures raised while turning user input (or stored records)
/// into a [`Book`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("Please enter a valid number for the year.")]
    YearNotNumeric(String),
    #[error("Please enter a valid year between 1800 and 2024.")]
    YearOutOfRange(i64),
    #[error("Book title is required.")]
    MissingTitle,
}

/// One entry of the personal library.
///
/// The field order here is the field order of the JSON store, so keep it
/// stable. Fields are private: [`Book::new`] and deserialization are the only
/// ways to build one, so every `Book` in memory would pass a reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredBook")]
pub struct Book {
    /// Title used both for display and as the identity for removal.
    title: String,
    author: String,
    /// Publication year, always inside `MIN_YEAR..=MAX_YEAR`.
    year: i32,
    genre: String,
    /// Whether the owner has finished the book.
    read: bool,
}

/// Unchecked shape of a record as it sits on disk.
#[derive(Deserialize)]
struct StoredBook {
    title: String,
    author: String,
    year: i64,
    genre: String,
    read: bool,
}

impl TryFrom<StoredBook> for Book {
    type Error = BookError;

    fn try_from(raw: StoredBook) -> Result<Self, Self::Error> {
        let year = check_year(raw.year)?;
        Book::new(raw.title, raw.author, year, raw.genre, raw.read)
    }
}

impl Book {
    /// Build a book from loosely formatted input. Text fields are trimmed; the
    /// title must not be empty and the year must sit inside the accepted range.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        read: bool,
    ) -> Result<Self, BookError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(BookError::MissingTitle);
        }
        let year = check_year(i64::from(year))?;
        Ok(Self {
            title,
            author: author.into().trim().to_string(),
            year,
            genre: genre.into().trim().to_string(),
            read,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Whether the owner has finished the book.
    pub fn is_read(&self) -> bool {
        self.read
    }

    /// `Title by Author (Year)`, the headline used by every listing.
    pub fn headline(&self) -> String {
        format!("{} by {} ({})", self.title, self.author, self.year)
    }

    /// Check mark or cross shown next to the genre in listings.
    pub fn read_mark(&self) -> &'static str {
        if self.read {
            "✓"
        } else {
            "✗"
        }
    }

    /// `Yes`/`No` wording used by the export report.
    pub fn read_label(&self) -> &'static str {
        if self.read {
            "Yes"
        } else {
            "No"
        }
    }

    /// Case-insensitive comparison against a title typed by the user.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.trim().to_lowercase()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Parse a publication year typed by the user.
pub fn parse_year(text: &str) -> Result<i32, BookError> {
    let trimmed = text.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| BookError::YearNotNumeric(trimmed.to_string()))?;
    check_year(value)
}

/// Interpret the answer to "Have you read this book?". Only `yes` counts.
pub fn parse_read_flag(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("yes")
}

fn check_year(value: i64) -> Result<i32, BookError> {
    if (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&value) {
        // In range, so the narrowing cannot truncate.
        Ok(value as i32)
    } else {
        Err(BookError::YearOutOfRange(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn year_boundaries_are_inclusive() {
        assert_eq!(parse_year("1800"), Ok(1800));
        assert_eq!(parse_year("2024"), Ok(2024));
        assert_eq!(parse_year("1799"), Err(BookError::YearOutOfRange(1799)));
        assert_eq!(parse_year("2025"), Err(BookError::YearOutOfRange(2025)));
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        assert_eq!(
            parse_year(" nineteen "),
            Err(BookError::YearNotNumeric("nineteen".to_string()))
        );
        assert!(matches!(parse_year(""), Err(BookError::YearNotNumeric(_))));
        assert!(matches!(parse_year("19.5"), Err(BookError::YearNotNumeric(_))));
    }

    #[test]
    fn year_input_is_trimmed() {
        assert_eq!(parse_year("  1965\t"), Ok(1965));
    }

    #[test]
    fn read_flag_only_accepts_yes() {
        assert!(parse_read_flag("yes"));
        assert!(parse_read_flag(" YES "));
        assert!(!parse_read_flag("y"));
        assert!(!parse_read_flag("no"));
        assert!(!parse_read_flag(""));
    }

    #[test]
    fn new_book_trims_fields_and_requires_title() {
        let book = Book::new("  Dune ", " Frank Herbert", 1965, "Sci-Fi ", true).unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.genre, "Sci-Fi");

        assert_eq!(
            Book::new("   ", "Nobody", 1965, "", false),
            Err(BookError::MissingTitle)
        );
        assert_eq!(
            Book::new("Old", "Nobody", 1700, "", false),
            Err(BookError::YearOutOfRange(1700))
        );
    }

    #[test]
    fn stored_record_with_bad_year_fails_to_deserialize() {
        let json = r#"{"title":"X","author":"Y","year":1500,"genre":"Z","read":false}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn stored_record_missing_field_fails_to_deserialize() {
        let json = r#"{"title":"X","author":"Y","year":1900,"genre":"Z"}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn listing_helpers() {
        let book = Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", false).unwrap();
        assert_eq!(book.headline(), "Dune by Frank Herbert (1965)");
        assert_eq!(book.read_mark(), "✗");
        assert_eq!(book.read_label(), "No");
        assert!(book.title_matches("  dUNE "));
        assert!(!book.title_matches("Dun"));
    }

    proptest! {
        #[test]
        fn every_constructible_book_survives_a_reload(
            title in "\\PC{0,12}",
            author in "\\PC{0,12}",
            year in -5000i32..5000,
            read in any::<bool>(),
        ) {
            match Book::new(title, author, year, "Genre", read) {
                Ok(book) => {
                    let json = serde_json::to_string(&book).unwrap();
                    prop_assert_eq!(serde_json::from_str::<Book>(&json).unwrap(), book);
                }
                Err(err) => prop_assert!(matches!(
                    err,
                    BookError::MissingTitle | BookError::YearOutOfRange(_)
                )),
            }
        }

        #[test]
        fn parse_year_accepts_exactly_the_range(value in -5000i64..5000) {
            let parsed = parse_year(&value.to_string());
            if (1800..=2024).contains(&value) {
                prop_assert_eq!(parsed, Ok(value as i32));
            } else {
                prop_assert_eq!(parsed, Err(BookError::YearOutOfRange(value)));
            }
        }
    }
}
