//! The in-memory record store. `Library` is a thin ordered wrapper around a
//! `Vec<Book>`: insertion order is display order, duplicate titles are allowed,
//! and every lookup is a linear scan because the collection stays small.

use serde::{Deserialize, Serialize};

use crate::models::Book;

/// Ordered collection of books owned by the running session.
///
/// Serializes as a bare JSON array so the on-disk store is just the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a book at the end of the collection.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Remove the first book whose title equals `title`, ignoring case and
    /// surrounding whitespace. Later duplicates are left in place.
    pub fn remove_by_title(&mut self, title: &str) -> Option<Book> {
        let index = self.books.iter().position(|book| book.title_matches(title))?;
        Some(self.books.remove(index))
    }

    /// Every book whose title or author contains `term`, ignoring case, in
    /// collection order.
    pub fn search(&self, term: &str) -> Vec<&Book> {
        let needle = term.trim().to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                book.title().to_lowercase().contains(&needle)
                    || book.author().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Aggregate counts for the statistics view.
    pub fn statistics(&self) -> LibraryStats {
        let mut genres: Vec<GenreCount> = Vec::new();
        for book in &self.books {
            match genres.iter_mut().find(|entry| entry.genre == book.genre()) {
                Some(entry) => entry.count += 1,
                None => genres.push(GenreCount {
                    genre: book.genre().to_string(),
                    count: 1,
                }),
            }
        }

        LibraryStats {
            total: self.books.len(),
            read: self.books.iter().filter(|book| book.is_read()).count(),
            genres,
        }
    }
}

/// Number of books sharing one genre value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Snapshot of the collection totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    /// Per-genre counts in the order each genre first appears.
    pub genres: Vec<GenreCount>,
}

impl LibraryStats {
    /// Share of read books as a percentage; zero for an empty collection.
    pub fn percentage_read(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.read as f64 / self.total as f64 * 100.0
        }
    }

    /// Percentage rounded to one decimal, e.g. `66.7`.
    pub fn percentage_read_label(&self) -> String {
        format!("{:.1}", self.percentage_read())
    }
}
