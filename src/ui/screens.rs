use crate::library::{Library, LibraryStats};
use crate::models::Book;

/// Which slice of the library a list screen shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ListKind {
    All,
    Search(String),
}

/// Scrollable list of books, either the whole library or search hits.
pub(crate) struct BookListScreen {
    pub(crate) kind: ListKind,
    pub(crate) books: Vec<Book>,
    pub(crate) selected: usize,
}

impl BookListScreen {
    pub(crate) fn all(library: &Library) -> Self {
        Self {
            kind: ListKind::All,
            books: library.books().to_vec(),
            selected: 0,
        }
    }

    pub(crate) fn search(library: &Library, term: &str) -> Self {
        Self {
            kind: ListKind::Search(term.to_string()),
            books: library.search(term).into_iter().cloned().collect(),
            selected: 0,
        }
    }

    pub(crate) fn title(&self) -> String {
        match &self.kind {
            ListKind::All => "Your Library".to_string(),
            ListKind::Search(term) => format!("Found books for '{term}'"),
        }
    }

    /// Re-run the query against the current library, keeping the selection
    /// in range.
    pub(crate) fn refresh(&mut self, library: &Library) {
        self.books = match &self.kind {
            ListKind::All => library.books().to_vec(),
            ListKind::Search(term) => library.search(term).into_iter().cloned().collect(),
        };
        self.ensure_in_bounds();
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.books.is_empty() {
            return;
        }
        let len = self.books.len() as isize;
        let new = (self.selected as isize + offset).clamp(0, len - 1);
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.books.len().saturating_sub(1);
    }

    fn ensure_in_bounds(&mut self) {
        if self.selected >= self.books.len() {
            self.selected = self.books.len().saturating_sub(1);
        }
    }
}

/// Statistics view; recomputed whenever the library changes.
pub(crate) struct StatisticsScreen {
    pub(crate) stats: LibraryStats,
}

impl StatisticsScreen {
    pub(crate) fn new(library: &Library) -> Self {
        Self {
            stats: library.statistics(),
        }
    }

    /// Plain-text lines rendered by the statistics pane.
    pub(crate) fn lines(&self) -> Vec<String> {
        let stats = &self.stats;
        let mut lines = vec![
            format!("Total books: {}", stats.total),
            format!("Books read: {}", stats.read),
            format!("Percentage read: {}%", stats.percentage_read_label()),
            String::new(),
            "Books by genre:".to_string(),
        ];
        lines.extend(
            stats
                .genres
                .iter()
                .map(|entry| format!("{}: {}", entry.genre, entry.count)),
        );
        lines
    }
}
