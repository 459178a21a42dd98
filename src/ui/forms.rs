use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{parse_read_flag, parse_year, Book, BookError};

/// Form state for the "Add a book" modal.
#[derive(Default, Clone)]
pub(crate) struct BookForm {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) genre: String,
    pub(crate) read: String,
    pub(crate) active: BookField,
    pub(crate) error: Option<String>,
}

/// Fields of the book form in tab order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub(crate) enum BookField {
    #[default]
    Title,
    Author,
    Year,
    Genre,
    Read,
}

impl BookField {
    pub(crate) const ALL: [BookField; 5] = [
        BookField::Title,
        BookField::Author,
        BookField::Year,
        BookField::Genre,
        BookField::Read,
    ];

    /// Prompt text rendered in front of the value.
    pub(crate) fn label(self) -> &'static str {
        match self {
            BookField::Title => "Title",
            BookField::Author => "Author",
            BookField::Year => "Year",
            BookField::Genre => "Genre",
            BookField::Read => "Read? (yes/no)",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            BookField::Title => "<required>",
            BookField::Year => "<1800-2024>",
            BookField::Read => "<no>",
            BookField::Author | BookField::Genre => "<optional>",
        }
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }
}

impl BookForm {
    pub(crate) fn focus(&mut self, field: BookField) {
        self.active = field;
    }

    pub(crate) fn next_field(&mut self) {
        let next = (self.active.index() + 1) % BookField::ALL.len();
        self.active = BookField::ALL[next];
    }

    pub(crate) fn previous_field(&mut self) {
        let len = BookField::ALL.len();
        let previous = (self.active.index() + len - 1) % len;
        self.active = BookField::ALL[previous];
    }

    fn value(&self, field: BookField) -> &String {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Year => &self.year,
            BookField::Genre => &self.genre,
            BookField::Read => &self.read,
        }
    }

    fn value_mut(&mut self, field: BookField) -> &mut String {
        match field {
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Year => &mut self.year,
            BookField::Genre => &mut self.genre,
            BookField::Read => &mut self.read,
        }
    }

    /// Insert a character into the active field.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let field = self.active;
        self.value_mut(field).push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        let field = self.active;
        self.value_mut(field).pop();
    }

    /// Validate every field and build the book. On failure the focus jumps to
    /// the offending field so the user can retype it.
    pub(crate) fn submit(&mut self) -> Result<Book, BookError> {
        if self.title.trim().is_empty() {
            self.focus(BookField::Title);
            return Err(BookError::MissingTitle);
        }
        let year = match parse_year(&self.year) {
            Ok(year) => year,
            Err(err) => {
                self.focus(BookField::Year);
                return Err(err);
            }
        };
        Book::new(
            self.title.as_str(),
            self.author.as_str(),
            year,
            self.genre.as_str(),
            parse_read_flag(&self.read),
        )
    }

    /// Render one `Label: value` line, highlighting the focused field.
    pub(crate) fn build_line(&self, field: BookField) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            field.placeholder().to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Cursor column offset and row of the active field inside the modal.
    pub(crate) fn cursor_offset(&self) -> (u16, u16) {
        let field = self.active;
        let prefix = field.label().chars().count() + 2;
        let column = prefix + self.value(field).chars().count();
        (column as u16, field.index() as u16)
    }
}

/// Single-line prompt used for the remove and search actions.
#[derive(Clone, Debug)]
pub(crate) struct TextPrompt {
    pub(crate) label: &'static str,
    pub(crate) value: String,
}

impl TextPrompt {
    pub(crate) fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.value.push(ch);
        }
    }

    pub(crate) fn backspace(&mut self) {
        self.value.pop();
    }

    /// Text rendered in front of the typed value.
    pub(crate) fn prefix(&self) -> String {
        format!("{}: ", self.label)
    }

    /// Cursor column after the typed value, kept inside a line `width` wide.
    pub(crate) fn cursor_column(&self, width: u16) -> u16 {
        let column = self.prefix().chars().count() + self.value.chars().count();
        column.min(usize::from(width.saturating_sub(1))) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(title: &str, year: &str) -> BookForm {
        BookForm {
            title: title.to_string(),
            author: "Frank Herbert".to_string(),
            year: year.to_string(),
            genre: "Sci-Fi".to_string(),
            read: "Yes".to_string(),
            ..BookForm::default()
        }
    }

    #[test]
    fn tab_order_wraps_both_ways() {
        let mut form = BookForm::default();
        form.previous_field();
        assert_eq!(form.active, BookField::Read);
        form.next_field();
        assert_eq!(form.active, BookField::Title);
        form.next_field();
        form.next_field();
        assert_eq!(form.active, BookField::Year);
    }

    #[test]
    fn typing_goes_to_active_field() {
        let mut form = BookForm::default();
        form.focus(BookField::Genre);
        assert!(form.push_char('P'));
        assert!(!form.push_char('\u{7}'));
        form.push_char('x');
        form.backspace();
        assert_eq!(form.genre, "P");
        assert!(form.title.is_empty());
    }

    #[test]
    fn submit_builds_a_book() {
        let mut form = filled("Dune", "1965");
        let book = form.submit().unwrap();
        assert_eq!(book.title(), "Dune");
        assert_eq!(book.year(), 1965);
        assert!(book.is_read());
    }

    #[test]
    fn bad_year_refocuses_year_field() {
        let mut form = filled("Dune", "1799");
        assert_eq!(form.submit(), Err(BookError::YearOutOfRange(1799)));
        assert_eq!(form.active, BookField::Year);

        form.year = "soon".to_string();
        assert!(matches!(form.submit(), Err(BookError::YearNotNumeric(_))));
    }

    #[test]
    fn missing_title_refocuses_title_field() {
        let mut form = filled("  ", "1965");
        form.focus(BookField::Genre);
        assert_eq!(form.submit(), Err(BookError::MissingTitle));
        assert_eq!(form.active, BookField::Title);
    }

    #[test]
    fn cursor_tracks_active_field() {
        let mut form = filled("Dune", "1965");
        form.focus(BookField::Year);
        assert_eq!(form.cursor_offset(), ("Year: ".len() as u16 + 4, 2));
    }

    #[test]
    fn prompt_cursor_stays_inside_the_dialog() {
        let mut prompt = TextPrompt::new("Title");
        prompt.value = "Emma".to_string();
        assert_eq!(prompt.cursor_column(40), "Title: Emma".len() as u16);

        prompt.value = "x".repeat(500);
        assert_eq!(prompt.cursor_column(40), 39);
        assert_eq!(prompt.cursor_column(0), 0);
    }
}
