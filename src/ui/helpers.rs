use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Book;

/// Numbered menu entries, in the order of their keys `1`..`7`.
pub(crate) const MENU_ITEMS: [&str; 7] = [
    "Add a book",
    "Remove a book",
    "Search books",
    "Display all books",
    "Display statistics",
    "Export to text file",
    "Exit",
];

/// The two display lines for one book in a listing:
/// `N. Title by Author (Year)` and `Genre: G | Read: ✓`.
pub(crate) fn book_lines(position: usize, book: &Book, selected: bool) -> Vec<Line<'static>> {
    let headline_style = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mark_style = if book.is_read() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };

    vec![
        Line::from(Span::styled(
            format!("{}. {}", position, book.headline()),
            headline_style,
        )),
        Line::from(vec![
            Span::styled(
                format!("   Genre: {} | Read: ", book.genre()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(book.read_mark(), mark_style),
        ]),
    ]
}

/// Footer hint built from `(key, description)` pairs.
pub(crate) fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(format!("[{key}]"), key_style));
        spans.push(Span::raw(format!(" {description}   ")));
    }
    Line::from(spans)
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}
