use std::mem;

use crossterm::event::KeyCode;
use log::info;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::library::Library;
use crate::storage::{export_report, LibraryFiles, LoadReport};

use super::forms::{BookField, BookForm, TextPrompt};
use super::helpers::{book_lines, centered_rect, key_hints, MENU_ITEMS};
use super::screens::{BookListScreen, StatisticsScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Width of the numbered menu on the left.
const MENU_WIDTH: u16 = 30;
/// Rows skipped by PageUp/PageDown in list views.
const PAGE_STEP: isize = 5;
const EMPTY_LIBRARY: &str = "Your library is empty!";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// What the right-hand pane currently shows.
enum Screen {
    Welcome,
    Books(BookListScreen),
    Statistics(StatisticsScreen),
}

/// Modal input states layered over the current screen.
enum Mode {
    Normal,
    AddingBook(BookForm),
    RemovingBook(TextPrompt),
    Searching(TextPrompt),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state: the session's library, the files it is
/// persisted to, and whatever the user is looking at.
pub struct App {
    library: Library,
    files: LibraryFiles,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
    farewell: Vec<String>,
}

impl App {
    /// Build the app around the outcome of the startup load so its summary is
    /// the first thing the user sees.
    pub fn new(files: LibraryFiles, loaded: LoadReport) -> Self {
        let summary = loaded.summary();
        let kind = if loaded.problems.is_empty() {
            StatusKind::Info
        } else {
            StatusKind::Error
        };
        let mut app = Self {
            library: loaded.library,
            files,
            screen: Screen::Welcome,
            mode: Mode::Normal,
            status: None,
            farewell: Vec::new(),
        };
        app.set_status(summary, kind);
        app
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Lines to print once the terminal is restored after exiting.
    pub fn farewell(&self) -> &[String] {
        &self.farewell
    }

    /// Dispatch one key press. Returns `true` once the user chose to exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_menu_key(code, &mut exit),
            Mode::AddingBook(form) => self.handle_add_book(code, form),
            Mode::RemovingBook(prompt) => self.handle_remove_prompt(code, prompt),
            Mode::Searching(prompt) => self.handle_search_prompt(code, prompt),
        };

        exit
    }

    /// Ctrl+C from anywhere: drop any open dialog and take the exit path.
    pub(crate) fn handle_ctrl_c(&mut self) {
        self.mode = Mode::Normal;
        self.save_before_exit();
    }

    fn handle_menu_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Char('1') => {
                self.clear_status();
                return Mode::AddingBook(BookForm::default());
            }
            KeyCode::Char('2') => {
                if !self.refuse_if_empty() {
                    self.clear_status();
                    return Mode::RemovingBook(TextPrompt::new("Title"));
                }
            }
            KeyCode::Char('3') => {
                if !self.refuse_if_empty() {
                    self.clear_status();
                    return Mode::Searching(TextPrompt::new("Title or author"));
                }
            }
            KeyCode::Char('4') => {
                if !self.refuse_if_empty() {
                    self.clear_status();
                    self.screen = Screen::Books(BookListScreen::all(&self.library));
                }
            }
            KeyCode::Char('5') => {
                if !self.refuse_if_empty() {
                    self.clear_status();
                    self.screen = Screen::Statistics(StatisticsScreen::new(&self.library));
                }
            }
            KeyCode::Char('6') => self.export(),
            KeyCode::Char('7') => {
                self.save_before_exit();
                *exit = true;
            }
            KeyCode::Up => self.scroll(-1),
            KeyCode::Down => self.scroll(1),
            KeyCode::PageUp => self.scroll(-PAGE_STEP),
            KeyCode::PageDown => self.scroll(PAGE_STEP),
            KeyCode::Home => {
                if let Screen::Books(list) = &mut self.screen {
                    list.select_first();
                }
            }
            KeyCode::End => {
                if let Screen::Books(list) = &mut self.screen {
                    list.select_last();
                }
            }
            _ => self.set_status(INVALID_CHOICE, StatusKind::Error),
        }
        Mode::Normal
    }

    fn handle_add_book(&mut self, code: KeyCode, mut form: BookForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Add book cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.submit() {
                Ok(book) => {
                    let message = format!("Successfully added '{}' to your library!", book.title());
                    self.library.add(book);
                    self.persist(message);
                    return Mode::Normal;
                }
                Err(err) => {
                    let message = err.to_string();
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::AddingBook(form)
    }

    fn handle_remove_prompt(&mut self, code: KeyCode, mut prompt: TextPrompt) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Remove cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Enter => {
                let title = prompt.value.trim().to_string();
                match self.library.remove_by_title(&title) {
                    Some(book) => self.persist(format!(
                        "Successfully removed '{}' from your library!",
                        book.title()
                    )),
                    None => self.set_status(
                        format!("Book with title '{title}' not found in your library."),
                        StatusKind::Error,
                    ),
                }
                return Mode::Normal;
            }
            KeyCode::Backspace => prompt.backspace(),
            KeyCode::Char(ch) => prompt.push_char(ch),
            _ => {}
        }
        Mode::RemovingBook(prompt)
    }

    fn handle_search_prompt(&mut self, code: KeyCode, mut prompt: TextPrompt) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Search cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Enter => {
                let term = prompt.value.trim().to_string();
                let results = BookListScreen::search(&self.library, &term);
                if results.books.is_empty() {
                    self.set_status(
                        format!("No books found matching '{term}'"),
                        StatusKind::Error,
                    );
                } else {
                    self.set_status(
                        format!("Found {} matching '{term}'.", plural_books(results.books.len())),
                        StatusKind::Info,
                    );
                    self.screen = Screen::Books(results);
                }
                return Mode::Normal;
            }
            KeyCode::Backspace => prompt.backspace(),
            KeyCode::Char(ch) => prompt.push_char(ch),
            _ => {}
        }
        Mode::Searching(prompt)
    }

    /// Write the library to disk after a mutation and report the outcome.
    fn persist(&mut self, success: String) {
        let report = self.files.save(&self.library);
        self.refresh_screen();
        if report.is_clean() {
            self.set_status(success, StatusKind::Info);
        } else {
            self.set_status(format!("{success} {}", report.summary()), StatusKind::Error);
        }
    }

    fn export(&mut self) {
        let path = self.files.paths().export.clone();
        match export_report(&self.library, &path) {
            Ok(()) => self.set_status(
                format!("Library exported to {}", path.display()),
                StatusKind::Info,
            ),
            Err(err) => self.set_status(
                format!("Error exporting library to text file: {err}"),
                StatusKind::Error,
            ),
        }
    }

    fn save_before_exit(&mut self) {
        info!("saving library before exit");
        let report = self.files.save(&self.library);
        self.farewell = vec![
            "Saving library before exit...".to_string(),
            report.summary(),
            "Thank you for using Personal Library Manager!".to_string(),
        ];
    }

    fn refuse_if_empty(&mut self) -> bool {
        if self.library.is_empty() {
            self.set_status(EMPTY_LIBRARY, StatusKind::Error);
            true
        } else {
            false
        }
    }

    fn refresh_screen(&mut self) {
        match &mut self.screen {
            Screen::Books(list) => list.refresh(&self.library),
            Screen::Statistics(stats) => *stats = StatisticsScreen::new(&self.library),
            Screen::Welcome => {}
        }
    }

    fn scroll(&mut self, offset: isize) {
        if let Screen::Books(list) = &mut self.screen {
            list.move_selection(offset);
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(0)])
            .split(content_area);

        self.draw_menu(frame, panes[0]);
        match &self.screen {
            Screen::Welcome => self.draw_welcome(frame, panes[1]),
            Screen::Books(list) => self.draw_book_list(frame, panes[1], list),
            Screen::Statistics(stats) => self.draw_statistics(frame, panes[1], stats),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingBook(form) => self.draw_book_form(frame, area, form),
            Mode::RemovingBook(prompt) => self.draw_prompt(frame, area, "Remove Book", prompt),
            Mode::Searching(prompt) => self.draw_prompt(frame, area, "Search Books", prompt),
            Mode::Normal => {}
        }
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let items: Vec<ListItem> = MENU_ITEMS
            .iter()
            .enumerate()
            .map(|(index, label)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}. ", index + 1), key_style),
                    Span::raw(*label),
                ]))
            })
            .collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Personal Library Manager");
        frame.render_widget(List::new(items).block(block), area);
    }

    fn draw_welcome(&self, frame: &mut Frame, area: Rect) {
        let count = self.library.len();
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Welcome to your personal library",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("{} in your collection.", plural_books(count))),
            Line::from("Press a number from the menu to continue."),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_book_list(&self, frame: &mut Frame, area: Rect, list: &BookListScreen) {
        let block = Block::default().borders(Borders::ALL).title(list.title());

        if list.books.is_empty() {
            let message = Paragraph::new("No books to show.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let items: Vec<ListItem> = list
            .books
            .iter()
            .enumerate()
            .map(|(index, book)| ListItem::new(book_lines(index + 1, book, index == list.selected)))
            .collect();
        let widget = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow));
        let mut state = ListState::default().with_selected(Some(list.selected));
        frame.render_stateful_widget(widget, area, &mut state);
    }

    fn draw_statistics(&self, frame: &mut Frame, area: Rect, stats: &StatisticsScreen) {
        let lines: Vec<Line> = stats.lines().into_iter().map(Line::from).collect();
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Library Statistics"),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = match &self.mode {
            Mode::Normal => key_hints(&[
                ("1-7", "Choose"),
                ("↑↓", "Scroll"),
                ("Ctrl+C", "Save & Quit"),
            ]),
            Mode::AddingBook(_) => key_hints(&[
                ("Tab", "Next Field"),
                ("Enter", "Save"),
                ("Esc", "Cancel"),
            ]),
            Mode::RemovingBook(_) | Mode::Searching(_) => {
                key_hints(&[("Enter", "Confirm"), ("Esc", "Cancel")])
            }
        };

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_book_form(&self, frame: &mut Frame, area: Rect, form: &BookForm) {
        let popup_area = centered_rect(70, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Add New Book").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines: Vec<Line> = BookField::ALL
            .iter()
            .map(|field| form.build_line(*field))
            .collect();
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (column, row) = form.cursor_offset();
        frame.set_cursor_position((inner.x + column, inner.y + row));
    }

    fn draw_prompt(&self, frame: &mut Frame, area: Rect, title: &str, prompt: &TextPrompt) {
        let popup_area = centered_rect(60, 20, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title(title.to_string());
        let prefix = prompt.prefix();
        let paragraph = Paragraph::new(Span::raw(format!("{prefix}{}", prompt.value)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        frame.set_cursor_position((inner.x + prompt.cursor_column(inner.width), inner.y));
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

fn plural_books(count: usize) -> String {
    if count == 1 {
        "1 book".to_string()
    } else {
        format!("{count} books")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;
    use crate::storage::{LibraryPaths, LoadSource};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::fs;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> App {
        let files = LibraryFiles::new(LibraryPaths::in_dir(dir.path()));
        let loaded = files.load();
        App::new(files, loaded)
    }

    fn seeded(dir: &TempDir) -> App {
        let files = LibraryFiles::new(LibraryPaths::in_dir(dir.path()));
        let library = Library::from_books(vec![
            Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", true).unwrap(),
            Book::new("Emma", "Jane Austen", 1815, "Romance", false).unwrap(),
            Book::new("Dune", "Someone Else", 2001, "Parody", false).unwrap(),
        ]);
        assert!(files.save(&library).is_saved());
        open(dir)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch));
        }
    }

    fn status(app: &App) -> &str {
        app.status.as_ref().map(|s| s.text.as_str()).unwrap_or("")
    }

    fn reload(dir: &TempDir) -> Library {
        LibraryFiles::new(LibraryPaths::in_dir(dir.path())).load().library
    }

    #[test]
    fn startup_reports_load_outcome() {
        let dir = TempDir::new().unwrap();
        let app = open(&dir);
        assert_eq!(status(&app), "Starting with an empty library");

        let dir = TempDir::new().unwrap();
        let app = seeded(&dir);
        assert_eq!(status(&app), "Library loaded successfully. Total books loaded: 3");
    }

    #[test]
    fn unknown_menu_input_reprompts() {
        let dir = TempDir::new().unwrap();
        let mut app = open(&dir);
        assert!(!app.handle_key(KeyCode::Char('9')));
        assert_eq!(status(&app), INVALID_CHOICE);
        assert!(!app.handle_key(KeyCode::Enter));
        assert!(matches!(app.mode, Mode::Normal));
    }

    #[test]
    fn add_book_reprompts_on_bad_year_then_saves() {
        let dir = TempDir::new().unwrap();
        let mut app = open(&dir);

        app.handle_key(KeyCode::Char('1'));
        type_text(&mut app, "Dune");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "Frank Herbert");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "2025");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "Sci-Fi");
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "yes");
        app.handle_key(KeyCode::Enter);

        assert!(matches!(app.mode, Mode::AddingBook(_)));
        assert_eq!(status(&app), "Please enter a valid year between 1800 and 2024.");
        assert!(app.library().is_empty());

        for _ in 0..4 {
            app.handle_key(KeyCode::Backspace);
        }
        type_text(&mut app, "1965");
        app.handle_key(KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(status(&app), "Successfully added 'Dune' to your library!");
        let saved = reload(&dir);
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.books()[0].headline(), "Dune by Frank Herbert (1965)");
        assert!(saved.books()[0].is_read());
    }

    #[test]
    fn add_book_can_be_cancelled() {
        let dir = TempDir::new().unwrap();
        let mut app = open(&dir);
        app.handle_key(KeyCode::Char('1'));
        type_text(&mut app, "Draft");
        app.handle_key(KeyCode::Esc);
        assert!(matches!(app.mode, Mode::Normal));
        assert!(app.library().is_empty());
        assert!(!dir.path().join("library.json").exists());
    }

    #[test]
    fn actions_on_empty_library_are_refused() {
        let dir = TempDir::new().unwrap();
        let mut app = open(&dir);
        for key in ['2', '3', '4', '5'] {
            app.handle_key(KeyCode::Char(key));
            assert!(matches!(app.mode, Mode::Normal));
            assert_eq!(status(&app), EMPTY_LIBRARY);
        }
    }

    #[test]
    fn remove_takes_first_match_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut app = seeded(&dir);

        app.handle_key(KeyCode::Char('2'));
        type_text(&mut app, "dune");
        app.handle_key(KeyCode::Enter);

        assert_eq!(status(&app), "Successfully removed 'Dune' from your library!");
        let saved = reload(&dir);
        assert_eq!(saved.len(), 2);
        assert_eq!(saved.books()[1].author(), "Someone Else");
    }

    #[test]
    fn remove_missing_title_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let mut app = seeded(&dir);

        app.handle_key(KeyCode::Char('2'));
        type_text(&mut app, "Ulysses");
        app.handle_key(KeyCode::Enter);

        assert_eq!(
            status(&app),
            "Book with title 'Ulysses' not found in your library."
        );
        assert_eq!(app.library().len(), 3);
        // Nothing changed, so no save happened and no backup exists.
        assert!(!dir.path().join("library_backup.json").exists());
    }

    #[test]
    fn search_shows_matches() {
        let dir = TempDir::new().unwrap();
        let mut app = seeded(&dir);

        app.handle_key(KeyCode::Char('3'));
        type_text(&mut app, "HERB");
        app.handle_key(KeyCode::Enter);

        match &app.screen {
            Screen::Books(list) => {
                assert_eq!(list.books.len(), 1);
                assert_eq!(list.books[0].author(), "Frank Herbert");
            }
            _ => panic!("expected search results"),
        }
        assert_eq!(status(&app), "Found 1 book matching 'HERB'.");

        app.handle_key(KeyCode::Char('3'));
        type_text(&mut app, "tolstoy");
        app.handle_key(KeyCode::Enter);
        assert_eq!(status(&app), "No books found matching 'tolstoy'");
    }

    #[test]
    fn list_view_follows_removals() {
        let dir = TempDir::new().unwrap();
        let mut app = seeded(&dir);
        app.handle_key(KeyCode::Char('4'));
        app.handle_key(KeyCode::End);

        app.handle_key(KeyCode::Char('2'));
        type_text(&mut app, "Emma");
        app.handle_key(KeyCode::Enter);

        match &app.screen {
            Screen::Books(list) => {
                assert_eq!(list.books.len(), 2);
                assert_eq!(list.selected, 1);
            }
            _ => panic!("expected the library list"),
        }
    }

    #[test]
    fn statistics_screen_reflects_library() {
        let dir = TempDir::new().unwrap();
        let mut app = seeded(&dir);
        app.handle_key(KeyCode::Char('5'));
        match &app.screen {
            Screen::Statistics(stats) => {
                assert_eq!(stats.stats.total, 3);
                assert_eq!(stats.stats.percentage_read_label(), "33.3");
            }
            _ => panic!("expected statistics"),
        }
    }

    #[test]
    fn export_writes_report() {
        let dir = TempDir::new().unwrap();
        let mut app = seeded(&dir);
        app.handle_key(KeyCode::Char('6'));
        let report = fs::read_to_string(dir.path().join("library_export.txt")).unwrap();
        assert!(report.contains("Total Books: 3"));
        assert!(status(&app).starts_with("Library exported to"));
    }

    #[test]
    fn exit_forces_a_final_save() {
        let dir = TempDir::new().unwrap();
        let mut app = seeded(&dir);
        assert!(app.handle_key(KeyCode::Char('7')));
        assert_eq!(
            app.farewell(),
            [
                "Saving library before exit...",
                "Library successfully saved to library.json",
                "Thank you for using Personal Library Manager!",
            ]
        );
        // The final save snapshots the previous primary into the backup.
        let files = LibraryFiles::new(LibraryPaths::in_dir(dir.path()));
        fs::remove_file(&files.paths().primary).unwrap();
        let fallback = files.load();
        assert_eq!(fallback.source, LoadSource::Backup);
        assert_eq!(fallback.library.len(), 3);
    }

    #[test]
    fn ctrl_c_closes_dialogs_and_saves() {
        let dir = TempDir::new().unwrap();
        let mut app = seeded(&dir);
        app.handle_key(KeyCode::Char('1'));
        app.handle_ctrl_c();
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.farewell().len(), 3);
    }

    #[test]
    fn draws_menu_and_listing() {
        let dir = TempDir::new().unwrap();
        let mut app = seeded(&dir);
        app.handle_key(KeyCode::Char('4'));

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(screen.contains("1. Add a book"));
        assert!(screen.contains("7. Exit"));
        assert!(screen.contains("Dune by Frank Herbert (1965)"));
        assert!(screen.contains("Genre: Romance | Read: ✗"));
    }
}
