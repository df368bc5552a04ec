use crate::book::Book;
use colored::{Color, Colorize};
use std::io::{Result, Write};

/// Category of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "[INFO]",
            Level::Error => "[ERROR]",
        }
    }
}

/// Output sink for everything the library shows to the user.
///
/// Every line goes to the wrapped writer: stdout in the binary, an in-memory
/// buffer in tests. Coloring is decided once at construction. Each
/// notification is also mirrored as a `debug` tracing event.
pub struct Notifier {
    out: Box<dyn Write>,
    color: bool,
}

impl Notifier {
    pub fn new(out: Box<dyn Write>, color: bool) -> Self {
        Self { out, color }
    }

    /// Notifier writing to the process stdout.
    pub fn stdout(color: bool) -> Self {
        Self::new(Box::new(std::io::stdout()), color)
    }

    pub fn info(&mut self, message: &str) -> Result<()> {
        self.emit(Level::Info, Color::Green, message)
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        self.emit(Level::Error, Color::Red, message)
    }

    /// Informational line introducing a listing.
    pub fn header(&mut self, message: &str) -> Result<()> {
        self.emit(Level::Info, Color::Blue, message)
    }

    /// Informational line reporting that there is nothing to show.
    pub fn notice(&mut self, message: &str) -> Result<()> {
        self.emit(Level::Info, Color::Yellow, message)
    }

    /// One entry of a listing.
    pub fn book(&mut self, book: &Book) -> Result<()> {
        if self.color {
            writeln!(
                self.out,
                "  - {} {}, {} {}, {} {}",
                "Title:".yellow(),
                book.title(),
                "Author:".cyan(),
                book.author(),
                "Year:".green(),
                book.year()
            )?;
        } else {
            writeln!(self.out, "  - {}", book)?;
        }
        self.out.flush()
    }

    fn emit(&mut self, level: Level, color: Color, message: &str) -> Result<()> {
        tracing::debug!(?level, "{}", message);
        if self.color {
            writeln!(self.out, "{} {}", level.tag().color(color), message)?;
        } else {
            writeln!(self.out, "{} {}", level.tag(), message)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::MemWriter;

    fn plain_notifier() -> (Notifier, std::rc::Rc<std::cell::RefCell<Vec<u8>>>) {
        let (mw, rc) = MemWriter::with_handle();
        (Notifier::new(Box::new(mw), false), rc)
    }

    #[test]
    fn test_info_and_error_tags() {
        let (mut n, rc) = plain_notifier();
        n.info("all good").unwrap();
        n.error("went wrong").unwrap();

        let s = String::from_utf8(rc.borrow().clone()).unwrap();
        assert_eq!(s, "[INFO] all good\n[ERROR] went wrong\n");
    }

    #[test]
    fn test_book_line_without_color() {
        let (mut n, rc) = plain_notifier();
        n.book(&Book::new("Dune", "Herbert", 1965)).unwrap();

        let s = String::from_utf8(rc.borrow().clone()).unwrap();
        assert_eq!(s, "  - Title: Dune, Author: Herbert, Year: 1965\n");
    }
}
