use crate::book::Book;
use crate::library::LibraryInterface;
use crate::notify::Notifier;
use std::io::Result;

/// Façade over a [`LibraryInterface`] that reports every operation to the user.
pub struct LibraryManager {
    library: Box<dyn LibraryInterface>,
    notifier: Notifier,
}

impl LibraryManager {
    pub fn new(library: Box<dyn LibraryInterface>, notifier: Notifier) -> Self {
        Self { library, notifier }
    }

    pub fn add_book(&mut self, title: &str, author: &str, year: i64) -> Result<()> {
        self.library.add_book(Book::new(title, author, year));
        tracing::info!(title, author, year, "book added");
        self.notifier.info(&format!("Book '{}' added successfully!", title))
    }

    /// Remove the first book titled `title`, returning whether one was found.
    pub fn remove_book(&mut self, title: &str) -> Result<bool> {
        if self.library.remove_book(title) {
            tracing::info!(title, "book removed");
            self.notifier.info(&format!("Book '{}' removed successfully!", title))?;
            Ok(true)
        } else {
            tracing::debug!(title, "book not found");
            self.notifier.error(&format!("Book '{}' not found.", title))?;
            Ok(false)
        }
    }

    pub fn show_books(&mut self) -> Result<()> {
        let books = self.library.books();
        if books.is_empty() {
            return self.notifier.notice("No books in the library.");
        }
        self.notifier.header("Books in the library:")?;
        for book in books {
            self.notifier.book(book)?;
        }
        Ok(())
    }

    pub fn library(&self) -> &dyn LibraryInterface {
        &*self.library
    }

    pub fn notifier(&mut self) -> &mut Notifier {
        &mut self.notifier
    }
}
