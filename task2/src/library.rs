use crate::book::Book;

/// Storage contract the [`LibraryManager`](crate::LibraryManager) works against.
///
/// Implementations keep books in insertion order and may hold several books
/// with the same title.
pub trait LibraryInterface {
    /// Append a book to the end of the collection.
    fn add_book(&mut self, book: Book);

    /// Remove the first book whose title matches `title` exactly.
    ///
    /// Returns `false` and leaves the collection untouched when nothing matches.
    fn remove_book(&mut self, title: &str) -> bool;

    /// Read-only view of the stored books, oldest first.
    fn books(&self) -> &[Book];

    fn len(&self) -> usize {
        self.books().len()
    }

    fn is_empty(&self) -> bool {
        self.books().is_empty()
    }
}

/// In-memory library backed by a `Vec`.
#[derive(Debug, Default, Clone)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LibraryInterface for Library {
    fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    fn remove_book(&mut self, title: &str) -> bool {
        match self.books.iter().position(|b| b.title() == title) {
            Some(idx) => {
                self.books.remove(idx);
                true
            }
            None => false,
        }
    }

    fn books(&self) -> &[Book] {
        &self.books
    }
}
