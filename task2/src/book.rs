use std::fmt;

/// A single bibliographic entry stored in the library.
///
/// Fields are private and only exposed through accessors, so a `Book` never
/// changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    year: i64,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i64 {
        self.year
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}",
            self.title, self.author, self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_all_fields() {
        let book = Book::new("Dune", "Herbert", 1965);
        assert_eq!(book.to_string(), "Title: Dune, Author: Herbert, Year: 1965");
    }
}
