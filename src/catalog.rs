use crate::{
    book::Book,
    error::{CirculationError, CirculationResult},
};

/// Every book instance the desk knows about, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Entries in the order they were added
    books: Vec<Book>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shelved book. Duplicate ISBNs are accepted as separate entries.
    pub fn add(&mut self, title: &str, author: &str, isbn: &str) -> Book {
        let book = Book::new(title, author, isbn);
        self.books.push(book.clone());
        book
    }

    /// Remove the first entry carrying `isbn`, whatever its availability
    ///
    /// # Errors
    ///
    /// Returns `CirculationError::NotFound` if no entry carries `isbn`
    pub fn remove(&mut self, isbn: &str) -> CirculationResult<Book> {
        let pos = self
            .books
            .iter()
            .position(|book| book.isbn == isbn)
            .ok_or_else(|| CirculationError::NotFound { isbn: isbn.into() })?;
        Ok(self.books.remove(pos))
    }

    /// First shelved entry carrying `isbn`
    #[must_use]
    pub fn find_available(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn && book.is_available)
    }

    /// First circulating entry carrying `isbn`
    #[must_use]
    pub fn find_unavailable(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn && !book.is_available)
    }

    /// Mutable access to the first shelved entry, used to flip it on issue
    pub(crate) fn find_available_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.isbn == isbn && book.is_available)
    }

    /// All entries in insertion order
    #[must_use]
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Number of entries, shelved or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests;
