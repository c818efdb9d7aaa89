use crate::patron::{Patron, PatronId};

/// Registered patrons and their loan counts
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Patrons in registration order
    patrons: Vec<Patron>,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a patron with no loans. IDs are not checked for uniqueness.
    pub fn add(&mut self, name: &str, id: PatronId) -> Patron {
        let patron = Patron::new(name, id);
        self.patrons.push(patron.clone());
        patron
    }

    /// First patron with this id
    #[must_use]
    pub fn find(&self, id: PatronId) -> Option<&Patron> {
        self.patrons.iter().find(|patron| patron.id == id)
    }

    /// Count one more loan against the first matching patron.
    ///
    /// Returns whether a patron was found; an unknown id changes nothing.
    pub fn increment_borrowed(&mut self, id: PatronId) -> bool {
        match self.patrons.iter_mut().find(|patron| patron.id == id) {
            Some(patron) => {
                patron.books_borrowed = patron.books_borrowed.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Take one loan off the first matching patron that has any.
    ///
    /// Returns `false` when no such patron exists, including when the patron
    /// exists with a count of zero.
    pub fn decrement_borrowed(&mut self, id: PatronId) -> bool {
        match self.patrons.iter_mut().find(|patron| patron.id == id && patron.books_borrowed > 0) {
            Some(patron) => {
                patron.books_borrowed = patron.books_borrowed.saturating_sub(1);
                true
            }
            None => false,
        }
    }

    /// All patrons in registration order
    #[must_use]
    pub fn list(&self) -> &[Patron] {
        &self.patrons
    }

    /// Number of registered patrons
    #[must_use]
    pub fn len(&self) -> usize {
        self.patrons.len()
    }

    /// Whether no patron is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patrons.is_empty()
    }
}

#[cfg(test)]
mod tests;
