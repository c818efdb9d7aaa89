use std::fmt;

use serde::{Deserialize, Serialize};

/// ISBN of a catalog entry, kept as the raw string the desk was given
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    /// Wrap a raw ISBN string
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Isbn {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Isbn {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl PartialEq<str> for Isbn {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Isbn {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Where a book instance currently sits, derived from its availability flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ShelfState {
    /// On the shelf and can be issued
    #[default]
    Shelved,
    /// Issued and not yet back on the shelf
    Circulating,
}

impl ShelfState {
    /// Short label for tables
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Shelved => "shelved",
            Self::Circulating => "out",
        }
    }
}

/// A catalog entry.
///
/// Ledger records hold clones of this value, so flipping `is_available` on a
/// record never reaches the catalog's own copy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    /// Title as entered
    pub title: String,
    /// Author as entered
    pub author: String,
    /// Lookup key; not guaranteed unique
    pub isbn: Isbn,
    /// Whether this instance is on the shelf
    pub is_available: bool,
}

impl Book {
    /// Create a book that starts on the shelf
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<Isbn>) -> Self {
        Self { title: title.into(), author: author.into(), isbn: isbn.into(), is_available: true }
    }

    /// Shelf state implied by the availability flag
    #[must_use]
    pub fn shelf_state(&self) -> ShelfState {
        if self.is_available { ShelfState::Shelved } else { ShelfState::Circulating }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} [{}]", self.title, self.author, self.isbn)
    }
}
