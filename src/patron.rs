use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier a patron is looked up by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PatronId(pub u32);

impl fmt::Display for PatronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PatronId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// A registered borrower
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Patron {
    /// Display name
    pub name: String,
    /// Lookup key
    pub id: PatronId,
    /// Loans currently counted against this patron
    #[serde(default)]
    pub books_borrowed: u32,
}

impl Patron {
    /// Create a patron with no loans
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<PatronId>) -> Self {
        Self { name: name.into(), id: id.into(), books_borrowed: 0 }
    }
}
