use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, patron::PatronId};

/// A book to place on the shelf at start-up
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedBook {
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// ISBN
    pub isbn: String,
}

/// A patron to register at start-up
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedPatron {
    /// Display name
    pub name: String,
    /// Lookup key
    pub id: PatronId,
}

/// Initial contents of the desk
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Books in catalog order
    pub books: Vec<SeedBook>,
    /// Patrons in roster order
    pub patrons: Vec<SeedPatron>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        let book = |title: &str, author: &str, isbn: &str| SeedBook {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        };
        Self {
            books: vec![
                book("The Catcher in the Rye", "J.D. Salinger", "978-0-316-76948-0"),
                book("To Kill a Mockingbird", "Harper Lee", "978-0-06-112008-4"),
                book("1984", "George Orwell", "978-0-452-28423-4"),
            ],
            patrons: vec![
                SeedPatron { name: "John Doe".to_string(), id: PatronId(1) },
                SeedPatron { name: "Jane Smith".to_string(), id: PatronId(2) },
            ],
        }
    }
}

impl SeedConfig {
    /// A seed with no books and no patrons
    #[must_use]
    pub fn empty() -> Self {
        Self { books: Vec::new(), patrons: Vec::new() }
    }

    /// Parse a seed from JSON text. Missing sections fall back to the default seed.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the text is not a valid seed
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load a seed from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read and
    /// `ConfigError::Parse` if its contents are not a valid seed
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_json(&contents)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}
