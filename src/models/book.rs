//! Book record model

use serde::{Deserialize, Serialize};
use validator::ValidationError;

use super::enums::BookStatus;
use super::validation::{validate_author, validate_title, validate_year};

/// Catalog record as stored in the JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default)]
    pub status: BookStatus,
}

impl Book {
    /// Case-insensitive substring match on title, author and year.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.year.to_string().contains(needle)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} - {} ({}) [{}]",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

/// Add book request
#[derive(Debug, Clone, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    /// Check title, author then year, stopping at the first rejection
    pub fn check(&self, max_year: i32) -> Result<(), ValidationError> {
        validate_title(&self.title)?;
        validate_author(&self.author)?;
        validate_year(self.year, max_year)
    }

    pub(crate) fn into_book(self, id: u64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
            status: BookStatus::Available,
        }
    }
}
