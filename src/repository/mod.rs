//! Repository layer for catalog persistence

pub mod books;

use crate::{error::AppResult, models::Book};

pub use books::JsonBookStore;

/// Load/save boundary for the whole book collection
#[cfg_attr(test, mockall::automock)]
pub trait BookStore {
    /// Read every record. A missing or unreadable source yields an empty list.
    fn load(&self) -> Vec<Book>;

    /// Replace the stored collection with `books`
    fn save(&self, books: &[Book]) -> AppResult<()>;
}

/// Main repository struct holding the configured stores
pub struct Repository {
    pub books: Box<dyn BookStore>,
}

impl Repository {
    /// Create a repository backed by the JSON file at `path`
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            books: Box::new(JsonBookStore::new(path)),
        }
    }
}
