//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::{
        validation::{current_year, validate_keyword},
        Book, BookStatus, NewBook,
    },
    repository::BookStore,
};

/// Owner of the in-memory book collection.
///
/// Every mutation is computed on a copy of the collection and only
/// committed once the store has accepted it, so memory and file never
/// diverge after a failed save.
pub struct CatalogService {
    store: Box<dyn BookStore>,
    books: Vec<Book>,
    /// Highest id handed out so far, so deleted ids are not reassigned
    last_id: u64,
    max_year: i32,
}

impl CatalogService {
    /// Load the collection from `store`; `default_id` seeds numbering for an empty catalog
    pub fn open(store: Box<dyn BookStore>, default_id: u64) -> Self {
        let books = store.load();
        let last_id = books.iter().map(|b| b.id).max().unwrap_or(default_id);
        tracing::debug!("Catalog opened with {} books, last id {}", books.len(), last_id);
        Self {
            store,
            books,
            last_id,
            max_year: current_year(),
        }
    }

    /// Override the latest accepted publication year
    pub fn with_max_year(mut self, max_year: i32) -> Self {
        self.max_year = max_year;
        self
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Get a book by id
    pub fn get_book(&self, id: u64) -> AppResult<&Book> {
        self.position(id).map(|idx| &self.books[idx])
    }

    /// Validate and append a new book with status `available`
    pub fn add_book(&mut self, new_book: NewBook) -> AppResult<&Book> {
        new_book.check(self.max_year)?;

        let id = self.last_id.checked_add(1).ok_or_else(|| {
            AppError::BusinessRule(format!("No book id is left after {}.", self.last_id))
        })?;
        let mut books = self.books.clone();
        books.push(new_book.into_book(id));
        self.commit(books)?;
        self.last_id = id;

        let book = &self.books[self.books.len() - 1];
        tracing::info!("Book \"{}\" added with id {}", book.title, id);
        Ok(book)
    }

    /// Delete a book by id, returning the removed record
    pub fn delete_book(&mut self, id: u64) -> AppResult<Book> {
        let idx = self.position(id)?;

        let mut books = self.books.clone();
        let removed = books.remove(idx);
        self.commit(books)?;

        tracing::info!("Book with id {} deleted", id);
        Ok(removed)
    }

    /// Books whose title, author or year contain `keyword`, ignoring case.
    /// An empty result is not an error.
    pub fn search_books(&self, keyword: &str) -> AppResult<Vec<&Book>> {
        validate_keyword(keyword)?;

        let needle = keyword.to_lowercase();
        let found: Vec<&Book> = self.books.iter().filter(|b| b.matches(&needle)).collect();
        tracing::debug!("Search for {:?} found {} books", keyword, found.len());
        Ok(found)
    }

    /// All books in stored order
    pub fn list_books(&self) -> &[Book] {
        &self.books
    }

    /// Overwrite the status of a book
    pub fn update_status(&mut self, id: u64, status: BookStatus) -> AppResult<&Book> {
        let idx = self.position(id)?;

        let mut books = self.books.clone();
        books[idx].status = status;
        self.commit(books)?;

        tracing::info!("Status of book with id {} set to {}", id, status);
        Ok(&self.books[idx])
    }

    fn position(&self, id: u64) -> AppResult<usize> {
        self.books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found.", id)))
    }

    fn commit(&mut self, books: Vec<Book>) -> AppResult<()> {
        self.store.save(&books)?;
        self.books = books;
        Ok(())
    }
}
