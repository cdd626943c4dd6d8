//! Data models for Elidune Shelf

pub mod book;
pub mod enums;
pub mod validation;

// Re-export commonly used types
pub use book::{Book, NewBook};
pub use enums::{BookStatus, StatusChoice};
