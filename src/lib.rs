//! Elidune Shelf
//!
//! A personal library catalog: book records validated on entry, kept in
//! memory and written back to a JSON file after every change.

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
