//! JSON file store for book records

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::{error::AppResult, models::Book};

use super::BookStore;

/// Book collection persisted as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonBookStore {
    path: PathBuf,
}

impl JsonBookStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "database.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookStore for JsonBookStore {
    fn load(&self) -> Vec<Book> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No catalog at {}, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(
                    "Catalog file {} is unreadable, starting empty: {}",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Book>>(&data) {
            Ok(books) => {
                tracing::info!("Loaded {} books from {}", books.len(), self.path.display());
                books
            }
            Err(e) => {
                tracing::warn!(
                    "Catalog file {} is malformed, starting empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, books: &[Book]) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(books)?;

        // Write beside the target then swap it in
        let temp = self.temp_path();
        if let Err(e) = replace_with(&temp, &self.path, json.as_bytes()) {
            if temp.exists() {
                if let Err(cleanup) = fs::remove_file(&temp) {
                    tracing::warn!("Could not remove {}: {}", temp.display(), cleanup);
                }
            }
            return Err(e.into());
        }

        tracing::debug!("Saved {} books to {}", books.len(), self.path.display());
        Ok(())
    }
}

fn replace_with(temp: &Path, target: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(temp)?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp, target)
}
