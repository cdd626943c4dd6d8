//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BookStatus
// ---------------------------------------------------------------------------

/// Circulation status of a book.
/// Earlier catalogs stored the Russian labels; they are still accepted on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    #[serde(alias = "в наличии")]
    Available,
    #[serde(alias = "выдана")]
    Issued,
}

impl BookStatus {
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::Issued];

    /// Stored string code
    pub fn as_code(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Issued => "issued",
        }
    }

    /// Position in the status menu, starting at 1
    pub fn menu_index(&self) -> usize {
        match self {
            BookStatus::Available => 1,
            BookStatus::Issued => 2,
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

// ---------------------------------------------------------------------------
// StatusChoice
// ---------------------------------------------------------------------------

/// Answer to the status menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChoice {
    Set(BookStatus),
    Cancel,
}

impl StatusChoice {
    /// Parse a menu answer: `0` cancels, `1`/`2` pick by position,
    /// and the status code itself is accepted too.
    /// Returns `None` for anything else so the caller can ask again.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input == "0" {
            return Some(StatusChoice::Cancel);
        }
        BookStatus::ALL
            .iter()
            .find(|s| input == s.menu_index().to_string() || input.eq_ignore_ascii_case(s.as_code()))
            .map(|s| StatusChoice::Set(*s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde() {
        assert_eq!(serde_json::to_string(&BookStatus::Issued).unwrap(), "\"issued\"");
        let status: BookStatus = serde_json::from_str("\"available\"").unwrap();
        assert_eq!(status, BookStatus::Available);
    }

    #[test]
    fn test_legacy_labels() {
        let status: BookStatus = serde_json::from_str("\"выдана\"").unwrap();
        assert_eq!(status, BookStatus::Issued);
        let status: BookStatus = serde_json::from_str("\"в наличии\"").unwrap();
        assert_eq!(status, BookStatus::Available);
    }

    #[test]
    fn test_status_choice() {
        assert_eq!(StatusChoice::parse("0"), Some(StatusChoice::Cancel));
        assert_eq!(StatusChoice::parse("1"), Some(StatusChoice::Set(BookStatus::Available)));
        assert_eq!(StatusChoice::parse("2"), Some(StatusChoice::Set(BookStatus::Issued)));
        assert_eq!(StatusChoice::parse(" issued "), Some(StatusChoice::Set(BookStatus::Issued)));
        assert_eq!(StatusChoice::parse("3"), None);
        assert_eq!(StatusChoice::parse("lost"), None);
    }
}
