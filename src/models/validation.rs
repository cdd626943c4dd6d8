//! Field rules for book records.
//!
//! Each rule returns `Ok(())` or a `ValidationError` whose message is meant
//! to be shown to the user as-is.

use std::borrow::Cow;

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

pub const MIN_TITLE_LENGTH: usize = 4;
pub const MIN_AUTHOR_LENGTH: usize = 2;
pub const MIN_AUTHOR_WORDS: usize = 1;
pub const MAX_AUTHOR_WORDS: usize = 3;
/// Years must be strictly greater than this
pub const MIN_YEAR: i32 = 100;
pub const MIN_KEYWORD_LENGTH: usize = 2;

/// A letter, then letters and whitespace only (Latin and Cyrillic)
static AUTHOR_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zА-Яа-яёЁ][A-Za-zА-Яа-яёЁ\s]+$").expect("author name pattern is valid")
});

fn rejected(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(message));
    err
}

/// Current calendar year, upper bound for publication years
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.chars().count() < MIN_TITLE_LENGTH {
        return Err(rejected(
            "title_length",
            format!("Title must be at least {} characters long.", MIN_TITLE_LENGTH),
        ));
    }
    Ok(())
}

pub fn validate_author(author: &str) -> Result<(), ValidationError> {
    if author.chars().count() < MIN_AUTHOR_LENGTH {
        return Err(rejected(
            "author_length",
            format!("Author name must be at least {} characters long.", MIN_AUTHOR_LENGTH),
        ));
    }

    let words = author.split_whitespace().count();
    if !(MIN_AUTHOR_WORDS..=MAX_AUTHOR_WORDS).contains(&words) {
        return Err(rejected(
            "author_words",
            format!(
                "Author name must contain from {} to {} words.",
                MIN_AUTHOR_WORDS, MAX_AUTHOR_WORDS
            ),
        ));
    }

    if !AUTHOR_NAME.is_match(author) {
        return Err(rejected(
            "author_pattern",
            "Author name must start with a letter and must not contain digits.".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_year(year: i32, max_year: i32) -> Result<(), ValidationError> {
    if year <= MIN_YEAR {
        return Err(rejected(
            "year_too_old",
            format!("Publication year must be greater than {}.", MIN_YEAR),
        ));
    }
    if year > max_year {
        return Err(rejected(
            "year_in_future",
            format!("Publication year cannot be later than the current year ({}).", max_year),
        ));
    }
    Ok(())
}

pub fn validate_keyword(keyword: &str) -> Result<(), ValidationError> {
    if keyword.chars().count() < MIN_KEYWORD_LENGTH {
        return Err(rejected(
            "keyword_length",
            format!("Search keyword must be at least {} characters long.", MIN_KEYWORD_LENGTH),
        ));
    }
    Ok(())
}
