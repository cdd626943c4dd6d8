//! Line-oriented prompting with a `0` cancel sentinel

use std::io::{BufRead, Write};

use crate::error::{AppError, AppResult};

/// Answer typed to exit a prompt back to the main menu
pub const CANCEL: &str = "0";

/// Result of a field prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Value(T),
    Cancelled,
}

impl<T> Prompted<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Prompted::Value(v) => Some(v),
            Prompted::Cancelled => None,
        }
    }
}

/// Reads answers from `input` and writes prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn line(&mut self, text: impl std::fmt::Display) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn success(&mut self, text: impl std::fmt::Display) -> AppResult<()> {
        self.line(format_args!("✅ {}", text))
    }

    pub fn failure(&mut self, text: impl std::fmt::Display) -> AppResult<()> {
        self.line(format_args!("❌ {}", text))
    }

    /// Print `label` and read one line without its line ending.
    /// `None` once input is exhausted.
    pub fn read_line(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    /// Ask until `parse` accepts the answer or the user cancels.
    /// Recoverable rejections are shown and the question repeated;
    /// end of input counts as a cancel.
    pub fn ask<T, F>(&mut self, label: &str, mut parse: F) -> AppResult<Prompted<T>>
    where
        F: FnMut(&str) -> AppResult<T>,
    {
        loop {
            let Some(answer) = self.read_line(label)? else {
                return Ok(Prompted::Cancelled);
            };
            if answer.trim() == CANCEL {
                self.line("Returning to the main menu.")?;
                return Ok(Prompted::Cancelled);
            }
            match parse(&answer) {
                Ok(value) => return Ok(Prompted::Value(value)),
                Err(err) if err.is_recoverable() => {
                    tracing::debug!("Rejected answer ({:?}): {}", err.code(), err);
                    self.failure(err.user_message())?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Parse a whole number, reporting a type error otherwise
pub fn parse_int(answer: &str) -> AppResult<i32> {
    answer
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidInput("Expected an integer.".to_string()))
}

/// Parse a book id (a positive integer)
pub fn parse_id(answer: &str) -> AppResult<u64> {
    match answer.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidInput("Expected a positive integer.".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    fn output(p: Prompter<&[u8], Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut p = prompter("hello\r\nworld");
        assert_eq!(p.read_line("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(p.read_line("> ").unwrap().as_deref(), Some("world"));
        assert_eq!(p.read_line("> ").unwrap(), None);
    }

    #[test]
    fn test_ask_reprompts_on_type_error() {
        let mut p = prompter("abc\n1967\n");
        let year = p.ask("Year: ", parse_int).unwrap();
        assert_eq!(year, Prompted::Value(1967));
        assert!(output(p).contains("❌ Expected an integer."));
    }

    #[test]
    fn test_ask_cancels_on_zero() {
        let mut p = prompter("0\n");
        let answer = p.ask("Id: ", parse_id).unwrap();
        assert_eq!(answer, Prompted::Cancelled);
        assert!(output(p).contains("Returning to the main menu."));
    }

    #[test]
    fn test_ask_cancels_at_end_of_input() {
        let mut p = prompter("-5\n");
        assert_eq!(p.ask("Id: ", parse_id).unwrap(), Prompted::Cancelled);
    }

    #[test]
    fn test_ask_propagates_fatal_errors() {
        let mut p = prompter("x\n");
        let result: AppResult<Prompted<()>> = p.ask("> ", |_| {
            Err(AppError::Storage(std::io::Error::new(std::io::ErrorKind::Other, "boom")))
        });
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
