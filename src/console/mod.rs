//! Interactive menu driving the catalog service

pub mod prompt;

use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    models::{
        validation::{validate_author, validate_keyword, validate_title, validate_year},
        BookStatus, NewBook, StatusChoice,
    },
    services::catalog::CatalogService,
};

use prompt::{parse_id, parse_int, Prompter};

const MENU: &str = "\nMenu:
1. Add a book
2. Delete a book
3. Search books
4. List all books
5. Change book status
6. Exit";

/// Text front end over a [`CatalogService`]
pub struct Console<R, W> {
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output),
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run the main menu until the user exits or input ends
    pub fn run(&mut self, catalog: &mut CatalogService) -> AppResult<()> {
        loop {
            self.prompter.line(MENU)?;
            let Some(choice) = self.prompter.read_line("Choose an action: ")? else {
                break;
            };

            let outcome = match choice.trim() {
                "1" => self.add_book(catalog),
                "2" => self.delete_book(catalog),
                "3" => self.search_books(catalog),
                "4" => self.list_books(catalog),
                "5" => self.update_status(catalog),
                "6" => {
                    self.prompter.line("Exiting.")?;
                    break;
                }
                _ => self.prompter.failure("Invalid choice. Try again."),
            };
            self.report(outcome)?;
        }
        Ok(())
    }

    /// Show recoverable errors and keep going; hand back fatal ones
    fn report(&mut self, outcome: AppResult<()>) -> AppResult<()> {
        match outcome {
            Err(err) if err.is_recoverable() => {
                tracing::debug!("Operation rejected ({:?}): {}", err.code(), err);
                self.prompter.failure(err.user_message())
            }
            other => other,
        }
    }

    fn add_book(&mut self, catalog: &mut CatalogService) -> AppResult<()> {
        self.prompter
            .line("Enter the book details (0 to return to the main menu).")?;

        let Some(title) = self.prompter.ask("Title: ", text(validate_title))?.value() else {
            return Ok(());
        };
        let Some(author) = self.prompter.ask("Author: ", text(validate_author))?.value() else {
            return Ok(());
        };
        let max_year = catalog.max_year();
        let Some(year) = self
            .prompter
            .ask("Publication year: ", |answer| {
                let year = parse_int(answer)?;
                validate_year(year, max_year)?;
                Ok(year)
            })?
            .value()
        else {
            return Ok(());
        };

        let book = catalog.add_book(NewBook::new(title, author, year))?;
        let message = format!("Book \"{}\" added with id {}.", book.title, book.id);
        self.prompter.success(message)
    }

    fn delete_book(&mut self, catalog: &mut CatalogService) -> AppResult<()> {
        self.prompter
            .line("Enter the id of the book to delete (0 to return to the main menu).")?;
        let Some(id) = self.prompter.ask("Book id: ", parse_id)?.value() else {
            return Ok(());
        };

        catalog.delete_book(id)?;
        self.prompter
            .success(format!("Book with id {} deleted.", id))
    }

    fn search_books(&mut self, catalog: &CatalogService) -> AppResult<()> {
        self.prompter
            .line("Enter a search keyword (0 to return to the main menu).")?;
        let Some(keyword) = self.prompter.ask("Keyword: ", text(validate_keyword))?.value() else {
            return Ok(());
        };

        let found = catalog.search_books(&keyword)?;
        if found.is_empty() {
            return self
                .prompter
                .line(format!("No books found for \"{}\".", keyword));
        }
        for book in &found {
            self.prompter.line(book)?;
        }
        self.prompter
            .success(format!("Found {} book(s).", found.len()))
    }

    fn list_books(&mut self, catalog: &CatalogService) -> AppResult<()> {
        let books = catalog.list_books();
        if books.is_empty() {
            return self.prompter.line("The library has no books yet.");
        }
        for book in books {
            self.prompter.line(book)?;
        }
        self.prompter
            .success(format!("Books in the library: {}.", books.len()))
    }

    fn update_status(&mut self, catalog: &mut CatalogService) -> AppResult<()> {
        self.prompter
            .line("Enter the id of the book to update (0 to return to the main menu).")?;
        let Some(id) = self.prompter.ask("Book id: ", parse_id)?.value() else {
            return Ok(());
        };
        let current = catalog.get_book(id)?.status;

        let status = loop {
            self.prompter
                .line(format!("\nCurrent status: {}. Choose a new status:", current))?;
            for status in BookStatus::ALL {
                self.prompter
                    .line(format!("{}. {}", status.menu_index(), status))?;
            }
            self.prompter.line("0. Return to the main menu")?;

            let Some(answer) = self.prompter.read_line("Status number or name: ")? else {
                return Ok(());
            };
            match StatusChoice::parse(&answer) {
                Some(StatusChoice::Set(status)) => break status,
                Some(StatusChoice::Cancel) => {
                    return self.prompter.line("Returning to the main menu.");
                }
                None => self.prompter.line("Invalid status choice. Try again.")?,
            }
        };

        catalog.update_status(id, status)?;
        self.prompter
            .success(format!("Status of book with id {} updated to '{}'.", id, status))
    }
}

/// Adapt a field rule into a prompt parser returning the answer unchanged
fn text<F>(rule: F) -> impl FnMut(&str) -> AppResult<String>
where
    F: Fn(&str) -> Result<(), validator::ValidationError>,
{
    move |answer: &str| {
        rule(answer).map_err(AppError::from)?;
        Ok(answer.to_string())
    }
}
