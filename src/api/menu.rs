//! Interactive text menu over a line-oriented reader/writer pair.
//!
//! Production wires this to stdin/stdout; tests feed it byte buffers. The
//! catalog itself never sees any I/O: each menu entry collects its fields,
//! calls the catalog service and renders the outcome.

use std::fmt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::domain::CatalogRepository;
use crate::models::NewBook;
use crate::services;

const MENU: &str = "\nLibrary System Menu:\n\
1. Add a Book\n\
2. Search for a Book\n\
3. Check Out a Book\n\
4. Return a Book\n\
5. Display Book Catalog\n\
6. Exit\n\
Enter your choice: ";

const SEPARATOR: &str = "------------------------";
const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 6.";
const INVALID_YEAR: &str = "Invalid year. Please enter a whole number.";

#[derive(Debug)]
pub enum MenuError {
    /// Reading from or writing to the terminal failed
    Io(std::io::Error),
    /// Input ended before the user chose to exit
    Eof,
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::Io(e) => write!(f, "I/O error: {}", e),
            MenuError::Eof => write!(f, "Input closed"),
        }
    }
}

impl std::error::Error for MenuError {}

impl From<std::io::Error> for MenuError {
    fn from(e: std::io::Error) -> Self {
        MenuError::Io(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    AddBook,
    Search,
    CheckOut,
    Return,
    DisplayCatalog,
    Exit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(Choice::AddBook),
            2 => Some(Choice::Search),
            3 => Some(Choice::CheckOut),
            4 => Some(Choice::Return),
            5 => Some(Choice::DisplayCatalog),
            6 => Some(Choice::Exit),
            _ => None,
        }
    }
}

pub struct Menu<'a, R, W> {
    repo: &'a dyn CatalogRepository,
    reader: R,
    writer: W,
}

impl<'a, R, W> Menu<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(repo: &'a dyn CatalogRepository, reader: R, writer: W) -> Self {
        Self {
            repo,
            reader,
            writer,
        }
    }

    /// Run until the user picks Exit or the input ends
    pub async fn run(mut self) -> Result<(), MenuError> {
        match self.run_loop().await {
            Err(MenuError::Eof) => {
                tracing::info!("Input closed, leaving menu");
                self.writer.flush().await?;
                Ok(())
            }
            other => other,
        }
    }

    async fn run_loop(&mut self) -> Result<(), MenuError> {
        loop {
            self.write(MENU).await?;
            let line = self.read_line().await?;

            let choice = Choice::parse(&line);
            tracing::debug!("Menu choice: {:?}", choice);

            match choice {
                Some(Choice::AddBook) => self.add_book().await?,
                Some(Choice::Search) => self.search().await?,
                Some(Choice::CheckOut) => self.check_out().await?,
                Some(Choice::Return) => self.return_book().await?,
                Some(Choice::DisplayCatalog) => self.display_catalog().await?,
                Some(Choice::Exit) => {
                    self.say("Exiting...").await?;
                    return Ok(());
                }
                None => self.say(INVALID_CHOICE).await?,
            }
        }
    }

    async fn add_book(&mut self) -> Result<(), MenuError> {
        let title = self.prompt("Enter title: ").await?;
        let author = self.prompt("Enter author: ").await?;
        let publication_year = self.prompt_year().await?;
        let isbn = self.prompt("Enter ISBN: ").await?;

        let input = NewBook {
            title,
            author,
            publication_year,
            isbn,
        };
        match services::add_book(self.repo, input).await {
            Ok(_) => self.say("Book added successfully.").await,
            Err(e) => self.say(&e.to_string()).await,
        }
    }

    async fn search(&mut self) -> Result<(), MenuError> {
        let query = self.prompt("Enter title or author to search: ").await?;
        match services::search_books(self.repo, &query).await {
            Ok(books) => {
                for book in books {
                    self.say(&book.describe()).await?;
                }
                Ok(())
            }
            Err(e) => self.say(&e.to_string()).await,
        }
    }

    async fn check_out(&mut self) -> Result<(), MenuError> {
        let title = self.prompt("Enter title of the book to check out: ").await?;
        let name = self.prompt("Enter your name: ").await?;
        let contact = self.prompt("Enter your contact details: ").await?;

        match services::check_out_book(self.repo, &title, &name, &contact).await {
            Ok(_) => self.say("Book checked out successfully.").await,
            Err(e) => self.say(&e.to_string()).await,
        }
    }

    async fn return_book(&mut self) -> Result<(), MenuError> {
        let title = self.prompt("Enter title of the book to return: ").await?;
        match services::return_book(self.repo, &title).await {
            Ok(_) => self.say("Book returned successfully.").await,
            Err(e) => self.say(&e.to_string()).await,
        }
    }

    async fn display_catalog(&mut self) -> Result<(), MenuError> {
        match services::list_books(self.repo).await {
            Ok(books) => {
                self.say("Library Catalog:").await?;
                for book in books {
                    self.say(&book.describe()).await?;
                    self.say(SEPARATOR).await?;
                }
                Ok(())
            }
            Err(e) => self.say(&e.to_string()).await,
        }
    }

    /// Ask until the answer parses as a year
    async fn prompt_year(&mut self) -> Result<i32, MenuError> {
        loop {
            let raw = self.prompt("Enter publication year: ").await?;
            match raw.trim().parse::<i32>() {
                Ok(year) => return Ok(year),
                Err(_) => self.say(INVALID_YEAR).await?,
            }
        }
    }

    async fn prompt(&mut self, label: &str) -> Result<String, MenuError> {
        self.write(label).await?;
        self.read_line().await
    }

    /// One input line without its terminator
    async fn read_line(&mut self) -> Result<String, MenuError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(MenuError::Eof);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    async fn say(&mut self, text: &str) -> Result<(), MenuError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn write(&mut self, text: &str) -> Result<(), MenuError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}
