use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Who currently holds a checked-out book
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Borrower {
    pub name: String,
    pub contact: String,
}

/// A single catalog record.
///
/// Bibliographic fields are fixed at construction. The checkout state lives in
/// `borrower`: `None` means the book is available, so a checked-out flag and
/// empty borrower fields can never disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    publication_year: i32,
    isbn: String,
    borrower: Option<Borrower>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
            isbn: isbn.into(),
            borrower: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn is_checked_out(&self) -> bool {
        self.borrower.is_some()
    }

    /// Borrower name, or `""` while the book is available
    pub fn borrower_name(&self) -> &str {
        self.borrower.as_ref().map_or("", |b| b.name.as_str())
    }

    /// Borrower contact, or `""` while the book is available
    pub fn borrower_contact(&self) -> &str {
        self.borrower.as_ref().map_or("", |b| b.contact.as_str())
    }

    /// Lend the book. Overwrites any previous borrower; callers that care
    /// about double checkout must check `is_checked_out` first.
    pub fn check_out(&mut self, name: impl Into<String>, contact: impl Into<String>) {
        self.borrower = Some(Borrower {
            name: name.into(),
            contact: contact.into(),
        });
    }

    /// Mark the book as available again and forget the borrower
    pub fn return_item(&mut self) {
        self.borrower = None;
    }

    /// Human-readable detail view
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Publication Year: {}", self.publication_year)?;
        writeln!(f, "ISBN: {}", self.isbn)?;
        write!(
            f,
            "Checked Out: {}",
            if self.is_checked_out() { "Yes" } else { "No" }
        )?;
        if let Some(borrower) = &self.borrower {
            writeln!(f)?;
            writeln!(f, "Borrower Name: {}", borrower.name)?;
            write!(f, "Borrower Contact: {}", borrower.contact)?;
        }
        Ok(())
    }
}

// DTO for API requests
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub isbn: String,
}

impl From<NewBook> for Book {
    fn from(dto: NewBook) -> Self {
        Book::new(dto.title, dto.author, dto.publication_year, dto.isbn)
    }
}

// DTO for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookView {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub isbn: String,
    pub checked_out: bool,
    pub borrower_name: String,
    pub borrower_contact: String,
}

impl From<&Book> for BookView {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            publication_year: book.publication_year,
            isbn: book.isbn.clone(),
            checked_out: book.is_checked_out(),
            borrower_name: book.borrower_name().to_string(),
            borrower_contact: book.borrower_contact().to_string(),
        }
    }
}

impl From<Book> for BookView {
    fn from(book: Book) -> Self {
        BookView::from(&book)
    }
}
