//! The catalog container
//!
//! A bounded, insertion-ordered collection of books. Every lookup is a linear
//! scan using case-insensitive exact matching on titles (and authors for
//! search). Duplicates are allowed; mutating operations act on the first
//! qualifying entry.

use super::CatalogError;
use crate::models::Book;

#[derive(Debug, Clone)]
pub struct Catalog {
    capacity: usize,
    items: Vec<Book>,
}

/// Exact comparison ignoring case, without allocating.
///
/// Each char is upper-cased and then lower-cased, so letters with several
/// lowercase forms (final sigma) fold to the same value.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
        s.chars()
            .flat_map(char::to_uppercase)
            .flat_map(char::to_lowercase)
    }
    fold(a).eq(fold(b))
}

impl Catalog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.items.get(index)
    }

    /// All books in insertion order, empty or not
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.items.iter()
    }

    /// Append a book if there is room left
    pub fn add(&mut self, book: Book) -> Result<(), CatalogError> {
        if self.is_full() {
            return Err(CatalogError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(book);
        Ok(())
    }

    /// Books whose title or author equals `query`, ignoring case.
    ///
    /// The iterator is lazy and single-pass; call `search` again to rescan.
    /// Returns `NotFound` instead of an iterator that would yield nothing.
    pub fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> Result<impl Iterator<Item = &'a Book> + 'a, CatalogError> {
        let mut matches = self
            .items
            .iter()
            .filter(move |book| {
                eq_ignore_case(book.title(), query) || eq_ignore_case(book.author(), query)
            })
            .peekable();

        if matches.peek().is_none() {
            return Err(CatalogError::NotFound);
        }
        Ok(matches)
    }

    /// Lend the first available book with this title
    pub fn check_out_book(
        &mut self,
        title: &str,
        borrower_name: &str,
        borrower_contact: &str,
    ) -> Result<&Book, CatalogError> {
        let book = self
            .items
            .iter_mut()
            .find(|book| !book.is_checked_out() && eq_ignore_case(book.title(), title))
            .ok_or(CatalogError::Unavailable)?;

        book.check_out(borrower_name, borrower_contact);
        Ok(&*book)
    }

    /// Take back the first checked-out book with this title
    pub fn return_book(&mut self, title: &str) -> Result<&Book, CatalogError> {
        let book = self
            .items
            .iter_mut()
            .find(|book| book.is_checked_out() && eq_ignore_case(book.title(), title))
            .ok_or(CatalogError::NotFoundOrNotCheckedOut)?;

        book.return_item();
        Ok(&*book)
    }

    /// Every book in insertion order, or `Empty` when there is none
    pub fn list_all(&self) -> Result<impl Iterator<Item = &Book> + '_, CatalogError> {
        if self.items.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(self.items.iter())
    }
}
