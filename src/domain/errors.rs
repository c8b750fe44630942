//! Domain error types
//!
//! Every failure the catalog can report. All of them are recoverable: the
//! operation is rejected before any state changes and the catalog keeps
//! working.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog already holds `capacity` books
    CapacityExceeded { capacity: usize },
    /// A search matched no title or author
    NotFound,
    /// No available book with that title (missing, or every copy is out)
    Unavailable,
    /// No checked-out book with that title (missing, or already returned)
    NotFoundOrNotCheckedOut,
    /// Listing a catalog that holds no books
    Empty,
}

impl CatalogError {
    /// HTTP status used when the error crosses the API boundary
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::CapacityExceeded { .. } => 409,
            CatalogError::NotFound => 404,
            CatalogError::Unavailable => 409,
            CatalogError::NotFoundOrNotCheckedOut => 404,
            CatalogError::Empty => 404,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::CapacityExceeded { .. } => {
                write!(f, "Library is full. Cannot add more books.")
            }
            CatalogError::NotFound => write!(f, "Book not found."),
            CatalogError::Unavailable => write!(f, "Book not available for checkout."),
            CatalogError::NotFoundOrNotCheckedOut => {
                write!(f, "Book not found or already returned.")
            }
            CatalogError::Empty => write!(f, "Library catalog is empty."),
        }
    }
}

impl std::error::Error for CatalogError {}
