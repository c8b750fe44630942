//! Repository trait definitions
//!
//! These traits define the contract for catalog access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use super::CatalogError;
use crate::models::Book;

/// Occupancy figures for a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CatalogStats {
    pub capacity: usize,
    pub total: usize,
    pub checked_out: usize,
    pub available: usize,
}

/// Repository trait for the book catalog.
///
/// Results are owned snapshots: implementations may hold a lock for the
/// duration of a call, so nothing borrowed escapes it.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Append a book, failing with `CapacityExceeded` when full
    async fn add(&self, book: Book) -> Result<(), CatalogError>;

    /// Books whose title or author equals the query, ignoring case
    async fn search(&self, query: &str) -> Result<Vec<Book>, CatalogError>;

    /// Lend the first available book with this title
    async fn check_out(
        &self,
        title: &str,
        borrower_name: &str,
        borrower_contact: &str,
    ) -> Result<Book, CatalogError>;

    /// Take back the first checked-out book with this title
    async fn return_book(&self, title: &str) -> Result<Book, CatalogError>;

    /// Every book in insertion order
    async fn list_all(&self) -> Result<Vec<Book>, CatalogError>;

    /// Capacity and loan counts
    async fn stats(&self) -> CatalogStats;
}
