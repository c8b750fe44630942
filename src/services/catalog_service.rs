//! Catalog Service - Business operations without any I/O surface

use crate::domain::{CatalogError, CatalogRepository, CatalogStats};
use crate::models::{Book, NewBook};

/// Add a book to the catalog
pub async fn add_book(repo: &dyn CatalogRepository, input: NewBook) -> Result<Book, CatalogError> {
    let book = Book::from(input);
    match repo.add(book.clone()).await {
        Ok(()) => {
            tracing::info!("Added book '{}' (ISBN {})", book.title(), book.isbn());
            Ok(book)
        }
        Err(e) => {
            tracing::warn!("Rejected book '{}': {:?}", book.title(), e);
            Err(e)
        }
    }
}

/// Search by exact title or author, ignoring case
pub async fn search_books(
    repo: &dyn CatalogRepository,
    query: &str,
) -> Result<Vec<Book>, CatalogError> {
    let result = repo.search(query).await;
    match &result {
        Ok(books) => tracing::debug!("Search '{}' matched {} book(s)", query, books.len()),
        Err(_) => tracing::debug!("Search '{}' matched nothing", query),
    }
    result
}

/// Lend the first available copy of a title
pub async fn check_out_book(
    repo: &dyn CatalogRepository,
    title: &str,
    borrower_name: &str,
    borrower_contact: &str,
) -> Result<Book, CatalogError> {
    let result = repo.check_out(title, borrower_name, borrower_contact).await;
    match &result {
        Ok(book) => tracing::info!(
            "Checked out '{}' (ISBN {}) to {}",
            book.title(),
            book.isbn(),
            borrower_name
        ),
        Err(e) => tracing::info!("Checkout of '{}' refused: {:?}", title, e),
    }
    result
}

/// Take back the first checked-out copy of a title
pub async fn return_book(repo: &dyn CatalogRepository, title: &str) -> Result<Book, CatalogError> {
    let result = repo.return_book(title).await;
    match &result {
        Ok(book) => tracing::info!("Returned '{}' (ISBN {})", book.title(), book.isbn()),
        Err(e) => tracing::info!("Return of '{}' refused: {:?}", title, e),
    }
    result
}

/// List every book in insertion order
pub async fn list_books(repo: &dyn CatalogRepository) -> Result<Vec<Book>, CatalogError> {
    repo.list_all().await
}

/// Capacity and loan counts
pub async fn catalog_stats(repo: &dyn CatalogRepository) -> CatalogStats {
    repo.stats().await
}
