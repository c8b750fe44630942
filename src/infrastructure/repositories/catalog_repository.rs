//! In-memory implementation of CatalogRepository

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Catalog, CatalogError, CatalogRepository, CatalogStats};
use crate::models::Book;

/// Catalog held in process memory behind a single lock.
///
/// Every operation holds the lock for its whole scan, so a checkout can never
/// interleave with another mutation.
pub struct InMemoryCatalogRepository {
    catalog: Mutex<Catalog>,
}

impl InMemoryCatalogRepository {
    pub fn new(capacity: usize) -> Self {
        Self::from_catalog(Catalog::new(capacity))
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
        }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn add(&self, book: Book) -> Result<(), CatalogError> {
        self.catalog.lock().await.add(book)
    }

    async fn search(&self, query: &str) -> Result<Vec<Book>, CatalogError> {
        let catalog = self.catalog.lock().await;
        let matches = catalog.search(query)?.cloned().collect();
        Ok(matches)
    }

    async fn check_out(
        &self,
        title: &str,
        borrower_name: &str,
        borrower_contact: &str,
    ) -> Result<Book, CatalogError> {
        let mut catalog = self.catalog.lock().await;
        catalog
            .check_out_book(title, borrower_name, borrower_contact)
            .cloned()
    }

    async fn return_book(&self, title: &str) -> Result<Book, CatalogError> {
        let mut catalog = self.catalog.lock().await;
        catalog.return_book(title).cloned()
    }

    async fn list_all(&self) -> Result<Vec<Book>, CatalogError> {
        let catalog = self.catalog.lock().await;
        let books = catalog.list_all()?.cloned().collect();
        Ok(books)
    }

    async fn stats(&self) -> CatalogStats {
        let catalog = self.catalog.lock().await;
        let checked_out = catalog.iter().filter(|b| b.is_checked_out()).count();
        CatalogStats {
            capacity: catalog.capacity(),
            total: catalog.len(),
            checked_out,
            available: catalog.len() - checked_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_checkouts_lend_a_single_copy_once() {
        let repo = Arc::new(InMemoryCatalogRepository::new(4));
        repo.add(Book::new("Dune", "Herbert", 1965, "111"))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for i in 0..8 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.check_out("Dune", &format!("reader-{}", i), "contact")
                    .await
                    .is_ok()
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);

        let stats = repo.stats().await;
        assert_eq!(stats.checked_out, 1);
        assert_eq!(stats.available, 0);
    }

    #[tokio::test]
    async fn test_results_are_snapshots() {
        let repo = InMemoryCatalogRepository::new(2);
        repo.add(Book::new("Dune", "Herbert", 1965, "111"))
            .await
            .unwrap();

        let before = repo.list_all().await.unwrap();
        repo.check_out("Dune", "Alice", "a@x").await.unwrap();

        assert!(!before[0].is_checked_out());
        assert!(repo.list_all().await.unwrap()[0].is_checked_out());
    }
}
