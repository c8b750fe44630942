//! Application state containing repositories and shared resources

use std::sync::Arc;

use crate::domain::CatalogRepository;
use crate::infrastructure::InMemoryCatalogRepository;

/// Application state shared across all handlers and the menu driver
#[derive(Clone)]
pub struct AppState {
    /// Catalog repository
    pub catalog_repo: Arc<dyn CatalogRepository>,
}

impl AppState {
    /// Create a new AppState backed by an empty in-memory catalog
    pub fn new(capacity: usize) -> Self {
        Self::with_repository(Arc::new(InMemoryCatalogRepository::new(capacity)))
    }

    pub fn with_repository(catalog_repo: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog_repo }
    }

    pub fn catalog(&self) -> &dyn CatalogRepository {
        self.catalog_repo.as_ref()
    }
}
