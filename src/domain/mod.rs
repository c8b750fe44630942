//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no Axum, no I/O).
//! The catalog container, its error type and the repository contract.

pub mod catalog;
pub mod errors;
pub mod repositories;

pub use catalog::Catalog;
pub use errors::CatalogError;
pub use repositories::*;
