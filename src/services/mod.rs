//! Services Layer
//!
//! Catalog operations shared by the HTTP handlers and the interactive menu.
//! Both surfaces call these instead of touching the repository directly.

pub mod catalog_service;

// Re-export for convenience
pub use catalog_service::*;
