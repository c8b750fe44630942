//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Repository implementations (repositories)
//! - Application state (state)
//! - Demo data (seed)
//! - HTTP server setup (server)

pub mod config;
pub mod repositories;
pub mod seed;
pub mod server;
pub mod state;

pub use repositories::*;
pub use state::AppState;
