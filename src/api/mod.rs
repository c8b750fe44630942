pub mod books;
pub mod health;
pub mod loan;
pub mod menu;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::domain::CatalogError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/search", get(books::search_books))
        // Loans
        .route("/books/checkout", post(loan::check_out_book))
        .route("/books/return", post(loan::return_book))
        // Stats
        .route("/stats", get(books::get_stats))
        .with_state(state)
}

/// JSON error body carrying the catalog's user-facing message
pub(crate) fn error_response(e: CatalogError) -> Response {
    let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(json!({ "error": e.to_string() }))).into_response()
}
