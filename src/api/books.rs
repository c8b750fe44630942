//! Book API handlers using repository pattern

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use super::error_response;
use crate::infrastructure::AppState;
use crate::models::{BookView, NewBook};
use crate::services;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BooksResponse {
    pub books: Vec<BookView>,
    pub total: usize,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Exact title or author, case-insensitive
    pub q: String,
}

#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "All books in insertion order", body = BooksResponse),
        (status = 404, description = "Library catalog is empty")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> impl IntoResponse {
    match services::list_books(state.catalog()).await {
        Ok(books) => {
            let books: Vec<BookView> = books.into_iter().map(BookView::from).collect();
            Json(BooksResponse {
                total: books.len(),
                books,
            })
            .into_response()
        }
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book added", body = BookView),
        (status = 409, description = "Library is full")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<NewBook>,
) -> impl IntoResponse {
    match services::add_book(state.catalog(), payload).await {
        Ok(book) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Book added successfully.",
                "book": BookView::from(book)
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/books/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching books", body = BooksResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    match services::search_books(state.catalog(), &params.q).await {
        Ok(books) => {
            let books: Vec<BookView> = books.into_iter().map(BookView::from).collect();
            Json(BooksResponse {
                total: books.len(),
                books,
            })
            .into_response()
        }
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (
            status = 200,
            description = "Capacity and loan counts",
            body = crate::domain::CatalogStats
        )
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(services::catalog_stats(state.catalog()).await)
}
