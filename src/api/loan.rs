use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use super::error_response;
use crate::infrastructure::AppState;
use crate::models::BookView;
use crate::services;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub title: String,
    pub borrower_name: String,
    pub borrower_contact: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReturnRequest {
    pub title: String,
}

#[utoipa::path(
    post,
    path = "/api/books/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Book checked out", body = BookView),
        (status = 409, description = "Book not available for checkout")
    )
)]
pub async fn check_out_book(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> impl IntoResponse {
    match services::check_out_book(
        state.catalog(),
        &payload.title,
        &payload.borrower_name,
        &payload.borrower_contact,
    )
    .await
    {
        Ok(book) => Json(json!({
            "message": "Book checked out successfully.",
            "book": BookView::from(book)
        }))
        .into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/books/return",
    request_body = ReturnRequest,
    responses(
        (status = 200, description = "Book returned", body = BookView),
        (status = 404, description = "Book not found or already returned")
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    Json(payload): Json<ReturnRequest>,
) -> impl IntoResponse {
    match services::return_book(state.catalog(), &payload.title).await {
        Ok(book) => Json(json!({
            "message": "Book returned successfully.",
            "book": BookView::from(book)
        }))
        .into_response(),
        Err(e) => error_response(e),
    }
}
