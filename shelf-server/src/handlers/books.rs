//! Catalog handlers

use crate::state::AppState;
use axum::{extract::State, Json};
use shelf_core::BookList;

/// Serve the whole catalog as `{ "books": [...] }`
pub async fn list_books(State(state): State<AppState>) -> Json<BookList> {
    tracing::debug!(books = state.catalog.len(), "serving catalog");
    Json(BookList::clone(&state.catalog))
}
