//! Cinema CRUD routes under `/bioskop`.

use crate::handlers::cinema::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::limit::RequestBodyLimitLayer;

/// Cinema payloads are three short fields.
const BODY_LIMIT: usize = 64 * 1024;

pub fn cinema_routes(state: AppState) -> Router {
    Router::new()
        .route("/bioskop", get(list).post(create))
        .route("/bioskop/:id", get(read).put(update).delete(delete_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .with_state(state)
}
