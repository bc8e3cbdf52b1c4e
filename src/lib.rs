//! bioskop-api: cinema resource over HTTP, backed by one PostgreSQL table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::{Cinema, CinemaCandidate, NewCinema};
pub use response::{success_many, success_one, success_one_ok};
pub use routes::{cinema_routes, common_routes_with_ready};
pub use service::{CinemaService, Rejection, RequestValidator};
pub use state::AppState;
pub use store::{connect_pool, CinemaStore, MemoryCinemaStore, PgCinemaStore, StoreError};

use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application router: operational routes plus the cinema resource, with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(cinema_routes(state))
        .layer(TraceLayer::new_for_http())
}
