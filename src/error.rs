//! Typed errors and HTTP mapping.

use crate::service::Rejection;
use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid table name: {0}")]
    InvalidTableName(String),
    #[error("invalid DATABASE_URL: {0}")]
    InvalidDatabaseUrl(String),
}

/// Every failure the cinema endpoints can produce. Handlers return it directly.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{reason}")]
    MalformedInput {
        reason: &'static str,
        detail: Option<String>,
    },
    #[error(transparent)]
    Validation(#[from] Rejection),
    #[error("{0}")]
    NotFound(&'static str),
    /// `context` is what the client sees; `source` stays in the logs.
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn malformed(reason: &'static str) -> Self {
        AppError::MalformedInput { reason, detail: None }
    }

    /// Map a store failure, logging the cause. `StoreError::NotFound` becomes a 404.
    pub fn store(context: &'static str, not_found: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |e| match e {
            StoreError::NotFound => AppError::NotFound(not_found),
            source => {
                tracing::error!(error = %source, "{}", context);
                AppError::Store { context, source }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedInput { .. } | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, error, detail) = match self {
            AppError::MalformedInput { reason, detail } => ("invalid request", reason.to_string(), detail),
            AppError::Validation(r) => ("validation failed", r.to_string(), None),
            AppError::NotFound(reason) => ("not found", reason.to_string(), None),
            AppError::Store { context, .. } => ("internal error", context.to_string(), None),
        };
        (status, Json(ErrorBody { message, error, detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_of(err: AppError) -> (StatusCode, Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn store_cause_is_not_exposed() {
        let err = AppError::store("failed to save", "cinema not found")(StoreError::Database(sqlx::Error::PoolTimedOut));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "internal error", "error": "failed to save"}));
    }

    #[tokio::test]
    async fn store_not_found_maps_to_404() {
        let err = AppError::store("failed to fetch cinema", "cinema not found")(StoreError::NotFound);
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "cinema not found");
    }

    #[tokio::test]
    async fn malformed_input_carries_detail() {
        let err = AppError::MalformedInput {
            reason: "invalid JSON body",
            detail: Some("expected value at line 1 column 1".into()),
        };
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "expected value at line 1 column 1");
    }

    #[tokio::test]
    async fn validation_reason_is_the_error() {
        let (status, body) = body_of(AppError::from(Rejection::RatingOutOfRange)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "validation failed");
        assert_eq!(body["error"], "rating out of range");
        assert!(body.get("detail").is_none());
    }
}
