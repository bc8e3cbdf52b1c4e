//! Extract the numeric cinema id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Cinema id parsed from the path. Non-numeric segments are rejected with 400.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CinemaId(pub i64);

pub const ID_NOT_NUMERIC: &str = "id must be numeric";

impl std::str::FromStr for CinemaId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(CinemaId).map_err(|_| AppError::malformed(ID_NOT_NUMERIC))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CinemaId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::malformed(ID_NOT_NUMERIC))?;
        raw.parse()
    }
}
