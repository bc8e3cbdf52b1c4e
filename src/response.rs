//! Standard response envelope helpers: every body carries a `message`, most carry `data`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessOne<T> {
    pub message: &'static str,
    pub data: T,
}

#[derive(Serialize)]
pub struct SuccessMany<T> {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    pub data: Vec<T>,
}

pub fn success_one<T: Serialize>(message: &'static str, data: T) -> (StatusCode, Json<SuccessOne<T>>) {
    (StatusCode::CREATED, Json(SuccessOne { message, data }))
}

pub fn success_one_ok<T: Serialize>(message: &'static str, data: T) -> (StatusCode, Json<SuccessOne<T>>) {
    (StatusCode::OK, Json(SuccessOne { message, data }))
}

/// A non-empty list carries `total`; an empty one gets `empty_message` and no count.
pub fn success_many<T: Serialize>(
    message: &'static str,
    empty_message: &'static str,
    data: Vec<T>,
) -> (StatusCode, Json<SuccessMany<T>>) {
    let body = if data.is_empty() {
        SuccessMany {
            message: empty_message,
            total: None,
            data,
        }
    } else {
        SuccessMany {
            message,
            total: Some(data.len() as u64),
            data,
        }
    };
    (StatusCode::OK, Json(body))
}
