//! JSON body extractor. Decodes regardless of content type and reports decoder errors as 400 with detail.
//! The body must be a JSON object; serde would otherwise also accept a struct spelled as an array.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const INVALID_JSON: &str = "invalid JSON body";

#[derive(Debug)]
pub struct Payload<T>(pub T);

fn malformed(detail: String) -> AppError {
    AppError::MalformedInput {
        reason: INVALID_JSON,
        detail: Some(detail),
    }
}

/// Decode `bytes` as a JSON object, then as `T`.
pub fn decode_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let object: Map<String, Value> = serde_json::from_slice(bytes).map_err(|e| malformed(e.to_string()))?;
    serde_json::from_value(Value::Object(object)).map_err(|e| malformed(e.to_string()))
}

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rej| malformed(rej.body_text()))?;
        decode_object(&bytes).map(Payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CinemaCandidate;
    use rstest::rstest;

    #[rstest]
    #[case(r#"["CGV", "Mall A", 4.5]"#)]
    #[case(r#""CGV""#)]
    #[case("4.5")]
    #[case("null")]
    #[case("{not json")]
    #[case(r#"{"name": "CGV", "rating": "high"}"#)]
    fn non_object_or_mistyped_bodies_are_malformed(#[case] body: &str) {
        let err = decode_object::<CinemaCandidate>(body.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            AppError::MalformedInput {
                reason: INVALID_JSON,
                detail: Some(_)
            }
        ));
    }

    #[test]
    fn object_body_decodes() {
        let c: CinemaCandidate = decode_object(br#"{"name": "CGV", "location": "Mall A", "rating": 4.5}"#).unwrap();
        assert_eq!(c.name, "CGV");
        assert_eq!(c.location, "Mall A");
        assert_eq!(c.rating, 4.5);
    }
}
