//! Cinema resource types: stored record, inbound candidate, validated input.

use serde::{Deserialize, Serialize};

/// A stored cinema row. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cinema {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub rating: f32,
}

/// Request body for create and update, as decoded from JSON.
/// Missing text fields decode as empty strings so the validator reports them; a missing rating decodes as 0.
/// Any `id` key in the body is ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CinemaCandidate {
    #[serde(default, alias = "nama")]
    pub name: String,
    #[serde(default, alias = "lokasi")]
    pub location: String,
    #[serde(default)]
    pub rating: f32,
}

/// Candidate that passed validation. Only the validator constructs it.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCinema {
    pub(crate) name: String,
    pub(crate) location: String,
    pub(crate) rating: f32,
}

impl NewCinema {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    /// Attach a store id, producing the record shape returned to clients.
    pub fn with_id(self, id: i64) -> Cinema {
        Cinema {
            id,
            name: self.name,
            location: self.location,
            rating: self.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_accepts_column_aliases_and_ignores_id() {
        let c: CinemaCandidate =
            serde_json::from_str(r#"{"id": 9, "nama": "CGV", "lokasi": "Mall A", "rating": 4.5}"#).unwrap();
        assert_eq!(
            c,
            CinemaCandidate {
                name: "CGV".into(),
                location: "Mall A".into(),
                rating: 4.5,
            }
        );
    }

    #[test]
    fn candidate_missing_fields_default_to_zero_values() {
        let c: CinemaCandidate = serde_json::from_str("{}").unwrap();
        assert_eq!(c, CinemaCandidate::default());
    }

    #[test]
    fn candidate_rejects_wrong_types() {
        assert!(serde_json::from_str::<CinemaCandidate>(r#"{"name": 1}"#).is_err());
        assert!(serde_json::from_str::<CinemaCandidate>(r#"{"rating": "high"}"#).is_err());
    }

    #[test]
    fn cinema_serializes_with_english_keys() {
        let v = serde_json::to_value(Cinema {
            id: 3,
            name: "XXI".into(),
            location: "Plaza".into(),
            rating: 5.0,
        })
        .unwrap();
        assert_eq!(v, serde_json::json!({"id": 3, "name": "XXI", "location": "Plaza", "rating": 5.0}));
    }

    #[test]
    fn rating_is_written_in_its_shortest_form() {
        let c: CinemaCandidate = serde_json::from_str(r#"{"name": "CGV", "location": "Mall A", "rating": 4.1}"#).unwrap();
        let text = serde_json::to_string(&Cinema {
            id: 1,
            name: c.name,
            location: c.location,
            rating: c.rating,
        })
        .unwrap();
        assert_eq!(text, r#"{"id":1,"name":"CGV","location":"Mall A","rating":4.1}"#);
    }
}
