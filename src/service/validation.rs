//! Cinema payload validation. Rules run in order and stop at the first failure.

use crate::model::{CinemaCandidate, NewCinema};
use thiserror::Error;

pub const RATING_MIN: f32 = 0.0;
pub const RATING_MAX: f32 = 5.0;

/// Why a candidate was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("name and location required")]
    MissingNameOrLocation,
    #[error("rating out of range")]
    RatingOutOfRange,
}

pub struct RequestValidator;

impl RequestValidator {
    /// Accept the candidate as-is or report the first broken rule. No trimming or case folding.
    pub fn validate(candidate: CinemaCandidate) -> Result<NewCinema, Rejection> {
        if candidate.name.is_empty() || candidate.location.is_empty() {
            return Err(Rejection::MissingNameOrLocation);
        }
        // NaN fails the range check as well.
        if !(RATING_MIN..=RATING_MAX).contains(&candidate.rating) {
            return Err(Rejection::RatingOutOfRange);
        }
        Ok(NewCinema {
            name: candidate.name,
            location: candidate.location,
            rating: candidate.rating,
        })
    }
}
