//! Cinema resource service and its request validator.

mod crud;
mod validation;
pub use crud::CinemaService;
pub use validation::{Rejection, RequestValidator, RATING_MAX, RATING_MIN};
