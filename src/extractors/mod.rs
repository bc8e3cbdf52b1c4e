//! Request extractors that reject with `AppError` instead of axum's plain-text rejections.

pub mod cinema_id;
pub mod payload;
pub use cinema_id::CinemaId;
pub use payload::Payload;
