//! HTTP handlers for the cinema resource.

pub mod cinema;
pub use cinema::*;
