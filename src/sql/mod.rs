//! SQL text for the cinema table: identifiers from settings only, values as parameters.

mod builder;
pub use builder::*;
