//! Routers: operational endpoints and the cinema resource.

mod cinema;
mod common;
pub use cinema::cinema_routes;
pub use common::common_routes_with_ready;
