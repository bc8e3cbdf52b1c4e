//! Shared application state for all routes.

use crate::service::CinemaService;

#[derive(Clone)]
pub struct AppState {
    pub cinemas: CinemaService,
}

impl AppState {
    pub fn new(cinemas: CinemaService) -> Self {
        AppState { cinemas }
    }
}
