//! CinemaService: validation, existence checks and store calls for the five cinema operations.

use crate::error::AppError;
use crate::model::{Cinema, CinemaCandidate};
use crate::service::RequestValidator;
use crate::store::CinemaStore;
use std::sync::Arc;

const NOT_FOUND: &str = "cinema not found";

#[derive(Clone)]
pub struct CinemaService {
    store: Arc<dyn CinemaStore>,
}

impl CinemaService {
    pub fn new(store: Arc<dyn CinemaStore>) -> Self {
        CinemaService { store }
    }

    pub fn store(&self) -> &Arc<dyn CinemaStore> {
        &self.store
    }

    /// Validate and insert. Returns the input with the assigned id.
    pub async fn create(&self, candidate: CinemaCandidate) -> Result<Cinema, AppError> {
        let cinema = RequestValidator::validate(candidate)?;
        let id = self
            .store
            .insert(&cinema)
            .await
            .map_err(AppError::store("failed to save", NOT_FOUND))?;
        tracing::info!(id, "cinema created");
        Ok(cinema.with_id(id))
    }

    /// All rows by id ascending. An empty table is not an error.
    pub async fn list(&self) -> Result<Vec<Cinema>, AppError> {
        self.store
            .list_all()
            .await
            .map_err(AppError::store("failed to fetch cinemas", NOT_FOUND))
    }

    pub async fn get(&self, id: i64) -> Result<Cinema, AppError> {
        self.store
            .get_by_id(id)
            .await
            .map_err(AppError::store("failed to fetch cinema", NOT_FOUND))
    }

    /// Replace all mutable fields of `id`. The existence check gives a precise 404; the row count stays authoritative.
    pub async fn update(&self, id: i64, candidate: CinemaCandidate) -> Result<Cinema, AppError> {
        let cinema = RequestValidator::validate(candidate)?;
        let exists = self
            .store
            .exists_by_id(id)
            .await
            .map_err(AppError::store("failed to check cinema", NOT_FOUND))?;
        if !exists {
            return Err(AppError::NotFound(NOT_FOUND));
        }
        let rows = self
            .store
            .update(id, &cinema)
            .await
            .map_err(AppError::store("failed to update cinema", NOT_FOUND))?;
        if rows == 0 {
            tracing::warn!(id, "cinema vanished between existence check and update");
            return Err(AppError::NotFound("nothing updated"));
        }
        tracing::info!(id, "cinema updated");
        Ok(cinema.with_id(id))
    }

    /// Remove `id` and return the row as it was just before removal.
    pub async fn delete(&self, id: i64) -> Result<Cinema, AppError> {
        let snapshot = self
            .store
            .get_by_id(id)
            .await
            .map_err(AppError::store("failed to check cinema", NOT_FOUND))?;
        let rows = self
            .store
            .delete_by_id(id)
            .await
            .map_err(AppError::store("failed to delete cinema", NOT_FOUND))?;
        if rows == 0 {
            tracing::warn!(id, "cinema vanished between snapshot and delete");
            return Err(AppError::NotFound("nothing deleted"));
        }
        tracing::info!(id, "cinema deleted");
        Ok(snapshot)
    }
}
