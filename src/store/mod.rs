//! Storage gateway for cinema rows: one async operation per CRUD verb.

mod memory;
mod postgres;

pub use memory::MemoryCinemaStore;
pub use postgres::{connect_pool, PgCinemaStore};

use crate::model::{Cinema, NewCinema};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A single-row fetch matched nothing.
    #[error("row not found")]
    NotFound,
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
}

/// Shared by all in-flight requests, so implementations must be safe for concurrent use.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CinemaStore: Send + Sync {
    /// Insert a row and return the id the store assigned.
    async fn insert(&self, cinema: &NewCinema) -> Result<i64, StoreError>;

    /// All rows, ordered by id ascending.
    async fn list_all(&self) -> Result<Vec<Cinema>, StoreError>;

    /// Fetch one row; `StoreError::NotFound` when absent.
    async fn get_by_id(&self, id: i64) -> Result<Cinema, StoreError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError>;

    /// Overwrite all mutable fields. Returns rows affected.
    async fn update(&self, id: i64, cinema: &NewCinema) -> Result<u64, StoreError>;

    /// Returns rows affected.
    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError>;

    /// Connectivity probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
