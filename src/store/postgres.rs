//! PostgreSQL-backed cinema store over a pooled `PgPool`.

use super::{CinemaStore, StoreError};
use crate::config::DatabaseSettings;
use crate::model::{Cinema, NewCinema};
use crate::sql::CinemaQueries;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use std::time::Duration;

/// Open a connection pool. Connects eagerly so a bad endpoint fails at startup.
pub async fn connect_pool(db: &DatabaseSettings) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(db.max_connections)
        .acquire_timeout(Duration::from_secs(db.acquire_timeout_secs))
        .connect_with(db.connect.clone())
        .await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct PgCinemaStore {
    pool: PgPool,
    queries: CinemaQueries,
}

impl PgCinemaStore {
    pub fn new(pool: PgPool, table: &str) -> Self {
        PgCinemaStore {
            pool,
            queries: CinemaQueries::for_table(table),
        }
    }
}

fn row_to_cinema(row: &PgRow) -> Result<Cinema, sqlx::Error> {
    Ok(Cinema {
        id: row.try_get("id")?,
        name: row.try_get("nama")?,
        location: row.try_get("lokasi")?,
        rating: row.try_get("rating")?,
    })
}

#[async_trait]
impl CinemaStore for PgCinemaStore {
    async fn insert(&self, cinema: &NewCinema) -> Result<i64, StoreError> {
        tracing::debug!(sql = %self.queries.insert, "query");
        let id: i64 = sqlx::query_scalar(&self.queries.insert)
            .bind(cinema.name())
            .bind(cinema.location())
            .bind(cinema.rating())
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Cinema>, StoreError> {
        tracing::debug!(sql = %self.queries.select_all, "query");
        let rows = sqlx::query(&self.queries.select_all).fetch_all(&self.pool).await?;
        let cinemas = rows.iter().map(row_to_cinema).collect::<Result<Vec<_>, _>>()?;
        Ok(cinemas)
    }

    async fn get_by_id(&self, id: i64) -> Result<Cinema, StoreError> {
        tracing::debug!(sql = %self.queries.select_by_id, id, "query");
        let row = sqlx::query(&self.queries.select_by_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)?;
        Ok(row_to_cinema(&row)?)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        tracing::debug!(sql = %self.queries.exists_by_id, id, "query");
        let exists: bool = sqlx::query_scalar(&self.queries.exists_by_id)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn update(&self, id: i64, cinema: &NewCinema) -> Result<u64, StoreError> {
        tracing::debug!(sql = %self.queries.update, id, "query");
        let result = sqlx::query(&self.queries.update)
            .bind(cinema.name())
            .bind(cinema.location())
            .bind(cinema.rating())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        tracing::debug!(sql = %self.queries.delete_by_id, id, "query");
        let result = sqlx::query(&self.queries.delete_by_id)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
