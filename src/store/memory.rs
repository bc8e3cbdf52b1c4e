//! In-process cinema store. Same contract as the PostgreSQL store; ids start at 1 and are never reused.

use super::{CinemaStore, StoreError};
use crate::model::{Cinema, NewCinema};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryCinemaStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Cinema>,
    last_id: i64,
}

impl MemoryCinemaStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CinemaStore for MemoryCinemaStore {
    async fn insert(&self, cinema: &NewCinema) -> Result<i64, StoreError> {
        let mut guard = self.inner.write().await;
        guard.last_id += 1;
        let id = guard.last_id;
        guard.rows.insert(id, cinema.clone().with_id(id));
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Cinema>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Cinema, StoreError> {
        self.inner.read().await.rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.read().await.rows.contains_key(&id))
    }

    async fn update(&self, id: i64, cinema: &NewCinema) -> Result<u64, StoreError> {
        let mut guard = self.inner.write().await;
        match guard.rows.get_mut(&id) {
            Some(row) => {
                *row = cinema.clone().with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        Ok(self.inner.write().await.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
