//! [`PgStore`]: the PostgreSQL implementation of the persistence gateway.

use async_trait::async_trait;
use mycofind_core::species::MushroomInfo;
use mycofind_core::spot::{MushroomSpot, SpotChanges};
use mycofind_core::status::StatusCheck;
use mycofind_core::store::{
    SpeciesStore, SpotStore, StatusStore, StoreError, StoreHealth, StoreResult,
};

use crate::repositories::{SpeciesRepo, SpotRepo, StatusCheckRepo};
use crate::{sql_limit, DbPool};

/// Gateway over a shared connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Log a database error and wrap it as an opaque gateway fault.
fn backend(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "Database error");
    StoreError::backend(err)
}

#[async_trait]
impl SpotStore for PgStore {
    async fn insert(&self, spot: &MushroomSpot) -> StoreResult<()> {
        SpotRepo::insert(&self.pool, spot).await.map_err(backend)
    }

    async fn list_recent(&self, limit: usize) -> StoreResult<Vec<MushroomSpot>> {
        let rows = SpotRepo::list_recent(&self.pool, sql_limit(limit))
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(MushroomSpot::from).collect())
    }

    async fn scan(&self, limit: usize) -> StoreResult<Vec<MushroomSpot>> {
        let rows = SpotRepo::scan(&self.pool, sql_limit(limit))
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(MushroomSpot::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<MushroomSpot>> {
        let row = SpotRepo::find_by_id(&self.pool, id)
            .await
            .map_err(backend)?;
        Ok(row.map(MushroomSpot::from))
    }

    async fn update(&self, id: &str, changes: &SpotChanges) -> StoreResult<bool> {
        SpotRepo::update(&self.pool, id, changes)
            .await
            .map_err(backend)
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        SpotRepo::delete(&self.pool, id).await.map_err(backend)
    }
}

#[async_trait]
impl SpeciesStore for PgStore {
    async fn insert(&self, info: &MushroomInfo) -> StoreResult<()> {
        SpeciesRepo::insert(&self.pool, info).await.map_err(backend)
    }

    async fn list(&self, limit: usize) -> StoreResult<Vec<MushroomInfo>> {
        let rows = SpeciesRepo::list(&self.pool, sql_limit(limit))
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(MushroomInfo::from).collect())
    }

    async fn search(&self, term: &str, limit: usize) -> StoreResult<Vec<MushroomInfo>> {
        let rows = SpeciesRepo::search(&self.pool, term, sql_limit(limit))
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(MushroomInfo::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<MushroomInfo>> {
        let row = SpeciesRepo::find_by_id(&self.pool, id)
            .await
            .map_err(backend)?;
        Ok(row.map(MushroomInfo::from))
    }

    async fn replace(&self, info: &MushroomInfo) -> StoreResult<bool> {
        SpeciesRepo::replace(&self.pool, info).await.map_err(backend)
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        SpeciesRepo::delete(&self.pool, id).await.map_err(backend)
    }
}

#[async_trait]
impl StatusStore for PgStore {
    async fn insert(&self, check: &StatusCheck) -> StoreResult<()> {
        StatusCheckRepo::insert(&self.pool, check)
            .await
            .map_err(backend)
    }

    async fn list(&self, limit: usize) -> StoreResult<Vec<StatusCheck>> {
        let rows = StatusCheckRepo::list(&self.pool, sql_limit(limit))
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(StatusCheck::from).collect())
    }
}

#[async_trait]
impl StoreHealth for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await.map_err(backend)
    }
}
