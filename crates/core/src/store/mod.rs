//! Persistence gateway.
//!
//! One trait per collection, keyed by the application-assigned `id` field.
//! Services hold these behind `Arc<dyn ...>` so the backend is chosen at
//! startup (PostgreSQL in `mycofind-db`, or [`InMemoryStore`]).

pub mod memory;

use async_trait::async_trait;

use crate::species::MushroomInfo;
use crate::spot::{MushroomSpot, SpotChanges};
use crate::status::StatusCheck;

pub use memory::InMemoryStore;

/// Boxed backend error; the gateway does not distinguish fault kinds.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(#[source] BoxError),
}

impl StoreError {
    pub fn backend(err: impl Into<BoxError>) -> Self {
        StoreError::Backend(err.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The `mushroom_spots` collection.
#[async_trait]
pub trait SpotStore: Send + Sync {
    async fn insert(&self, spot: &MushroomSpot) -> StoreResult<()>;

    /// Up to `limit` spots, most recent `timestamp` first.
    async fn list_recent(&self, limit: usize) -> StoreResult<Vec<MushroomSpot>>;

    /// Up to `limit` spots in collection (insertion) order.
    async fn scan(&self, limit: usize) -> StoreResult<Vec<MushroomSpot>>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<MushroomSpot>>;

    /// Write the present fields of `changes`. Returns `false` if no spot has
    /// this id.
    async fn update(&self, id: &str, changes: &SpotChanges) -> StoreResult<bool>;

    /// Returns `false` if no spot has this id.
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}

/// The `mushroom_database` collection.
#[async_trait]
pub trait SpeciesStore: Send + Sync {
    async fn insert(&self, info: &MushroomInfo) -> StoreResult<()>;

    /// Up to `limit` records in collection order.
    async fn list(&self, limit: usize) -> StoreResult<Vec<MushroomInfo>>;

    /// Up to `limit` records whose common or latin name contains `term`,
    /// ignoring case. `term` is literal text.
    async fn search(&self, term: &str, limit: usize) -> StoreResult<Vec<MushroomInfo>>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<MushroomInfo>>;

    /// Replace every field of the record with `info.id`. Returns `false` if
    /// it does not exist.
    async fn replace(&self, info: &MushroomInfo) -> StoreResult<bool>;

    /// Returns `false` if no record has this id.
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}

/// The `status_checks` collection.
#[async_trait]
pub trait StatusStore: Send + Sync {
    async fn insert(&self, check: &StatusCheck) -> StoreResult<()>;

    /// Up to `limit` checks in insertion order.
    async fn list(&self, limit: usize) -> StoreResult<Vec<StatusCheck>>;
}

/// Backend liveness probe used by `/health`.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> StoreResult<()>;
}
