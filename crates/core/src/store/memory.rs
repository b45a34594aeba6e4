//! In-memory persistence gateway.
//!
//! Collections are plain vectors in insertion order behind async locks.
//! Used by tests and by `STORE_BACKEND=memory`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{SpeciesStore, SpotStore, StatusStore, StoreHealth, StoreResult};
use crate::species::MushroomInfo;
use crate::spot::{MushroomSpot, SpotChanges};
use crate::status::StatusCheck;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    spots: RwLock<Vec<MushroomSpot>>,
    species: RwLock<Vec<MushroomInfo>>,
    status_checks: RwLock<Vec<StatusCheck>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SpotStore for InMemoryStore {
    async fn insert(&self, spot: &MushroomSpot) -> StoreResult<()> {
        self.spots.write().await.push(spot.clone());
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> StoreResult<Vec<MushroomSpot>> {
        // Reverse first so the stable sort breaks timestamp ties newest-inserted first.
        let mut spots: Vec<MushroomSpot> = self.spots.read().await.iter().rev().cloned().collect();
        spots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        spots.truncate(limit);
        Ok(spots)
    }

    async fn scan(&self, limit: usize) -> StoreResult<Vec<MushroomSpot>> {
        Ok(self.spots.read().await.iter().take(limit).cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<MushroomSpot>> {
        Ok(self.spots.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn update(&self, id: &str, changes: &SpotChanges) -> StoreResult<bool> {
        let mut spots = self.spots.write().await;
        match spots.iter_mut().find(|s| s.id == id) {
            Some(spot) => {
                spot.apply(changes);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut spots = self.spots.write().await;
        let before = spots.len();
        spots.retain(|s| s.id != id);
        Ok(spots.len() < before)
    }
}

#[async_trait]
impl SpeciesStore for InMemoryStore {
    async fn insert(&self, info: &MushroomInfo) -> StoreResult<()> {
        self.species.write().await.push(info.clone());
        Ok(())
    }

    async fn list(&self, limit: usize) -> StoreResult<Vec<MushroomInfo>> {
        Ok(self.species.read().await.iter().take(limit).cloned().collect())
    }

    async fn search(&self, term: &str, limit: usize) -> StoreResult<Vec<MushroomInfo>> {
        Ok(self
            .species
            .read()
            .await
            .iter()
            .filter(|info| info.matches_name(term))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<MushroomInfo>> {
        Ok(self.species.read().await.iter().find(|i| i.id == id).cloned())
    }

    async fn replace(&self, info: &MushroomInfo) -> StoreResult<bool> {
        let mut species = self.species.write().await;
        match species.iter_mut().find(|i| i.id == info.id) {
            Some(existing) => {
                *existing = info.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut species = self.species.write().await;
        let before = species.len();
        species.retain(|i| i.id != id);
        Ok(species.len() < before)
    }
}

#[async_trait]
impl StatusStore for InMemoryStore {
    async fn insert(&self, check: &StatusCheck) -> StoreResult<()> {
        self.status_checks.write().await.push(check.clone());
        Ok(())
    }

    async fn list(&self, limit: usize) -> StoreResult<Vec<StatusCheck>> {
        Ok(self.status_checks.read().await.iter().take(limit).cloned().collect())
    }
}

#[async_trait]
impl StoreHealth for InMemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
