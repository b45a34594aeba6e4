//! Spot service: CRUD over `mushroom_spots` plus the nearby-radius query.

use std::sync::Arc;

use validator::Validate;

use crate::error::CoreError;
use crate::geo::{within_radius, Coordinates, DEFAULT_RADIUS_KM};
use crate::search::SPOT_SCAN_CAP;
use crate::spot::{CreateMushroomSpot, MushroomSpot, UpdateMushroomSpot};
use crate::store::SpotStore;

/// Entity name used in not-found errors.
pub const SPOT_ENTITY: &str = "Mushroom spot";

/// A radius query around a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub center: Coordinates,
    pub radius_km: f64,
}

impl NearbyQuery {
    /// `radius_km` defaults to [`DEFAULT_RADIUS_KM`].
    pub fn new(latitude: f64, longitude: f64, radius_km: Option<f64>) -> Self {
        Self {
            center: Coordinates::new(latitude, longitude),
            radius_km: radius_km.unwrap_or(DEFAULT_RADIUS_KM),
        }
    }
}

#[derive(Clone)]
pub struct SpotService {
    store: Arc<dyn SpotStore>,
}

impl SpotService {
    pub fn new(store: Arc<dyn SpotStore>) -> Self {
        Self { store }
    }

    /// Validate, assign id and timestamp, persist.
    pub async fn create(&self, input: CreateMushroomSpot) -> Result<MushroomSpot, CoreError> {
        input.validate()?;
        let spot = MushroomSpot::from_input(input);
        self.store.insert(&spot).await?;
        Ok(spot)
    }

    /// Every spot, newest first, capped at [`SPOT_SCAN_CAP`].
    pub async fn list_all(&self) -> Result<Vec<MushroomSpot>, CoreError> {
        Ok(self.store.list_recent(SPOT_SCAN_CAP).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<MushroomSpot, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Merge the patch's present, non-null fields into the stored spot.
    ///
    /// An empty patch performs no write. The returned record is re-read
    /// after the write.
    pub async fn update(
        &self,
        id: &str,
        patch: UpdateMushroomSpot,
    ) -> Result<MushroomSpot, CoreError> {
        let existing = self.get_by_id(id).await?;
        let changes = patch.into_changes()?;
        if changes.is_empty() {
            return Ok(existing);
        }
        if !self.store.update(id, &changes).await? {
            return Err(not_found(id));
        }
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// Spots within `query.radius_km` of `query.center` under the planar
    /// approximation, in collection order.
    pub async fn nearby(&self, query: NearbyQuery) -> Result<Vec<MushroomSpot>, CoreError> {
        let spots = self.store.scan(SPOT_SCAN_CAP).await?;
        Ok(spots
            .into_iter()
            .filter(|spot| within_radius(query.center, spot.coordinates(), query.radius_km))
            .collect())
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: SPOT_ENTITY,
        id: id.to_string(),
    }
}
