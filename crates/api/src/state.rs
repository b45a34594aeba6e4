use std::sync::Arc;

use mycofind_core::species_service::SpeciesService;
use mycofind_core::spot_service::SpotService;
use mycofind_core::store::{SpeciesStore, SpotStore, StatusStore, StoreHealth};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is an `Arc` or wraps one.
#[derive(Clone)]
pub struct AppState {
    /// Spot CRUD and nearby queries.
    pub spots: SpotService,
    /// Species CRUD and search.
    pub species: SpeciesService,
    /// Status-check collection, used directly by its handlers.
    pub status_checks: Arc<dyn StatusStore>,
    /// Backend liveness probe for `/health`.
    pub store_health: Arc<dyn StoreHealth>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire every service to a single backend implementing all gateway traits.
    pub fn from_store<S>(store: Arc<S>, config: ServerConfig) -> Self
    where
        S: SpotStore + SpeciesStore + StatusStore + StoreHealth + 'static,
    {
        Self {
            spots: SpotService::new(store.clone()),
            species: SpeciesService::new(store.clone()),
            status_checks: store.clone(),
            store_health: store,
            config: Arc::new(config),
        }
    }
}
