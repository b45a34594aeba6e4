//! Species service: CRUD and name search over `mushroom_database`.

use std::sync::Arc;

use crate::error::CoreError;
use crate::search::{normalize_search, SPECIES_LIST_CAP};
use crate::species::{CreateMushroomInfo, MushroomInfo};
use crate::store::SpeciesStore;
use crate::types::RecordId;

/// Entity name used in not-found errors.
pub const SPECIES_ENTITY: &str = "Mushroom";

#[derive(Clone)]
pub struct SpeciesService {
    store: Arc<dyn SpeciesStore>,
}

impl SpeciesService {
    pub fn new(store: Arc<dyn SpeciesStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: CreateMushroomInfo) -> Result<MushroomInfo, CoreError> {
        let info = MushroomInfo::new(input);
        self.store.insert(&info).await?;
        Ok(info)
    }

    /// Up to [`SPECIES_LIST_CAP`] records, filtered by a case-insensitive
    /// substring of the common or latin name when `search` is non-empty.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<MushroomInfo>, CoreError> {
        let records = match normalize_search(search) {
            Some(term) => self.store.search(term, SPECIES_LIST_CAP).await?,
            None => self.store.list(SPECIES_LIST_CAP).await?,
        };
        Ok(records)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<MushroomInfo, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Full replace. Only the id survives from the previous record; omitted
    /// defaulted fields come back empty.
    pub async fn update(
        &self,
        id: &str,
        input: CreateMushroomInfo,
    ) -> Result<MushroomInfo, CoreError> {
        self.get_by_id(id).await?;
        let info = MushroomInfo::with_id(id.to_string(), input);
        if !self.store.replace(&info).await? {
            return Err(not_found(id));
        }
        Ok(info)
    }

    /// Returns the id of the deleted record.
    pub async fn delete(&self, id: &str) -> Result<RecordId, CoreError> {
        if self.store.delete(id).await? {
            Ok(id.to_string())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: SPECIES_ENTITY,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::species::DangerLevel;
    use crate::store::InMemoryStore;

    fn service() -> SpeciesService {
        SpeciesService::new(Arc::new(InMemoryStore::new()))
    }

    fn input(common_name: &str, latin_name: &str) -> CreateMushroomInfo {
        serde_json::from_value(json!({
            "common_name": common_name,
            "latin_name": latin_name,
            "edibility": "comestible",
            "season": "Automne",
            "description": "Description",
            "characteristics": ["Chapeau brun"],
            "habitat": "Forêt",
            "lookalikes": [{
                "name": "Amanite phalloïde",
                "latin_name": "Amanita phalloides",
                "difference": "Volve à la base",
                "danger_level": "mortel"
            }],
            "photo_urls": ["https://example.org/cepe.jpg"]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn create_then_get() {
        let svc = service();
        let created = svc.create(input("Cèpe de Bordeaux", "Boletus edulis")).await.unwrap();
        assert_eq!(created.lookalikes[0].danger_level, DangerLevel::Mortel);
        assert_eq!(svc.get_by_id(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn search_matches_either_name_ignoring_case() {
        let svc = service();
        let cepe = svc.create(input("Cèpe de Bordeaux", "Boletus edulis")).await.unwrap();
        svc.create(input("Girolle", "Cantharellus cibarius")).await.unwrap();

        for term in ["cèpe", "CÈPE", "Bordeaux", "edulis", "BOLETUS ED"] {
            let found = svc.list(Some(term)).await.unwrap();
            assert_eq!(found.len(), 1, "term {term:?}");
            assert_eq!(found[0].id, cepe.id);
        }

        assert!(svc.list(Some("amanita")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_search_lists_everything() {
        let svc = service();
        svc.create(input("Cèpe de Bordeaux", "Boletus edulis")).await.unwrap();
        svc.create(input("Girolle", "Cantharellus cibarius")).await.unwrap();

        assert_eq!(svc.list(None).await.unwrap().len(), 2);
        assert_eq!(svc.list(Some("")).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn listing_is_capped() {
        let svc = service();
        for i in 0..(SPECIES_LIST_CAP + 5) {
            svc.create(input(&format!("Bolet {i}"), "Boletus")).await.unwrap();
        }
        assert_eq!(svc.list(None).await.unwrap().len(), SPECIES_LIST_CAP);
        assert_eq!(svc.list(Some("bolet")).await.unwrap().len(), SPECIES_LIST_CAP);
    }

    #[tokio::test]
    async fn replace_update_resets_omitted_fields_and_keeps_id() {
        let svc = service();
        let created = svc.create(input("Cèpe de Bordeaux", "Boletus edulis")).await.unwrap();
        assert!(!created.lookalikes.is_empty());

        let replacement: CreateMushroomInfo = serde_json::from_value(json!({
            "id": "attempted-override",
            "common_name": "Cèpe",
            "latin_name": "Boletus edulis",
            "edibility": "comestible",
            "season": "Automne",
            "description": "Mis à jour",
            "characteristics": [],
            "habitat": "Forêt"
        }))
        .unwrap();

        let updated = svc.update(&created.id, replacement).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert!(updated.lookalikes.is_empty());
        assert!(updated.photo_urls.is_empty());
        assert_eq!(updated.common_name, "Cèpe");
        assert_eq!(svc.get_by_id(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let svc = service();
        assert_matches!(
            svc.update("nope", input("A", "B")).await,
            Err(CoreError::NotFound { entity: SPECIES_ENTITY, .. })
        );
    }

    #[tokio::test]
    async fn delete_returns_id_then_not_found() {
        let svc = service();
        let created = svc.create(input("Girolle", "Cantharellus cibarius")).await.unwrap();

        assert_eq!(svc.delete(&created.id).await.unwrap(), created.id);
        assert_matches!(svc.delete(&created.id).await, Err(CoreError::NotFound { .. }));
        assert_matches!(svc.get_by_id(&created.id).await, Err(CoreError::NotFound { .. }));
    }
}
