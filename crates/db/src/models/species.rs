//! Row model for the `mushroom_database` table. List fields are JSONB.

use mycofind_core::species::{Lookalike, MushroomInfo};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct SpeciesRow {
    pub id: String,
    pub common_name: String,
    pub latin_name: String,
    pub edibility: String,
    pub season: String,
    pub description: String,
    pub characteristics: Json<Vec<String>>,
    pub habitat: String,
    pub lookalikes: Json<Vec<Lookalike>>,
    pub photo_urls: Json<Vec<String>>,
    pub photos_base64: Json<Vec<String>>,
}

impl From<SpeciesRow> for MushroomInfo {
    fn from(row: SpeciesRow) -> Self {
        Self {
            id: row.id,
            common_name: row.common_name,
            latin_name: row.latin_name,
            edibility: row.edibility,
            season: row.season,
            description: row.description,
            characteristics: row.characteristics.0,
            habitat: row.habitat,
            lookalikes: row.lookalikes.0,
            photo_urls: row.photo_urls.0,
            photos_base64: row.photos_base64.0,
        }
    }
}
