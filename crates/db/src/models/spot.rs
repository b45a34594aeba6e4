//! Row model for the `mushroom_spots` table.

use mycofind_core::spot::MushroomSpot;
use mycofind_core::types::Timestamp;
use sqlx::FromRow;

/// A row from `mushroom_spots`. The record's `timestamp` is stored as
/// `observed_at`.
#[derive(Debug, Clone, FromRow)]
pub struct SpotRow {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub mushroom_type: String,
    pub notes: String,
    pub photo_base64: Option<String>,
    pub observed_at: Timestamp,
    pub created_by: String,
}

impl From<SpotRow> for MushroomSpot {
    fn from(row: SpotRow) -> Self {
        Self {
            id: row.id,
            latitude: row.latitude,
            longitude: row.longitude,
            mushroom_type: row.mushroom_type,
            notes: row.notes,
            photo_base64: row.photo_base64,
            timestamp: row.observed_at,
            created_by: row.created_by,
        }
    }
}
