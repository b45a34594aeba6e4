//! Repository for the `mushroom_spots` table.

use mycofind_core::spot::{MushroomSpot, SpotChanges};
use sqlx::PgPool;

use crate::models::spot::SpotRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, latitude, longitude, mushroom_type, notes, photo_base64, observed_at, created_by";

/// Provides CRUD operations for mushroom spots.
pub struct SpotRepo;

impl SpotRepo {
    /// Insert a fully built spot.
    pub async fn insert(pool: &PgPool, spot: &MushroomSpot) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO mushroom_spots
                (id, latitude, longitude, mushroom_type, notes, photo_base64, observed_at, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&spot.id)
        .bind(spot.latitude)
        .bind(spot.longitude)
        .bind(&spot.mushroom_type)
        .bind(&spot.notes)
        .bind(&spot.photo_base64)
        .bind(spot.timestamp)
        .bind(&spot.created_by)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Most recent spots first; ties go to the later insert.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<SpotRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mushroom_spots ORDER BY observed_at DESC, seq DESC LIMIT $1"
        );
        sqlx::query_as::<_, SpotRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Spots in insertion order.
    pub async fn scan(pool: &PgPool, limit: i64) -> Result<Vec<SpotRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mushroom_spots ORDER BY seq ASC LIMIT $1");
        sqlx::query_as::<_, SpotRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<SpotRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mushroom_spots WHERE id = $1");
        sqlx::query_as::<_, SpotRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update. Only `Some` fields in `changes` are written.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        changes: &SpotChanges,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE mushroom_spots SET
                mushroom_type = COALESCE($2, mushroom_type),
                notes = COALESCE($3, notes),
                photo_base64 = COALESCE($4, photo_base64)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&changes.mushroom_type)
        .bind(&changes.notes)
        .bind(&changes.photo_base64)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a spot. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mushroom_spots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
