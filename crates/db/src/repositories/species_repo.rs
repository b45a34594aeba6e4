//! Repository for the `mushroom_database` table.

use mycofind_core::search::substring_pattern;
use mycofind_core::species::MushroomInfo;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::species::SpeciesRow;

const COLUMNS: &str = "id, common_name, latin_name, edibility, season, description, \
                       characteristics, habitat, lookalikes, photo_urls, photos_base64";

/// Provides CRUD and name search for species records.
pub struct SpeciesRepo;

impl SpeciesRepo {
    pub async fn insert(pool: &PgPool, info: &MushroomInfo) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO mushroom_database
                (id, common_name, latin_name, edibility, season, description,
                 characteristics, habitat, lookalikes, photo_urls, photos_base64)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(&info.id)
        .bind(&info.common_name)
        .bind(&info.latin_name)
        .bind(&info.edibility)
        .bind(&info.season)
        .bind(&info.description)
        .bind(Json(&info.characteristics))
        .bind(&info.habitat)
        .bind(Json(&info.lookalikes))
        .bind(Json(&info.photo_urls))
        .bind(Json(&info.photos_base64))
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Records in insertion order.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<SpeciesRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mushroom_database ORDER BY seq ASC LIMIT $1");
        sqlx::query_as::<_, SpeciesRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on common or latin name using
    /// ILIKE. The term is escaped so `%` and `_` match literally.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        limit: i64,
    ) -> Result<Vec<SpeciesRow>, sqlx::Error> {
        let pattern = substring_pattern(term);
        let query = format!(
            "SELECT {COLUMNS} FROM mushroom_database
             WHERE common_name ILIKE $1 ESCAPE '\\' OR latin_name ILIKE $1 ESCAPE '\\'
             ORDER BY seq ASC
             LIMIT $2"
        );
        sqlx::query_as::<_, SpeciesRow>(&query)
            .bind(&pattern)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<SpeciesRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mushroom_database WHERE id = $1");
        sqlx::query_as::<_, SpeciesRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every column of the row with `info.id`.
    ///
    /// Returns `false` if no such row exists.
    pub async fn replace(pool: &PgPool, info: &MushroomInfo) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE mushroom_database SET
                common_name = $2,
                latin_name = $3,
                edibility = $4,
                season = $5,
                description = $6,
                characteristics = $7,
                habitat = $8,
                lookalikes = $9,
                photo_urls = $10,
                photos_base64 = $11
             WHERE id = $1",
        )
        .bind(&info.id)
        .bind(&info.common_name)
        .bind(&info.latin_name)
        .bind(&info.edibility)
        .bind(&info.season)
        .bind(&info.description)
        .bind(Json(&info.characteristics))
        .bind(&info.habitat)
        .bind(Json(&info.lookalikes))
        .bind(Json(&info.photo_urls))
        .bind(Json(&info.photos_base64))
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a record. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mushroom_database WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
