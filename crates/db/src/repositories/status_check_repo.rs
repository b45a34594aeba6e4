//! Repository for the `status_checks` table.

use mycofind_core::status::StatusCheck;
use sqlx::PgPool;

use crate::models::status::StatusCheckRow;

pub struct StatusCheckRepo;

impl StatusCheckRepo {
    pub async fn insert(pool: &PgPool, check: &StatusCheck) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO status_checks (id, client_name, checked_at) VALUES ($1, $2, $3)")
            .bind(&check.id)
            .bind(&check.client_name)
            .bind(check.timestamp)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<StatusCheckRow>, sqlx::Error> {
        sqlx::query_as::<_, StatusCheckRow>(
            "SELECT id, client_name, checked_at FROM status_checks ORDER BY seq ASC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
