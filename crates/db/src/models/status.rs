//! Row model for the `status_checks` table.

use mycofind_core::status::StatusCheck;
use mycofind_core::types::Timestamp;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct StatusCheckRow {
    pub id: String,
    pub client_name: String,
    pub checked_at: Timestamp,
}

impl From<StatusCheckRow> for StatusCheck {
    fn from(row: StatusCheckRow) -> Self {
        Self {
            id: row.id,
            client_name: row.client_name,
            timestamp: row.checked_at,
        }
    }
}
