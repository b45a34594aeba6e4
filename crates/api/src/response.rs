//! Response envelopes that are not domain records.

use mycofind_core::types::RecordId;
use serde::Serialize;

/// Greeting returned by `GET /api/`.
pub const ROOT_MESSAGE: &str = "Mushroom Finder API";

/// Body with a single human-readable message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Deletion confirmation that echoes the deleted id.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
    pub id: RecordId,
}
