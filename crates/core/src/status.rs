//! Client status checks (`status_checks`), a connectivity probe used by
//! deployment scripts.

use serde::{Deserialize, Serialize};

use crate::types::{new_record_id, now, RecordId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: RecordId,
    pub client_name: String,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStatusCheck {
    pub client_name: String,
}

impl StatusCheck {
    pub fn new(input: CreateStatusCheck) -> Self {
        Self {
            id: new_record_id(),
            client_name: input.client_name,
            timestamp: now(),
        }
    }
}
