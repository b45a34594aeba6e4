//! Mushroom spot records: a geotagged observation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::geo::Coordinates;
use crate::patch::Patch;
use crate::types::{new_record_id, now, RecordId, Timestamp};

/// Author recorded when a spot is created without `created_by`.
pub const DEFAULT_CREATED_BY: &str = "Utilisateur";

fn default_created_by() -> String {
    DEFAULT_CREATED_BY.to_string()
}

/// A stored mushroom spot.
///
/// `timestamp` is the creation instant and is never bumped by updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MushroomSpot {
    pub id: RecordId,
    pub latitude: f64,
    pub longitude: f64,
    pub mushroom_type: String,
    pub notes: String,
    pub photo_base64: Option<String>,
    pub timestamp: Timestamp,
    pub created_by: String,
}

/// Input for creating a spot. `id` and `timestamp` are assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMushroomSpot {
    pub latitude: f64,
    pub longitude: f64,
    #[validate(length(min = 1, message = "mushroom_type must not be empty"))]
    pub mushroom_type: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub photo_base64: Option<String>,
    #[serde(default = "default_created_by")]
    pub created_by: String,
}

impl MushroomSpot {
    /// Build a new record from validated input, assigning a fresh id and the
    /// current timestamp.
    pub fn from_input(input: CreateMushroomSpot) -> Self {
        Self {
            id: new_record_id(),
            latitude: input.latitude,
            longitude: input.longitude,
            mushroom_type: input.mushroom_type,
            notes: input.notes,
            photo_base64: input.photo_base64,
            timestamp: now(),
            created_by: input.created_by,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Overwrite the fields present in `changes`. Everything else, including
    /// `timestamp`, is left alone.
    pub fn apply(&mut self, changes: &SpotChanges) {
        if let Some(mushroom_type) = &changes.mushroom_type {
            self.mushroom_type = mushroom_type.clone();
        }
        if let Some(notes) = &changes.notes {
            self.notes = notes.clone();
        }
        if let Some(photo) = &changes.photo_base64 {
            self.photo_base64 = Some(photo.clone());
        }
    }
}

/// Partial update payload. Every field may be missing, `null`, or a value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMushroomSpot {
    #[serde(default)]
    pub mushroom_type: Patch<String>,
    #[serde(default)]
    pub notes: Patch<String>,
    #[serde(default)]
    pub photo_base64: Patch<String>,
}

impl UpdateMushroomSpot {
    /// Reduce the patch to the fields that will actually be written.
    ///
    /// An explicit `null` is treated like a missing key: the stored value is
    /// kept. A present but empty `mushroom_type` is rejected.
    pub fn into_changes(self) -> Result<SpotChanges, CoreError> {
        if self.mushroom_type.as_value().is_some_and(|t| t.is_empty()) {
            return Err(CoreError::Validation(
                "mushroom_type must not be empty".into(),
            ));
        }
        Ok(SpotChanges {
            mushroom_type: self.mushroom_type.into_write(),
            notes: self.notes.into_write(),
            photo_base64: self.photo_base64.into_write(),
        })
    }
}

/// The write set of a spot update, as handed to the persistence gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotChanges {
    pub mushroom_type: Option<String>,
    pub notes: Option<String>,
    pub photo_base64: Option<String>,
}

impl SpotChanges {
    pub fn is_empty(&self) -> bool {
        self.mushroom_type.is_none() && self.notes.is_none() && self.photo_base64.is_none()
    }
}
