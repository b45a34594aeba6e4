//! Species reference records (`mushroom_database`).

use serde::{Deserialize, Serialize};

use crate::search::contains_ignore_case;
use crate::types::{new_record_id, RecordId};

/// How dangerous it is to confuse a species with one of its lookalikes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DangerLevel {
    Mortel,
    Toxique,
    NonComestible,
}

/// A visually similar species and how to tell it apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lookalike {
    pub name: String,
    pub latin_name: String,
    pub difference: String,
    pub danger_level: DangerLevel,
}

/// A stored species record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MushroomInfo {
    pub id: RecordId,
    pub common_name: String,
    pub latin_name: String,
    /// Free text; the app uses `comestible`, `toxique`, `mortel`,
    /// `non_comestible` and `comestible_conditionnel`.
    pub edibility: String,
    pub season: String,
    pub description: String,
    pub characteristics: Vec<String>,
    pub habitat: String,
    pub lookalikes: Vec<Lookalike>,
    pub photo_urls: Vec<String>,
    pub photos_base64: Vec<String>,
}

/// Full species payload, used both to create and to replace a record.
///
/// Any `id` in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMushroomInfo {
    pub common_name: String,
    pub latin_name: String,
    pub edibility: String,
    pub season: String,
    pub description: String,
    pub characteristics: Vec<String>,
    pub habitat: String,
    #[serde(default)]
    pub lookalikes: Vec<Lookalike>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub photos_base64: Vec<String>,
}

impl MushroomInfo {
    /// Build a record with a freshly generated id.
    pub fn new(input: CreateMushroomInfo) -> Self {
        Self::with_id(new_record_id(), input)
    }

    /// Build a record under an existing id (full replace).
    pub fn with_id(id: RecordId, input: CreateMushroomInfo) -> Self {
        Self {
            id,
            common_name: input.common_name,
            latin_name: input.latin_name,
            edibility: input.edibility,
            season: input.season,
            description: input.description,
            characteristics: input.characteristics,
            habitat: input.habitat,
            lookalikes: input.lookalikes,
            photo_urls: input.photo_urls,
            photos_base64: input.photos_base64,
        }
    }

    /// Case-insensitive substring match on the common or latin name.
    pub fn matches_name(&self, term: &str) -> bool {
        contains_ignore_case(&self.common_name, term) || contains_ignore_case(&self.latin_name, term)
    }
}
