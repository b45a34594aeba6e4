//! Query-string parameter types.

use serde::Deserialize;

/// `?radius_km=` on the nearby endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct NearbyParams {
    pub radius_km: Option<f64>,
}

/// `?search=` on the species list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}
