//! Planar distance approximation used by the nearby-spot filter.
//!
//! One degree of latitude and one degree of longitude are both taken as
//! 111 km. There is no cosine correction for longitude, so distances are
//! overestimated east-west away from the equator. Callers rely on this exact
//! formula and on the inclusive `<=` threshold.

/// Kilometres per degree, applied uniformly to both axes.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Search radius used when a nearby query does not specify one.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// A latitude/longitude pair in decimal degrees. No range is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// `sqrt(|dlat|^2 + |dlon|^2) * 111`.
pub fn planar_distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_diff = (a.latitude - b.latitude).abs();
    let lon_diff = (a.longitude - b.longitude).abs();
    (lat_diff * lat_diff + lon_diff * lon_diff).sqrt() * KM_PER_DEGREE
}

/// Whether `point` lies within `radius_km` of `center` (inclusive).
pub fn within_radius(center: Coordinates, point: Coordinates, radius_km: f64) -> bool {
    planar_distance_km(center, point) <= radius_km
}
