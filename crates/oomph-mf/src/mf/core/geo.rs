//! Map coordinates and pending geocoding requests.

use serde::Serialize;

/// A point on the map with the name of the record it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            name: name.into(),
        }
    }

    /// Builds a coordinate from the text of `latitude`/`longitude` fields.
    ///
    /// Returns `None` unless both parse as finite numbers in range.
    #[must_use]
    pub fn from_text(latitude: &str, longitude: &str, name: impl Into<String>) -> Option<Self> {
        let lat: f64 = latitude.trim().parse().ok()?;
        let lon: f64 = longitude.trim().parse().ok()?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            tracing::debug!(latitude, longitude, "Geo coordinates out of range");
            return None;
        }
        Some(Self::new(lat, lon, name))
    }
}

/// A free-text address waiting to be geocoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoQuery {
    pub address: String,
    /// Display name of the owning record; becomes the coordinate's name.
    pub name: String,
}

impl GeoQuery {
    #[must_use]
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
        }
    }
}
