//! Address geocoding.
//!
//! ## Submodules
//!
//! - [`queue`] - Sequential resolution of pending addresses for one scan
//! - [`nominatim`] - HTTP geocoder over a Nominatim-compatible search endpoint

pub mod nominatim;
pub mod queue;

use futures::future::BoxFuture;
use oomph_mf::mf::Coordinate;
use thiserror::Error;

pub use nominatim::NominatimGeocoder;
pub use queue::{AddressResolutionQueue, Generation, GenerationToken};

/// Failures of a single geocoding request.
///
/// The resolution queue turns every one of these into a miss.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid geocoder endpoint: {0}")]
    InvalidEndpoint(String),
}

pub type GeocodeResult<T> = std::result::Result<T, GeocodeError>;

/// Resolves free-text addresses into coordinates.
///
/// Results are ordered best match first. The names on returned coordinates
/// are whatever the service reports; the queue renames hits after the record
/// that asked for them.
pub trait Geocoder: Send + Sync {
    fn geocode<'a>(&'a self, address: &'a str) -> BoxFuture<'a, GeocodeResult<Vec<Coordinate>>>;
}
