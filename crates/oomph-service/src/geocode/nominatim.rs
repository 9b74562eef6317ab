use futures::future::BoxFuture;
use oomph_core::config::GeocoderConfig;
use oomph_mf::mf::Coordinate;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{GeocodeError, GeocodeResult, Geocoder};

/// One entry of a Nominatim `format=json` search response. Coordinates come
/// back as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

/// Geocoder backed by a Nominatim-compatible `/search` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    endpoint: Url,
}

impl NominatimGeocoder {
    /// ## Summary
    /// Builds a geocoder from the `geocoder` configuration section.
    ///
    /// ## Errors
    /// Returns an error if the endpoint is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &GeocoderConfig) -> GeocodeResult<Self> {
        let endpoint = Url::parse(config.endpoint.trim())
            .map_err(|e| GeocodeError::InvalidEndpoint(format!("{}: {e}", config.endpoint)))?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, endpoint })
    }

    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn search(&self, address: &str) -> GeocodeResult<Vec<Coordinate>> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("format", "json")
            .append_pair("limit", "1");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let places: Vec<Place> = response.json().await?;
        tracing::debug!(results = places.len(), "Geocoder responded");

        Ok(places
            .into_iter()
            .filter_map(|place| {
                let coordinate = Coordinate::from_text(&place.lat, &place.lon, place.display_name);
                if coordinate.is_none() {
                    tracing::debug!(lat = %place.lat, lon = %place.lon, "Skipping unreadable place");
                }
                coordinate
            })
            .collect())
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode<'a>(&'a self, address: &'a str) -> BoxFuture<'a, GeocodeResult<Vec<Coordinate>>> {
        Box::pin(self.search(address))
    }
}
