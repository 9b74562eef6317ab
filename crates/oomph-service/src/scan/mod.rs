//! One scan of one document: extraction, geocoding and the final report.
//!
//! A session owns everything a scan produces. Starting a new scan while an
//! old one is still geocoding means invalidating the old session; its queue
//! stops at the next check and nothing it resolved afterwards is applied.

mod map;

use std::time::Duration;

use oomph_mf::mf::{AudioTrack, Contact, Coordinate, DocumentLocation, Event, Extraction};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::export::{ExportLink, ExportRecord, export_links};
use crate::geocode::{AddressResolutionQueue, Generation, GenerationToken, Geocoder};

pub use map::MapView;

#[derive(Debug)]
pub struct ScanSession {
    id: Uuid,
    extraction: Extraction,
    generation: Generation,
    /// Taken at creation; goes stale once the session is invalidated.
    token: GenerationToken,
}

impl ScanSession {
    #[must_use]
    pub fn new(extraction: Extraction) -> Self {
        let generation = Generation::new();
        Self {
            id: Uuid::now_v7(),
            extraction,
            token: generation.token(),
            generation,
        }
    }

    /// ## Summary
    /// Parses `html` and extracts its microformats into a new session.
    ///
    /// `location` is the URL the document was loaded from; relative links are
    /// qualified against it.
    ///
    /// ## Errors
    /// Returns an error if `location` is not an absolute URL.
    #[tracing::instrument(skip(html), fields(bytes = html.len()))]
    pub fn from_html(html: &str, location: Option<&str>) -> ServiceResult<Self> {
        let location = location.map(DocumentLocation::parse).transpose()?;
        let extraction = oomph_mf::mf::extract_html(html, location.as_ref());
        let session = Self::new(extraction);
        tracing::debug!(scan_id = %session.id, total = session.extraction.total(), "Scan started");
        Ok(session)
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub const fn extraction(&self) -> &Extraction {
        &self.extraction
    }

    /// Handle for cancelling this session from elsewhere.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation.clone()
    }

    /// Abandons in-flight geocoding for this session.
    pub fn invalidate(&self) {
        tracing::debug!(scan_id = %self.id, "Scan invalidated");
        self.generation.invalidate();
    }

    /// A queue over the addresses that still need geocoding.
    #[must_use]
    pub fn queue(&self, timeout: Duration) -> AddressResolutionQueue {
        AddressResolutionQueue::new(
            self.extraction.geo_queries(),
            self.token.clone(),
            timeout,
        )
    }

    /// ## Summary
    /// Geocodes pending addresses with `geocoder` and builds the report.
    ///
    /// Without a geocoder the report holds only coordinates given in the
    /// markup.
    ///
    /// ## Errors
    /// Returns `ServiceError::ScanInvalidated` if the session is invalidated
    /// before geocoding finishes.
    #[tracing::instrument(skip_all, fields(scan_id = %self.id))]
    pub async fn resolve(
        &self,
        geocoder: Option<&dyn Geocoder>,
        timeout: Duration,
    ) -> ServiceResult<ScanReport> {
        let mut coordinates = self.extraction.direct_coordinates();
        let pending = self.extraction.geo_queries().len();

        let geocoded = match geocoder {
            Some(geocoder) => {
                let resolved = self.queue(timeout).resolve(geocoder).await?;
                let count = resolved.len();
                coordinates.extend(resolved);
                count
            }
            None => 0,
        };

        tracing::info!(
            direct = coordinates.len() - geocoded,
            geocoded,
            unresolved = pending - geocoded,
            "Scan resolved"
        );
        Ok(self.report(coordinates, pending - geocoded))
    }

    /// Builds the report for already known `coordinates`.
    #[must_use]
    pub fn report(&self, coordinates: Vec<Coordinate>, unresolved: usize) -> ScanReport {
        let contacts = self
            .extraction
            .contacts
            .iter()
            .map(|c| Exported {
                links: export_links(ExportRecord::Contact(c)),
                record: c.clone(),
            })
            .collect();
        let events = self
            .extraction
            .events
            .iter()
            .map(|e| Exported {
                links: export_links(ExportRecord::Event(e)),
                record: e.clone(),
            })
            .collect();

        ScanReport {
            scan_id: self.id,
            total: self.extraction.total(),
            contacts,
            events,
            audio: self.extraction.audio.clone(),
            map_view: MapView::for_coordinates(&coordinates),
            coordinates,
            unresolved,
        }
    }
}

/// A record together with its export links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exported<T> {
    pub record: T,
    pub links: Vec<ExportLink>,
}

/// Everything the display side needs to render one scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub scan_id: Uuid,
    /// Number of microformats found.
    pub total: usize,
    pub contacts: Vec<Exported<Contact>>,
    pub events: Vec<Exported<Event>>,
    pub audio: Vec<AudioTrack>,
    pub coordinates: Vec<Coordinate>,
    pub map_view: Option<MapView>,
    /// Queued addresses that produced no coordinate.
    pub unresolved: usize,
}

#[cfg(test)]
mod tests {
    use futures::FutureExt;
    use futures::future::BoxFuture;
    use oomph_mf::mf::core::GeoQuery;

    use super::*;
    use crate::error::ServiceError;
    use crate::export::Provider;
    use crate::geocode::GeocodeResult;

    const PAGE: &str = r#"
        <div class="vcard">
          <span class="fn">Jane Doe</span>
          <span class="geo"><abbr class="latitude" title="10">N</abbr><abbr class="longitude" title="20">E</abbr></span>
        </div>
        <div class="vcard">
          <span class="fn">John Roe</span>
          <div class="adr"><span class="locality">Springfield</span></div>
        </div>
        <div class="vevent">
          <span class="summary">Launch</span>
          <abbr class="dtstart" title="2008-05-12">May 12</abbr>
          <span class="location">Moscone Center</span>
        </div>
    "#;

    /// Resolves every address to the same point.
    struct FixedGeocoder;

    impl Geocoder for FixedGeocoder {
        fn geocode<'a>(
            &'a self,
            _address: &'a str,
        ) -> BoxFuture<'a, GeocodeResult<Vec<Coordinate>>> {
            async { Ok(vec![Coordinate::new(30.0, 40.0, "service")]) }.boxed()
        }
    }

    #[test]
    fn session_extracts_and_queues() {
        let session = ScanSession::from_html(PAGE, Some("http://example.com/")).unwrap();
        assert_eq!(session.extraction().total(), 3);
        assert_eq!(session.queue(Duration::from_secs(1)).pending(), 2);
        assert_eq!(
            session.extraction().geo_queries()[0],
            GeoQuery::new(" Springfield   ", "John Roe")
        );
    }

    #[test]
    fn invalid_location_is_an_error() {
        let result = ScanSession::from_html(PAGE, Some("not a url"));
        assert!(matches!(result, Err(ServiceError::MfError(_))));
    }

    #[test_log::test(tokio::test)]
    async fn report_merges_direct_and_geocoded() {
        let session = ScanSession::from_html(PAGE, None).unwrap();
        let report = session
            .resolve(Some(&FixedGeocoder), Duration::from_secs(1))
            .await
            .unwrap();

        assert_eq!(report.scan_id, session.id());
        assert_eq!(report.total, 3);
        assert_eq!(
            report.coordinates,
            vec![
                Coordinate::new(10.0, 20.0, "Jane Doe"),
                Coordinate::new(30.0, 40.0, "John Roe"),
                Coordinate::new(30.0, 40.0, "Launch"),
            ]
        );
        assert_eq!(report.unresolved, 0);
        assert!(matches!(report.map_view, Some(MapView::Bounds { .. })));

        assert_eq!(report.contacts[0].links[0].provider, Provider::Yahoo);
        assert_eq!(report.events[0].links.len(), 6);
    }

    #[tokio::test]
    async fn without_geocoder_only_direct_coordinates() {
        let session = ScanSession::from_html(PAGE, None).unwrap();
        let report = session.resolve(None, Duration::from_secs(1)).await.unwrap();

        assert_eq!(report.coordinates, vec![Coordinate::new(10.0, 20.0, "Jane Doe")]);
        assert_eq!(report.unresolved, 2);
        assert!(matches!(report.map_view, Some(MapView::Center { zoom: 13, .. })));
    }

    #[tokio::test]
    async fn invalidated_session_reports_nothing() {
        let session = ScanSession::from_html(PAGE, None).unwrap();
        session.invalidate();

        let result = session
            .resolve(Some(&FixedGeocoder), Duration::from_secs(1))
            .await;
        assert!(matches!(result, Err(ServiceError::ScanInvalidated)));
    }

    #[test]
    fn report_serializes_to_json() {
        let session = ScanSession::from_html(PAGE, None).unwrap();
        let report = session.report(Vec::new(), 2);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["total"], 3);
        assert_eq!(json["contacts"][0]["record"]["formatted_name"], "Jane Doe");
        assert_eq!(json["events"][0]["record"]["location"]["kind"], "plain_text");
        assert!(json["map_view"].is_null());
    }
}
