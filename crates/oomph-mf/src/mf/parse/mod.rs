//! Microformat record extraction.
//!
//! ## Usage
//!
//! ```rust
//! use oomph_mf::mf::{DocumentLocation, extract_html};
//!
//! let location = DocumentLocation::parse("http://example.com/team/").unwrap();
//! let html = r#"<div class="vcard"><a class="url fn" href="jane.html">Jane Doe</a></div>"#;
//!
//! let extraction = extract_html(html, Some(&location));
//! assert_eq!(extraction.contacts[0].formatted_name, "Jane Doe");
//! assert_eq!(
//!     extraction.contacts[0].url.as_deref(),
//!     Some("http://example.com/team/jane.html")
//! );
//! ```

mod haudio;
mod hcalendar;
mod hcard;

use scraper::Html;
use serde::Serialize;

use crate::mf::core::{AudioTrack, Contact, Coordinate, Event, GeoQuery, PostalAddress};
use crate::mf::dom::{DocumentLocation, Fragment};

pub use haudio::parse_haudio;
pub use hcalendar::parse_hcalendar;
pub use hcard::parse_hcard;

/// Root class of each supported microformat.
pub const HCARD_ROOT: &str = "vcard";
pub const HCALENDAR_ROOT: &str = "vevent";
pub const HAUDIO_ROOT: &str = "haudio";

/// Everything one extraction pass found, in document order per kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extraction {
    pub contacts: Vec<Contact>,
    pub events: Vec<Event>,
    pub audio: Vec<AudioTrack>,
}

impl Extraction {
    /// Number of microformats found across all kinds.
    #[must_use]
    pub fn total(&self) -> usize {
        self.contacts.len() + self.events.len() + self.audio.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Coordinates given explicitly in the markup, contacts first.
    #[must_use]
    pub fn direct_coordinates(&self) -> Vec<Coordinate> {
        self.contacts
            .iter()
            .filter_map(|c| c.geo.clone())
            .chain(self.events.iter().filter_map(|e| e.geo.clone()))
            .collect()
    }

    /// Addresses that still need geocoding, contacts first.
    #[must_use]
    pub fn geo_queries(&self) -> Vec<GeoQuery> {
        self.contacts
            .iter()
            .filter_map(Contact::geo_query)
            .chain(self.events.iter().filter_map(Event::geo_query))
            .collect()
    }
}

/// Shared state of one extraction pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractContext<'l> {
    pub location: Option<&'l DocumentLocation>,
}

impl ExtractContext<'_> {
    /// Trims a link and resolves it against the document location.
    /// Empty links are absent.
    #[must_use]
    pub fn link(&self, raw: Option<&str>) -> Option<String> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
        Some(match self.location {
            Some(location) => location.qualify(raw),
            None => raw.to_string(),
        })
    }
}

/// ## Summary
/// Extracts every hCard, hCalendar and hAudio record from `document`.
///
/// Never fails: unreadable fields are left empty.
#[must_use]
#[tracing::instrument(skip_all, fields(location = ?location))]
pub fn extract(document: &Html, location: Option<&DocumentLocation>) -> Extraction {
    let ctx = ExtractContext { location };

    let extraction = Extraction {
        contacts: Fragment::roots(document, HCARD_ROOT)
            .into_iter()
            .map(|root| parse_hcard(root, &ctx))
            .collect(),
        events: Fragment::roots(document, HCALENDAR_ROOT)
            .into_iter()
            .map(|root| parse_hcalendar(root, &ctx))
            .collect(),
        audio: Fragment::roots(document, HAUDIO_ROOT)
            .into_iter()
            .map(|root| parse_haudio(root, &ctx))
            .collect(),
    };

    tracing::debug!(
        contacts = extraction.contacts.len(),
        events = extraction.events.len(),
        audio = extraction.audio.len(),
        "Extracted microformats"
    );

    extraction
}

/// Parses `html` and extracts its records.
#[must_use]
pub fn extract_html(html: &str, location: Option<&DocumentLocation>) -> Extraction {
    let document = Html::parse_document(html);
    extract(&document, location)
}

/// Reads the `adr` parts under `scope`, first match of each.
pub(crate) fn read_address(scope: Fragment<'_>) -> PostalAddress {
    PostalAddress {
        street: scope.text_of("street-address"),
        extended: scope.text_of("extended-address"),
        post_office_box: scope.text_of("post-office-box"),
        locality: scope.text_of("locality"),
        region: scope.text_of("region"),
        postal_code: scope.text_of("postal-code"),
        country: scope.text_of("country-name"),
    }
}

/// Reads an explicit `geo` under `scope`.
///
/// `latitude`/`longitude` come from their `title` attributes when the
/// latitude has a non-blank one, otherwise from their text. A `geo` element
/// without parts may carry `lat;lon` in its own `title`.
pub(crate) fn read_geo(scope: Fragment<'_>, name: &str) -> Option<Coordinate> {
    let geo = scope.find("geo")?;

    let latitude_title = geo
        .attr_of("latitude", "title")
        .filter(|title| !title.trim().is_empty());

    let coordinate = match latitude_title {
        Some(latitude) => Coordinate::from_text(
            latitude,
            geo.attr_of("longitude", "title").unwrap_or_default(),
            name,
        ),
        None if geo.find("latitude").is_some() => {
            Coordinate::from_text(&geo.text_of("latitude"), &geo.text_of("longitude"), name)
        }
        None => geo.attr("title").and_then(|title| {
            let (lat, lon) = title.split_once(';')?;
            Coordinate::from_text(lat, lon, name)
        }),
    };

    if coordinate.is_none() {
        tracing::debug!(name, "Unreadable geo markup, falling back to the address");
    }
    coordinate
}

/// A date-like field: the `title` attribute when present, else the text.
pub(crate) fn read_date_field(scope: Fragment<'_>, class: &str) -> Option<String> {
    let field = scope.find(class)?;
    let raw = field
        .attr("title")
        .map(str::to_string)
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| field.text());
    Some(raw)
}
