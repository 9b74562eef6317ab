//! hCalendar event records.

use oomph_core::constants::DESCRIPTION_MAX_CHARS;
use serde::Serialize;

use super::contact::PostalAddress;
use super::geo::{Coordinate, GeoQuery};
use crate::mf::iso8601::{self, Iso8601Time};

const ELLIPSIS: &str = "...";

/// Where an event takes place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EventLocation {
    /// Free text, shown as-is.
    PlainText(String),
    /// The location element was itself an hCard; its address parts.
    NestedAddress(PostalAddress),
}

impl Default for EventLocation {
    fn default() -> Self {
        Self::PlainText(String::new())
    }
}

impl EventLocation {
    /// Text used for export links and geocoding.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::PlainText(text) => text.clone(),
            Self::NestedAddress(address) => address.one_line(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::PlainText(text) => text.trim().is_empty(),
            Self::NestedAddress(address) => address.is_empty(),
        }
    }
}

/// A start or end timestamp in all the forms consumers need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventTime {
    /// Attribute value as authored.
    pub raw: String,
    pub punctuated: String,
    pub compact: String,
    pub time: Iso8601Time,
    /// `time` rendered in the host zone, for display.
    pub local: String,
}

impl EventTime {
    /// Builds a timestamp from an attribute value.
    ///
    /// Empty values and values that do not normalize or parse are absent.
    #[must_use]
    pub fn from_raw(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let punctuated = iso8601::normalize(raw, true)?;
        let compact = iso8601::normalize(raw, false)?;
        let time = iso8601::parse(&punctuated)?;

        Some(Self {
            raw: raw.to_string(),
            punctuated,
            compact,
            local: iso8601::format(&time, true),
            time,
        })
    }
}

/// An event extracted from hCalendar markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Event {
    pub summary: String,
    /// Already truncated for display.
    pub description: String,
    pub location: EventLocation,
    pub geo: Option<Coordinate>,
    pub start: Option<EventTime>,
    pub end: Option<EventTime>,
    pub url: Option<String>,
}

impl Event {
    /// The geocoding request for an event with a location but no coordinates.
    #[must_use]
    pub fn geo_query(&self) -> Option<GeoQuery> {
        if self.geo.is_some() || self.location.is_empty() {
            return None;
        }
        Some(GeoQuery::new(self.location.text(), self.summary.clone()))
    }
}

/// Shortens descriptions longer than 150 characters to 147 characters plus
/// an ellipsis.
#[must_use]
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_MAX_CHARS {
        return description.to_string();
    }
    let keep = DESCRIPTION_MAX_CHARS - ELLIPSIS.len();
    let mut truncated: String = description.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
