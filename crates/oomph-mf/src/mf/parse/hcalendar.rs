//! hCalendar parsing.

use super::{ExtractContext, HCARD_ROOT, read_address, read_geo};
use crate::mf::core::{Event, EventLocation, EventTime, truncate_description};
use crate::mf::dom::Fragment;

/// Builds an [`Event`] from a `vevent` element.
#[must_use]
pub fn parse_hcalendar(root: Fragment<'_>, ctx: &ExtractContext<'_>) -> Event {
    let mut summary = root.text_of("summary");
    if summary.is_empty() {
        summary = root
            .attr_of("summary", "title")
            .map(|t| t.trim().to_string())
            .unwrap_or_default();
    }

    let event = Event {
        description: truncate_description(&root.text_of("description")),
        location: read_location(root),
        geo: read_geo(root, &summary),
        start: read_timestamp(root, "dtstart"),
        end: read_timestamp(root, "dtend"),
        url: ctx.link(root.probe_attr("url", "a", "href")),
        summary,
    };

    tracing::trace!(
        summary = %event.summary,
        has_start = event.start.is_some(),
        has_end = event.end.is_some(),
        "Parsed hCalendar"
    );
    event
}

/// Plain text, unless the `location` element is itself an hCard.
fn read_location(root: Fragment<'_>) -> EventLocation {
    match root.find("location") {
        Some(location) if location.has_class(HCARD_ROOT) => {
            EventLocation::NestedAddress(read_address(location))
        }
        Some(location) => EventLocation::PlainText(location.text()),
        None => EventLocation::default(),
    }
}

/// The `title` attribute (or HTML5 `datetime`) of a timestamp element.
fn read_timestamp(root: Fragment<'_>, class: &str) -> Option<EventTime> {
    let element = root.find(class)?;
    let raw = element.attr("title").or_else(|| element.attr("datetime"))?;
    if raw.trim().is_empty() {
        return None;
    }
    let time = EventTime::from_raw(raw);
    if time.is_none() {
        tracing::debug!(class, raw, "Ignoring unreadable timestamp");
    }
    time
}
