use oomph_core::constants::{
    GOOGLE_CALENDAR_URL, ICALENDAR_SERVICE_URL, THIRTY_BOXES_URL, WINDOWS_LIVE_CALENDAR_URL,
    YAHOO_CALENDAR_URL,
};
use oomph_mf::mf::{Event, EventTime};

use super::query::QueryUrl;

fn compact(time: Option<&EventTime>) -> &str {
    time.map_or("", |t| t.compact.as_str())
}

/// Windows Live rejects the `T` separator and wants a trailing `Z`.
fn windows_live_time(time: &EventTime) -> String {
    let mut out = time.punctuated.replacen('T', " ", 1);
    out.push('Z');
    out
}

/// `.ics` download from the oomph server, used for Outlook and Apple.
pub(super) fn icalendar_service(e: &Event) -> String {
    QueryUrl::new(ICALENDAR_SERVICE_URL)
        .param("dtstart", compact(e.start.as_ref()))
        .param("dtend", compact(e.end.as_ref()))
        .param("location", &e.location.text())
        .param("summary", &e.summary)
        .param("description", &e.description)
        .finish()
}

pub(super) fn windows_live(e: &Event) -> Option<String> {
    let start = windows_live_time(e.start.as_ref()?);
    let end = e.end.as_ref().map(windows_live_time).unwrap_or_default();

    Some(
        QueryUrl::new(WINDOWS_LIVE_CALENDAR_URL)
            .param("Wxp_name", &e.summary)
            .param("Wxp_startDateTime", &start)
            .param("Wxp_endDateTime", &end)
            .param("Wxp_location", &e.location.text())
            .param("Wxp_description", &e.description)
            .finish(),
    )
}

/// Google requires an end; the start stands in when there is none.
pub(super) fn google(e: &Event) -> String {
    let start = compact(e.start.as_ref());
    let end = e.end.as_ref().map_or(start, |t| t.compact.as_str());

    QueryUrl::new(GOOGLE_CALENDAR_URL)
        .param("text", &e.summary)
        .param("dates", &format!("{start}/{end}"))
        .param("location", &e.location.text())
        .param("details", &e.description)
        .finish()
}

pub(super) fn yahoo(e: &Event) -> String {
    QueryUrl::new(YAHOO_CALENDAR_URL)
        .param("title", &e.summary)
        .param("st", compact(e.start.as_ref()))
        .param("rend", compact(e.end.as_ref()))
        .param("in_loc", &e.location.text())
        .param("url", e.url.as_deref().unwrap_or_default())
        .param("DESC", &e.description)
        .finish()
}

/// 30 Boxes parses a single free-text line.
pub(super) fn thirty_boxes(e: &Event) -> String {
    let start = e.start.as_ref().map_or("", |t| t.raw.as_str());
    let line = [
        e.summary.as_str(),
        start,
        e.description.as_str(),
        &e.location.text(),
    ]
    .join(" ");

    QueryUrl::new(THIRTY_BOXES_URL).param("e", &line).finish()
}
