//! ISO 8601 parsing into a point in time.

use chrono::{FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone};
use serde::Serialize;

use super::Components;

/// A parsed microformat timestamp.
///
/// The value is wall-clock time in the host zone. `has_time` records whether
/// the source carried a time of day, which decides between date-only and
/// date-time rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Iso8601Time {
    pub local: NaiveDateTime,
    pub has_time: bool,
}

impl Iso8601Time {
    /// Returns the calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.local.date()
    }
}

/// Parses a normalized ISO 8601 string using the host's local UTC offset.
///
/// See [`parse_with_host_offset`] for the adjustment rules.
#[must_use]
pub fn parse(iso: &str) -> Option<Iso8601Time> {
    parse_in(iso, |naive| Local.offset_from_utc_datetime(&naive).fix())
}

/// Parses a normalized ISO 8601 string, with the host zone given explicitly.
///
/// Missing month and day default to January 1. Minutes are read only after an
/// hour, seconds only after minutes, milliseconds only after seconds.
///
/// When a zone designator is present the time is adjusted twice:
/// - a `-HH:MM` offset is added and a `+HH:MM` offset subtracted (both parts
///   must be present; `Z` and hour-only offsets skip this step),
/// - then the absolute size of the host offset is subtracted, whichever side
///   of UTC the host is on.
///
/// Returns `None` when no year is found or the date does not exist.
#[must_use]
pub fn parse_with_host_offset(iso: &str, host: FixedOffset) -> Option<Iso8601Time> {
    parse_in(iso, |_| host)
}

fn parse_in(iso: &str, host_offset: impl Fn(NaiveDateTime) -> FixedOffset) -> Option<Iso8601Time> {
    let c = Components::capture(iso)?;

    let year: i32 = c.year.parse().ok()?;
    let month = number(c.month).unwrap_or(1);
    let day = number(c.day).unwrap_or(1);
    let Some(date) = u32::try_from(month)
        .ok()
        .zip(u32::try_from(day).ok())
        .and_then(|(m, d)| NaiveDate::from_ymd_opt(year, m, d))
    else {
        tracing::debug!(iso, "ISO 8601 date does not exist");
        return None;
    };

    let mut local = date.and_time(chrono::NaiveTime::MIN);
    let mut has_time = false;

    if let Some(hour) = number(c.hour) {
        has_time = true;
        local += TimeDelta::hours(hour);
        if let Some(minute) = number(c.minute) {
            local += TimeDelta::minutes(minute);
            if let Some(second) = number(c.second) {
                local += TimeDelta::seconds(second);
                if let Some(fraction) = c.fraction {
                    local += TimeDelta::milliseconds(fraction_millis(fraction));
                }
            }
        }
    }

    if let Some(zone) = c.zone {
        if let (Some(hours), Some(minutes)) = (number(c.offset_hours), number(c.offset_minutes)) {
            let offset = TimeDelta::hours(hours) + TimeDelta::minutes(minutes);
            match zone {
                "-" => local += offset,
                "+" => local -= offset,
                _ => {}
            }
        }

        // Now in UTC; step to host time.
        let host_minutes = i64::from(host_offset(local).local_minus_utc() / 60);
        local -= TimeDelta::minutes(host_minutes.abs());
    }

    Some(Iso8601Time { local, has_time })
}

fn number(group: Option<&str>) -> Option<i64> {
    group.and_then(|g| g.parse().ok())
}

/// Milliseconds from a fraction-of-second digit string, truncated.
fn fraction_millis(fraction: &str) -> i64 {
    fraction
        .chars()
        .chain(std::iter::repeat('0'))
        .take(3)
        .filter_map(|c| c.to_digit(10))
        .fold(0, |acc, d| acc * 10 + i64::from(d))
}
