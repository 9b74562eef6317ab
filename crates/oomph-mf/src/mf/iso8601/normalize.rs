//! ISO 8601 normalization.

use super::Components;

/// Rebuilds a loosely formatted date or date-time in canonical form.
///
/// With `punctuation` the result reads `2008-05-12T14:03:00`, without it
/// `20080512T140300`. The `T` time separator is always written. When an hour
/// is present, missing minutes and seconds become `00`. A timezone designator
/// is copied through as found, offset digits included.
///
/// Returns `None` when the input holds no four-digit year.
#[must_use]
pub fn normalize(raw: &str, punctuation: bool) -> Option<String> {
    let Some(c) = Components::capture(raw) else {
        tracing::trace!(raw, "No ISO 8601 year found");
        return None;
    };

    let date_sep = if punctuation { "-" } else { "" };
    let time_sep = if punctuation { ":" } else { "" };

    let mut out = String::with_capacity(25);
    out.push_str(c.year);

    let Some(month) = c.month else {
        return Some(out);
    };
    out.push_str(date_sep);
    out.push_str(month);

    let Some(day) = c.day else {
        return Some(out);
    };
    out.push_str(date_sep);
    out.push_str(day);

    let Some(hour) = c.hour else {
        return Some(out);
    };
    out.push('T');
    out.push_str(hour);
    out.push_str(time_sep);
    out.push_str(c.minute.unwrap_or("00"));
    out.push_str(time_sep);
    out.push_str(c.second.unwrap_or("00"));

    if let Some(fraction) = c.fraction {
        if punctuation {
            out.push('.');
        }
        out.push_str(fraction);
    }

    if let Some(zone) = c.zone {
        out.push_str(zone);
        if zone != "Z"
            && let Some(hours) = c.offset_hours
        {
            out.push_str(hours);
            if let Some(minutes) = c.offset_minutes {
                out.push_str(minutes);
            }
        }
    }

    Some(out)
}
