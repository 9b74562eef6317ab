//! ISO 8601 formatting.

use chrono::{Datelike, Timelike};

use super::Iso8601Time;

/// Formats a parsed time as ISO 8601, punctuated or compact.
///
/// Date-only values render as a date. Milliseconds are written only when
/// non-zero.
#[must_use]
pub fn format(time: &Iso8601Time, punctuation: bool) -> String {
    let t = &time.local;
    let date_sep = if punctuation { "-" } else { "" };
    let mut out = format!(
        "{:04}{date_sep}{:02}{date_sep}{:02}",
        t.year(),
        t.month(),
        t.day()
    );

    if time.has_time {
        let time_sep = if punctuation { ":" } else { "" };
        out.push_str(&format!(
            "T{:02}{time_sep}{:02}{time_sep}{:02}",
            t.hour(),
            t.minute(),
            t.second()
        ));
        let millis = t.nanosecond() / 1_000_000;
        if millis > 0 {
            if punctuation {
                out.push('.');
            }
            out.push_str(&format!("{millis:03}"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;
    use crate::mf::iso8601::parse_with_host_offset;

    fn parsed(iso: &str) -> Iso8601Time {
        let utc = FixedOffset::east_opt(0).expect("zero offset is valid");
        parse_with_host_offset(iso, utc).expect("should parse")
    }

    #[test]
    fn date_only() {
        let t = parsed("2008-05-02");
        assert_eq!(format(&t, true), "2008-05-02");
        assert_eq!(format(&t, false), "20080502");
    }

    #[test]
    fn date_time() {
        let t = parsed("2008-05-02T04:03:09");
        assert_eq!(format(&t, true), "2008-05-02T04:03:09");
        assert_eq!(format(&t, false), "20080502T040309");
    }

    #[test]
    fn millis_only_when_present() {
        let t = parsed("2008-05-02T04:03:09.05");
        assert_eq!(format(&t, true), "2008-05-02T04:03:09.050");
        assert_eq!(format(&t, false), "20080502T040309050");
    }
}
