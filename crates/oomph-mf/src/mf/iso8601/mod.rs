//! Loose ISO 8601 handling for microformat date attributes.
//!
//! Authors write dates in many shapes (`20080512`, `2008-05-12 14:03`,
//! `2008-05-12T14:03:00-05:00`). Both the normalizer and the parser decompose
//! the input with the same pattern, so they agree on what each component is.

mod format;
mod normalize;
mod parse;

use std::sync::LazyLock;

use regex_lite::Regex;

pub use format::format;
pub use normalize::normalize;
pub use parse::{Iso8601Time, parse, parse_with_host_offset};

/// Year, then optional month, day, time, fraction and zone, each nested in the
/// previous. The search is unanchored: the first match anywhere in the input
/// wins.
static ISO8601_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d\d\d\d)(?:-?(\d\d)(?:-?(\d\d)(?:[T ](\d\d)(?::?(\d\d)(?::?(\d\d)(?:\.(\d+))?)?)?(?:([-+Z])(?:(\d\d)(?::?(\d\d))?)?)?)?)?)?",
    )
    .unwrap_or_else(|e| unreachable!("ISO 8601 pattern is a valid regex: {e}"))
});

/// The captured components of a loose ISO 8601 string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Components<'a> {
    pub year: &'a str,
    pub month: Option<&'a str>,
    pub day: Option<&'a str>,
    pub hour: Option<&'a str>,
    pub minute: Option<&'a str>,
    pub second: Option<&'a str>,
    pub fraction: Option<&'a str>,
    /// `Z`, `+` or `-`.
    pub zone: Option<&'a str>,
    pub offset_hours: Option<&'a str>,
    pub offset_minutes: Option<&'a str>,
}

impl<'a> Components<'a> {
    /// Splits `input` into components. `None` when no four-digit year is found.
    pub(crate) fn capture(input: &'a str) -> Option<Self> {
        let caps = ISO8601_PATTERN.captures(input)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str());

        Some(Self {
            year: group(1)?,
            month: group(2),
            day: group(3),
            hour: group(4),
            minute: group(5),
            second: group(6),
            fraction: group(7),
            zone: group(8),
            offset_hours: group(9),
            offset_minutes: group(10),
        })
    }
}
