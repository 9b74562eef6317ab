//! Microformat extraction for hCard, hCalendar and hAudio markup.

pub mod error;
pub mod mf;
