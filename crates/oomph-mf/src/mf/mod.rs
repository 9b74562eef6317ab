//! Microformat parsing.
//!
//! ## Submodules
//!
//! - [`iso8601`] - Date normalization, parsing and formatting
//! - [`dom`] - Read-only field accessors over an HTML tree and link qualification
//! - [`core`] - Record types (`Contact`, `Event`, `AudioTrack`, `Coordinate`)
//! - [`parse`] - Record extraction

pub mod core;
pub mod dom;
pub mod iso8601;
pub mod parse;

#[cfg(test)]
mod tests;

pub use self::core::{AudioTrack, Contact, Coordinate, Event, EventLocation, EventTime, PostalAddress};
pub use dom::{DocumentLocation, Fragment};
pub use parse::{Extraction, extract, extract_html};
