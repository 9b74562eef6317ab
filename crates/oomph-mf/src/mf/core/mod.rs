//! Record types built by the extractor.
//!
//! Records are plain owned data: once extracted they no longer reference the
//! document, so they can cross await points and threads.

mod audio;
mod contact;
mod event;
mod geo;

pub use audio::AudioTrack;
pub use contact::{Contact, Organization, PhoneKind, Phones, PostalAddress, StructuredName};
pub use event::{Event, EventLocation, EventTime, truncate_description};
pub use geo::{Coordinate, GeoQuery};
