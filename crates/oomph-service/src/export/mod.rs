//! "Add to address book / calendar" links for extracted records.
//!
//! Each provider takes a fixed base URL plus query parameters in a fixed
//! order. Every value is percent-encoded. Missing fields are sent as empty
//! values, never dropped.

mod contact;
mod event;
mod query;

use oomph_mf::mf::{Contact, Event};
use serde::Serialize;

/// Export targets offered in the record panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Outlook,
    Apple,
    Google,
    Yahoo,
    WindowsLive,
    ThirtyBoxes,
    /// Plain `.ics` download from the oomph server.
    ICalendarService,
}

impl Provider {
    /// Contact panel, in display order.
    pub const CONTACT_PANEL: [Self; 3] = [Self::Yahoo, Self::Outlook, Self::Apple];

    /// Event panel, in display order.
    pub const EVENT_PANEL: [Self; 6] = [
        Self::Outlook,
        Self::WindowsLive,
        Self::Google,
        Self::Yahoo,
        Self::Apple,
        Self::ThirtyBoxes,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Outlook => "Outlook",
            Self::Apple => "Apple",
            Self::Google => "Google",
            Self::Yahoo => "Yahoo",
            Self::WindowsLive => "Windows Live",
            Self::ThirtyBoxes => "30 Boxes",
            Self::ICalendarService => "iCalendar",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A record that can be exported.
#[derive(Debug, Clone, Copy)]
pub enum ExportRecord<'a> {
    Contact(&'a Contact),
    Event(&'a Event),
}

/// One export link as shown in a record panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportLink {
    pub provider: Provider,
    pub url: String,
}

/// ## Summary
/// Builds the export URL of `record` for `provider`.
///
/// Returns `None` when the provider takes no records of that kind, and for
/// Windows Live when the event has no start time.
#[must_use]
pub fn build_url(provider: Provider, record: ExportRecord<'_>) -> Option<String> {
    match (record, provider) {
        (ExportRecord::Contact(c), Provider::Outlook | Provider::Apple) => {
            Some(contact::vcard_service(c))
        }
        (ExportRecord::Contact(c), Provider::Yahoo) => Some(contact::yahoo_address_book(c)),
        (
            ExportRecord::Event(e),
            Provider::Outlook | Provider::Apple | Provider::ICalendarService,
        ) => Some(event::icalendar_service(e)),
        (ExportRecord::Event(e), Provider::WindowsLive) => event::windows_live(e),
        (ExportRecord::Event(e), Provider::Google) => Some(event::google(e)),
        (ExportRecord::Event(e), Provider::Yahoo) => Some(event::yahoo(e)),
        (ExportRecord::Event(e), Provider::ThirtyBoxes) => Some(event::thirty_boxes(e)),
        (ExportRecord::Contact(_), _) => None,
    }
}

/// Every link available for `record`, in panel order.
#[must_use]
pub fn export_links(record: ExportRecord<'_>) -> Vec<ExportLink> {
    let panel: &[Provider] = match record {
        ExportRecord::Contact(_) => &Provider::CONTACT_PANEL,
        ExportRecord::Event(_) => &Provider::EVENT_PANEL,
    };

    panel
        .iter()
        .filter_map(|&provider| {
            build_url(provider, record).map(|url| ExportLink { provider, url })
        })
        .collect()
}
