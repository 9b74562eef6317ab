//! hCard contact records.

use serde::Serialize;

use super::geo::{Coordinate, GeoQuery};

/// Structured name parts (`n` sub-properties).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuredName {
    pub given: String,
    pub family: String,
    pub additional: String,
    /// Honorific prefix (e.g., "Dr.").
    pub prefix: String,
    /// Honorific suffix (e.g., "Jr.").
    pub suffix: String,
}

/// Organization: the raw `org` text plus its name and unit parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub text: String,
    pub name: String,
    pub unit: String,
}

impl Organization {
    /// Name and unit joined by a space, as the vCard service expects.
    #[must_use]
    pub fn name_with_unit(&self) -> String {
        format!("{} {}", self.name, self.unit)
    }
}

/// Postal address (`adr` sub-properties). Only the first value of each part
/// found in a record is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostalAddress {
    pub street: String,
    pub extended: String,
    pub post_office_box: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl PostalAddress {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.extended.is_empty()
            && self.post_office_box.is_empty()
            && self.locality.is_empty()
            && self.region.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
    }

    /// Street, extended address and PO box joined by spaces.
    #[must_use]
    pub fn street_lines(&self) -> String {
        format!("{} {} {}", self.street, self.extended, self.post_office_box)
    }

    /// Single-line form handed to the geocoder.
    #[must_use]
    pub fn one_line(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.street, self.locality, self.region, self.postal_code, self.country
        )
    }
}

/// Telephone number types recognized in `tel` markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    Work,
    Fax,
    Home,
    Cell,
    Pager,
}

impl PhoneKind {
    pub const ALL: [Self; 5] = [Self::Work, Self::Fax, Self::Home, Self::Cell, Self::Pager];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Fax => "fax",
            Self::Home => "home",
            Self::Cell => "cell",
            Self::Pager => "pager",
        }
    }

    /// Matches a `type` value case-insensitively. `mobile` is read as cell.
    #[must_use]
    pub fn from_type(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("mobile") {
            return Some(Self::Cell);
        }
        Self::ALL
            .into_iter()
            .find(|kind| value.eq_ignore_ascii_case(kind.as_str()))
    }
}

impl std::fmt::Display for PhoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One number per phone kind; the first number seen for a kind wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Phones {
    pub work: String,
    pub fax: String,
    pub home: String,
    pub cell: String,
    pub pager: String,
}

impl Phones {
    #[must_use]
    pub fn get(&self, kind: PhoneKind) -> &str {
        match kind {
            PhoneKind::Work => &self.work,
            PhoneKind::Fax => &self.fax,
            PhoneKind::Home => &self.home,
            PhoneKind::Cell => &self.cell,
            PhoneKind::Pager => &self.pager,
        }
    }

    /// Stores `number` unless a number of that kind is already known.
    pub fn insert_first(&mut self, kind: PhoneKind, number: String) {
        let slot = match kind {
            PhoneKind::Work => &mut self.work,
            PhoneKind::Fax => &mut self.fax,
            PhoneKind::Home => &mut self.home,
            PhoneKind::Cell => &mut self.cell,
            PhoneKind::Pager => &mut self.pager,
        };
        if slot.is_empty() {
            *slot = number;
        }
    }

    /// Known numbers in display order.
    pub fn iter(&self) -> impl Iterator<Item = (PhoneKind, &str)> {
        PhoneKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, number)| !number.is_empty())
    }
}

/// A contact extracted from hCard markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contact {
    /// `fn`
    pub formatted_name: String,
    /// Raw text of the `n` element.
    pub name_text: String,
    pub name: StructuredName,
    pub nickname: String,
    pub org: Organization,
    pub title: String,
    pub role: String,
    pub email: String,
    pub note: String,
    pub address: PostalAddress,
    pub photo: Option<String>,
    pub phones: Phones,
    pub url: Option<String>,
    pub geo: Option<Coordinate>,
    /// Compact-normalized `bday`.
    pub birthday: Option<String>,
    pub category: String,
    /// Compact-normalized `rev`.
    pub revision: Option<String>,
    pub uid: String,
    pub mailer: String,
}

impl Contact {
    /// Name shown in the panel: the `n` text when present, else `fn`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name_text.is_empty() {
            &self.formatted_name
        } else {
            &self.name_text
        }
    }

    /// The geocoding request for a contact without explicit coordinates.
    ///
    /// Every such contact is queued, even with an empty address; the queue
    /// treats blank addresses as misses.
    #[must_use]
    pub fn geo_query(&self) -> Option<GeoQuery> {
        if self.geo.is_some() {
            return None;
        }
        Some(GeoQuery::new(
            self.address.one_line(),
            self.formatted_name.clone(),
        ))
    }
}
