//! hCard parsing.

use super::{ExtractContext, read_address, read_date_field, read_geo};
use crate::mf::core::{Contact, Organization, PhoneKind, Phones, StructuredName};
use crate::mf::dom::Fragment;
use crate::mf::iso8601;

/// Builds a [`Contact`] from a `vcard` element.
#[must_use]
pub fn parse_hcard(root: Fragment<'_>, ctx: &ExtractContext<'_>) -> Contact {
    let formatted_name = root.text_of("fn");

    let contact = Contact {
        name_text: root.text_of("n"),
        name: StructuredName {
            given: root.text_of("given-name"),
            family: root.text_of("family-name"),
            additional: root.text_of("additional-name"),
            prefix: root.text_of("honorific-prefix"),
            suffix: root.text_of("honorific-suffix"),
        },
        nickname: root.text_of("nickname"),
        org: Organization {
            text: root.text_of("org"),
            name: root.text_of("organization-name"),
            unit: root.text_of("organization-unit"),
        },
        title: root.text_of("title"),
        role: root.text_of("role"),
        email: read_email(root),
        note: root.text_of("note"),
        address: read_address(root),
        photo: ctx.link(root.probe_attr("photo", "img", "src")),
        phones: read_phones(root),
        url: ctx.link(root.probe_attr("url", "a", "href")),
        geo: read_geo(root, &formatted_name),
        birthday: read_date_field(root, "bday").and_then(|raw| iso8601::normalize(&raw, false)),
        category: root.text_of("category"),
        revision: read_date_field(root, "rev").and_then(|raw| iso8601::normalize(&raw, false)),
        uid: root.text_of("uid"),
        mailer: root.text_of("mailer"),
        formatted_name,
    };

    tracing::trace!(
        name = %contact.formatted_name,
        has_geo = contact.geo.is_some(),
        "Parsed hCard"
    );
    contact
}

/// The address of a `mailto:` link when present, else the element text.
fn read_email(root: Fragment<'_>) -> String {
    let Some(email) = root.find("email") else {
        return String::new();
    };

    email
        .attr("href")
        .and_then(|href| href.trim().strip_prefix("mailto:"))
        .map(|addr| addr.split('?').next().unwrap_or_default().to_string())
        .filter(|addr| !addr.is_empty())
        .unwrap_or_else(|| email.text())
}

/// Reads every `tel`, keyed by its `type` children. Untyped numbers count as
/// work numbers.
fn read_phones(root: Fragment<'_>) -> Phones {
    let mut phones = Phones::default();

    for tel in root.find_all("tel") {
        let types = tel.find_all("type");
        let number = match tel.find("value") {
            Some(value) => value.text(),
            None => {
                let mut text = tel.text();
                for t in &types {
                    text = text.replacen(&t.text(), "", 1);
                }
                text.trim_start_matches(|c: char| c == ':' || c.is_whitespace())
                    .trim()
                    .to_string()
            }
        };

        if number.is_empty() {
            continue;
        }

        let kinds: Vec<PhoneKind> = types
            .iter()
            .filter_map(|t| PhoneKind::from_type(&t.text()))
            .collect();

        if kinds.is_empty() {
            if types.is_empty() {
                phones.insert_first(PhoneKind::Work, number);
            } else {
                tracing::trace!(number, "Skipping tel with unrecognized type");
            }
            continue;
        }

        for kind in kinds {
            phones.insert_first(kind, number.clone());
        }
    }

    phones
}
