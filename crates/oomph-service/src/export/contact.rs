use oomph_core::constants::{VCARD_SERVICE_URL, YAHOO_CONTACT_URL};
use oomph_mf::mf::Contact;
use oomph_mf::mf::core::PhoneKind;

use super::query::QueryUrl;

/// vCard download from the oomph server, used for Outlook and Apple.
pub(super) fn vcard_service(c: &Contact) -> String {
    let (latitude, longitude) = c
        .geo
        .as_ref()
        .map(|g| (g.latitude.to_string(), g.longitude.to_string()))
        .unwrap_or_default();

    QueryUrl::new(VCARD_SERVICE_URL)
        .param("fn", &c.formatted_name)
        .param("AdditionalName", &c.name.additional)
        .param("FamilyName", &c.name.family)
        .param("GivenName", &c.name.given)
        .param("NamePrefix", &c.name.prefix)
        .param("NameSuffix", &c.name.suffix)
        .param("NickName", &c.nickname)
        .param("Organization", &c.org.name_with_unit())
        .param("Role", &c.role)
        .param("Title", &c.title)
        .param("WorkEmail", &c.email)
        .param("note", &c.note)
        .param("adrWork", "true")
        .param("wStreet", &c.address.street_lines())
        .param("wCity", &c.address.locality)
        .param("wRegion", &c.address.region)
        .param("wPostalCode", &c.address.postal_code)
        .param("wCountry", &c.address.country)
        .param("photo", c.photo.as_deref().unwrap_or_default())
        .param("WorkPhone", c.phones.get(PhoneKind::Work))
        .param("WorkFax", c.phones.get(PhoneKind::Fax))
        .param("HomePhone", c.phones.get(PhoneKind::Home))
        .param("CellPhone", c.phones.get(PhoneKind::Cell))
        .param("Pager", c.phones.get(PhoneKind::Pager))
        .param("WorkWebsite", c.url.as_deref().unwrap_or_default())
        .param("bday", c.birthday.as_deref().unwrap_or_default())
        .param("latitude", &latitude)
        .param("longitude", &longitude)
        .param("category", &c.category)
        .param("rev", c.revision.as_deref().unwrap_or_default())
        .param("uid", &c.uid)
        .param("mailer", &c.mailer)
        .finish()
}

/// Yahoo address book entry: name, company, web page and email.
pub(super) fn yahoo_address_book(c: &Contact) -> String {
    QueryUrl::new(YAHOO_CONTACT_URL)
        .param("fn", &c.formatted_name)
        .param("co", &c.org.name)
        .param("pu", c.url.as_deref().unwrap_or_default())
        .param("e", &c.email)
        .finish()
}
