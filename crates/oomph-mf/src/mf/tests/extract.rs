use super::fixtures::{
    HAUDIO_TRACK, HCALENDAR_MALFORMED, HCALENDAR_NESTED_LOCATION, HCALENDAR_PLAIN,
    HCARD_COMPLETE, HCARD_GEO_BROKEN, HCARD_GEO_SHORTHAND, HCARD_GEO_TEXT, HCARD_NAME_ONLY,
    PAGE_LOCATION, PLAIN_PAGE,
};
use crate::mf::core::PhoneKind;
use crate::mf::{DocumentLocation, EventLocation, Extraction, extract_html};

fn scan(html: &str) -> Extraction {
    let location = DocumentLocation::parse(PAGE_LOCATION).expect("fixture location is valid");
    extract_html(html, Some(&location))
}

#[test_log::test]
fn complete_hcard_fields() {
    let extraction = scan(HCARD_COMPLETE);
    assert_eq!(extraction.contacts.len(), 1);
    let contact = &extraction.contacts[0];

    assert_eq!(contact.formatted_name, "Jane Q. Doe");
    assert_eq!(contact.name_text, "Dr. Jane Quinn Doe PhD");
    assert_eq!(contact.display_name(), "Dr. Jane Quinn Doe PhD");
    assert_eq!(contact.name.prefix, "Dr.");
    assert_eq!(contact.name.given, "Jane");
    assert_eq!(contact.name.additional, "Quinn");
    assert_eq!(contact.name.family, "Doe");
    assert_eq!(contact.name.suffix, "PhD");
    assert_eq!(contact.nickname, "JD");
    assert_eq!(contact.org.name, "Acme Corp");
    assert_eq!(contact.org.unit, "Research");
    assert_eq!(contact.org.name_with_unit(), "Acme Corp Research");
    assert_eq!(contact.title, "Chief Scientist");
    assert_eq!(contact.role, "Engineer");
    assert_eq!(contact.email, "jane@example.com");
    assert_eq!(contact.note, "Prefers email.");
    assert_eq!(contact.uid, "urn:uuid:1234");
    assert_eq!(contact.mailer, "PigeonMail");
    assert_eq!(contact.category, "Colleague");
}

#[test]
fn first_address_part_wins() {
    let extraction = scan(HCARD_COMPLETE);
    let address = &extraction.contacts[0].address;

    assert_eq!(address.street, "1 Main St");
    assert_eq!(address.extended, "Suite 200");
    assert_eq!(address.post_office_box, "PO 9");
    assert_eq!(address.locality, "Springfield");
    assert_eq!(address.region, "IL");
    assert_eq!(address.postal_code, "62701");
    assert_eq!(address.country, "USA");
    assert_eq!(address.street_lines(), "1 Main St Suite 200 PO 9");
}

#[test]
fn phones_keep_first_number_per_kind() {
    let extraction = scan(HCARD_COMPLETE);
    let phones = &extraction.contacts[0].phones;

    assert_eq!(phones.get(PhoneKind::Work), "+1-555-0100");
    assert_eq!(phones.get(PhoneKind::Fax), "+1-555-0101");
    assert_eq!(phones.get(PhoneKind::Cell), "+1-555-0102");
    assert_eq!(phones.get(PhoneKind::Home), "");
    assert_eq!(phones.iter().count(), 3);
}

#[test]
fn links_are_qualified_against_page() {
    let extraction = scan(HCARD_COMPLETE);
    let contact = &extraction.contacts[0];

    assert_eq!(
        contact.url.as_deref(),
        Some("http://example.com/people/jane.html")
    );
    assert_eq!(
        contact.photo.as_deref(),
        Some("http://example.com/img/jane.png")
    );
}

#[test]
fn links_without_location_are_kept_as_written() {
    let extraction = extract_html(HCARD_COMPLETE, None);
    let contact = &extraction.contacts[0];

    assert_eq!(contact.url.as_deref(), Some("../jane.html"));
    assert_eq!(contact.photo.as_deref(), Some("/img/jane.png"));
}

#[test]
fn scheme_links_are_not_qualified() {
    let extraction = scan(
        r#"<div class="vcard">
          <a class="url fn" href="mailto:jane@example.com">Jane</a>
          <img class="photo" src="data:image/png;base64,iVBORw0KGgo=">
        </div>"#,
    );
    let contact = &extraction.contacts[0];

    assert_eq!(contact.url.as_deref(), Some("mailto:jane@example.com"));
    assert_eq!(
        contact.photo.as_deref(),
        Some("data:image/png;base64,iVBORw0KGgo=")
    );
}

#[test]
fn dates_are_compact_normalized() {
    let extraction = scan(HCARD_COMPLETE);
    let contact = &extraction.contacts[0];

    assert_eq!(contact.birthday.as_deref(), Some("19700304"));
    assert_eq!(contact.revision.as_deref(), Some("20080512T140300Z"));
}

#[test]
fn explicit_geo_is_direct() {
    let extraction = scan(HCARD_COMPLETE);
    let geo = extraction.contacts[0].geo.as_ref().expect("geo present");

    assert!((geo.latitude - 39.7817).abs() < 1e-9);
    assert!((geo.longitude + 89.6501).abs() < 1e-9);
    assert_eq!(geo.name, "Jane Q. Doe");
    assert_eq!(extraction.direct_coordinates().len(), 1);
    assert!(extraction.geo_queries().is_empty());
}

#[test]
fn geo_from_text_and_shorthand() {
    let text = scan(HCARD_GEO_TEXT);
    let geo = text.contacts[0].geo.as_ref().expect("text geo");
    assert!((geo.latitude - 51.5).abs() < 1e-9);
    assert!((geo.longitude + 0.12).abs() < 1e-9);

    let shorthand = scan(HCARD_GEO_SHORTHAND);
    let geo = shorthand.contacts[0].geo.as_ref().expect("shorthand geo");
    assert!((geo.latitude - 37.386_013).abs() < 1e-9);
    assert!((geo.longitude + 122.082_932).abs() < 1e-9);
    assert_eq!(geo.name, "Shorthand Geo");
}

#[test]
fn blank_geo_titles_fall_back_to_text() {
    let extraction = scan(
        r#"<div class="vcard">
          <span class="fn">Blank Titles</span>
          <span class="geo">
            <abbr class="latitude" title="">37.5</abbr>
            <abbr class="longitude" title="">-122.1</abbr>
          </span>
        </div>"#,
    );
    let geo = extraction.contacts[0].geo.as_ref().expect("geo from text");

    assert!((geo.latitude - 37.5).abs() < 1e-9);
    assert!((geo.longitude + 122.1).abs() < 1e-9);
    assert!(extraction.geo_queries().is_empty());
}

#[test_log::test]
fn broken_geo_falls_back_to_geocoding() {
    let extraction = scan(HCARD_GEO_BROKEN);
    assert!(extraction.contacts[0].geo.is_none());
    assert!(extraction.direct_coordinates().is_empty());

    let queries = extraction.geo_queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].address, " Paris   ");
    assert_eq!(queries[0].name, "Broken Geo");
}

#[test]
fn name_only_contact_is_still_queued() {
    let extraction = scan(HCARD_NAME_ONLY);
    assert!(extraction.direct_coordinates().is_empty());

    let queries = extraction.geo_queries();
    assert_eq!(queries.len(), 1);
    assert!(queries[0].address.trim().is_empty());
    assert_eq!(queries[0].name, "Solo Person");
}

#[test_log::test]
fn plain_event_fields() {
    let extraction = scan(HCALENDAR_PLAIN);
    assert_eq!(extraction.events.len(), 1);
    let event = &extraction.events[0];

    assert_eq!(event.summary, "Product Launch");
    assert_eq!(
        event.location,
        EventLocation::PlainText("Moscone Center, San Francisco".to_string())
    );
    assert_eq!(
        event.url.as_deref(),
        Some("http://example.com/people/team/launch.html")
    );
    assert!(event.description.starts_with("Lorem ipsum"));
    assert!(event.description.ends_with("..."));
    assert_eq!(event.description.chars().count(), 150);
}

#[test]
fn event_timestamps_in_both_forms() {
    let extraction = scan(HCALENDAR_PLAIN);
    let event = &extraction.events[0];

    let start = event.start.as_ref().expect("start present");
    assert_eq!(start.raw, "2008-05-12T14:03-05:00");
    assert_eq!(start.punctuated, "2008-05-12T14:03:00-0500");
    assert_eq!(start.compact, "20080512T140300-0500");
    assert!(start.time.has_time);

    let end = event.end.as_ref().expect("end present");
    assert_eq!(end.punctuated, "2008-05-12T16:00:00");
    assert_eq!(end.compact, "20080512T160000");
}

#[test]
fn event_with_location_is_queued() {
    let extraction = scan(HCALENDAR_PLAIN);
    let queries = extraction.geo_queries();

    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].address, "Moscone Center, San Francisco");
    assert_eq!(queries[0].name, "Product Launch");
}

#[test]
fn nested_hcard_location() {
    let extraction = scan(HCALENDAR_NESTED_LOCATION);
    let event = &extraction.events[0];

    let EventLocation::NestedAddress(address) = &event.location else {
        panic!("expected a nested address, got {:?}", event.location);
    };
    assert_eq!(address.street, "10 Elm St");
    assert_eq!(address.locality, "Portland");
    assert_eq!(event.location.text(), "10 Elm St Portland OR 97201 USA");

    let start = event.start.as_ref().expect("start present");
    assert_eq!(start.compact, "20090102");
    assert!(!start.time.has_time);

    // The location hCard is a contact of its own.
    assert_eq!(extraction.contacts.len(), 1);
    assert_eq!(extraction.contacts[0].formatted_name, "Community Hall");
    assert_eq!(extraction.total(), 2);
}

#[test_log::test]
fn malformed_event_degrades_field_by_field() {
    let extraction = scan(HCALENDAR_MALFORMED);
    let event = &extraction.events[0];

    assert_eq!(event.summary, "Title Summary");
    assert!(event.start.is_none());
    assert!(event.end.is_none());
    assert!(event.location.is_empty());
    assert_eq!(
        event.url.as_deref(),
        Some("https://tickets.example.org/e/1")
    );
    assert!(extraction.geo_queries().is_empty());
}

#[test]
fn audio_track_fields_and_links() {
    let extraction = scan(HAUDIO_TRACK);
    assert_eq!(extraction.audio.len(), 1);
    let track = &extraction.audio[0];

    assert_eq!(track.title, "Start Wearing Purple");
    assert_eq!(track.album, "Gypsy Punks");
    assert_eq!(track.contributor, "Gogol Bordello");
    assert_eq!(track.duration, "PT3M39S");
    assert_eq!(track.position, "6");
    assert_eq!(track.published, "2005-08-09");
    assert_eq!(
        track.photo.as_deref(),
        Some("http://example.com/people/team/cover.jpg")
    );
    assert_eq!(
        track.sample.as_deref(),
        Some("http://example.com/audio/sample.mp3")
    );
    assert_eq!(
        track.enclosure.as_deref(),
        Some("http://cdn.example.net/full.mp3")
    );
    assert_eq!(track.payment.as_deref(), Some("http://example.com/buy"));
    assert!(extraction.geo_queries().is_empty());
}

#[test]
fn page_without_microformats() {
    let extraction = scan(PLAIN_PAGE);
    assert!(extraction.is_empty());
    assert_eq!(extraction.total(), 0);
}

#[test]
fn kinds_are_collected_together() {
    let page = format!("{HCARD_NAME_ONLY}{HCALENDAR_PLAIN}{HAUDIO_TRACK}");
    let extraction = scan(&page);

    assert_eq!(extraction.contacts.len(), 1);
    assert_eq!(extraction.events.len(), 1);
    assert_eq!(extraction.audio.len(), 1);

    let names: Vec<_> = extraction
        .geo_queries()
        .into_iter()
        .map(|q| q.name)
        .collect();
    assert_eq!(names, vec!["Solo Person", "Product Launch"]);
}
