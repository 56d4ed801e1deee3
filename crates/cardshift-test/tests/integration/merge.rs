//! Export into the card a contact was imported from.

use cardshift_test::ERIKA_V30;
use cardshift_test::rfc::rfc::vcard::VCardVersion;

use super::helpers::*;

const APPLE_EXTRAS: &str = "\
item1.URL;type=pref:http://de.wikipedia.org/\r\n\
item1.X-ABLABEL:_$!<HomePage>!$_\r\n\
X-ABUID:5AD380FD-B2DE-4261-BA99-DE1D1DB52FBE\\:ABPerson\r\n\
X-SOCIALPROFILE;type=twitter:http://twitter.com/erika\r\n\
TEL;TYPE=CELL:+49 170 1\r\n\
TEL;TYPE=CELL:+49 170 2\r\n\
TEL;TYPE=CELL:+49 170 3\r\n";

fn source() -> String {
    ERIKA_V30.replace(
        "URL:http://de.wikipedia.org/\r\n",
        APPLE_EXTRAS,
    )
}

#[test_log::test]
fn foreign_properties_survive_an_edit() {
    let imported = import(&source());
    let mut contact = imported.contact.clone();
    contact.note = Some("neu".to_string());
    contact.profession = None;

    let (_, text) = export_into(&contact, Some(imported.vcard), VCardVersion::V3);

    assert!(text.contains("item1.URL;TYPE=pref;VALUE=uri:http://de.wikipedia.org/\r\n"), "{text}");
    assert!(text.contains("item1.X-ABLABEL:_$!<HomePage>!$_\r\n"));
    assert!(text.contains("X-ABUID:5AD380FD-B2DE-4261-BA99-DE1D1DB52FBE\\:ABPerson\r\n"));
    assert!(text.contains("X-SOCIALPROFILE;TYPE=twitter:http://twitter.com/erika\r\n"));
    assert!(text.contains("TEL;TYPE=CELL:+49 170 3\r\n"));
    assert!(text.contains("NOTE:neu\r\n"));
    assert!(!text.contains("ROLE"));
}

#[test]
fn unchanged_contact_leaves_the_card_stable() {
    let imported = import(&source());
    let (card, first) = export_into(&imported.contact, Some(imported.vcard), VCardVersion::V3);
    let (_, second) = export_into(&imported.contact, Some(card), VCardVersion::V3);
    assert_eq!(first, second);
}

#[test]
fn merge_can_switch_version() {
    let imported = import(&source());
    let (_, text) = export_into(&imported.contact, Some(imported.vcard), VCardVersion::V4);

    assert!(text.starts_with("BEGIN:VCARD\r\nVERSION:4.0\r\n"));
    assert!(text.contains("X-SOCIALPROFILE;TYPE=twitter:http://twitter.com/erika\r\n"));
    assert!(text.contains("ADR;TYPE=HOME;LABEL="), "{text}");
    assert!(!text.contains("\r\nLABEL"));
    assert!(text.contains("PHOTO:data:image/jpeg;base64,"));

    let reimported = import(&text);
    assert_eq!(reimported.contact, imported.contact);
}

#[test]
fn cleared_slot_drops_overflow_numbers() {
    let imported = import(&source());
    assert_eq!(imported.contact.cellular_telephone1.as_deref(), Some("+49 170 1"));
    assert_eq!(imported.contact.cellular_telephone2.as_deref(), Some("+49 170 2"));
    assert!(imported.warnings.contains(WarningCode::DroppedValue));

    let mut contact = imported.contact.clone();
    contact.cellular_telephone2 = None;
    let (_, text) = export_into(&contact, Some(imported.vcard), VCardVersion::V3);
    assert!(!text.contains("+49 170 3"), "{text}");

    let reimported = import(&text).contact;
    assert_eq!(reimported.cellular_telephone1.as_deref(), Some("+49 170 1"));
    assert_eq!(reimported.cellular_telephone2, None);
}
