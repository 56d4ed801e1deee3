//! Set, update and remove every text field through export and import.

use cardshift_test::core::contact::{
    AddressKind, AddressPart, Contact, ContactField, EmailSlot, PhoneSlot,
};
use cardshift_test::rfc::rfc::vcard::{VCard, VCardVersion};

use super::helpers::*;

fn value(field: ContactField, round: u8) -> String {
    match field {
        ContactField::Email(_) => format!("feld{round}@example.com"),
        ContactField::Telephone(_) => format!("+49 221 100{round}"),
        ContactField::Url => format!("https://example.com/{round}"),
        ContactField::Address(_, AddressPart::Label) => format!("Zeile {round}\nKöln"),
        _ => format!("Wert {round} für {field}"),
    }
}

/// Exports `contact` into `existing` and reads the result back.
fn cycle(contact: &Contact, existing: Option<VCard>, version: VCardVersion) -> (VCard, Contact) {
    let (card, text) = export_into(contact, existing, version);
    (card, import(&text).contact)
}

#[test_log::test]
fn every_field_can_be_set_updated_and_removed() {
    for version in VERSIONS {
        for field in ContactField::all() {
            let mut contact = Contact::new();

            contact.set_text(field, Some(value(field, 1)));
            let (card, imported) = cycle(&contact, None, version);
            assert_eq!(
                imported.get_text(field),
                Some(value(field, 1).as_str()),
                "set {field} in {version:?}"
            );

            contact.set_text(field, Some(value(field, 2)));
            let (card, imported) = cycle(&contact, Some(card), version);
            assert_eq!(
                imported.get_text(field),
                Some(value(field, 2).as_str()),
                "update {field} in {version:?}"
            );

            contact.set_text(field, None);
            let (_, imported) = cycle(&contact, Some(card), version);
            assert_eq!(imported.get_text(field), None, "remove {field} in {version:?}");
            assert_eq!(imported, Contact::new(), "remove {field} in {version:?}");
        }
    }
}

#[test]
fn empty_text_stays_apart_from_absent() {
    for version in VERSIONS {
        let contact = Contact {
            note: Some(String::new()),
            position: Some(String::new()),
            ..Contact::default()
        };
        let (card, imported) = cycle(&contact, None, version);
        assert_eq!(imported.note.as_deref(), Some(""), "{version:?}");
        assert_eq!(imported.position.as_deref(), Some(""), "{version:?}");
        assert_eq!(imported.profession, None, "{version:?}");

        let (_, cleared) = cycle(&Contact::new(), Some(card), version);
        assert_eq!(cleared, Contact::new(), "{version:?}");
    }
}

#[test]
fn merge_import_updates_only_present_fields() {
    let service = cardshift_test::service();
    let params = service.parameters();

    for field in ContactField::all() {
        let mut existing = full_contact();
        existing.set_text(field, Some(value(field, 7)));

        let mut update = Contact::new();
        update.set_text(field, Some(value(field, 8)));
        let text = export(&update, VCardVersion::V3);

        let merged = service
            .import_vcard(text.as_bytes(), Some(existing.clone()), &params)
            .unwrap()
            .contact;
        assert_eq!(merged.get_text(field), Some(value(field, 8).as_str()), "{field}");
        assert_eq!(merged.image, existing.image, "{field}");
        assert_eq!(merged.birthday, existing.birthday, "{field}");
        if let Some(untouched) = unreachable_neighbour(field) {
            assert_eq!(merged.get_text(untouched), existing.get_text(untouched), "{field}");
        }
    }
}

/// A slot of the same family that a card holding only `field` cannot fill.
fn unreachable_neighbour(field: ContactField) -> Option<ContactField> {
    let neighbour = match field {
        ContactField::Telephone(PhoneSlot::Home1 | PhoneSlot::Home2) => {
            ContactField::Telephone(PhoneSlot::Business1)
        }
        ContactField::Telephone(_) => ContactField::Telephone(PhoneSlot::Home1),
        ContactField::Email(EmailSlot::Home) => ContactField::Email(EmailSlot::Business),
        ContactField::Email(_) => ContactField::Email(EmailSlot::Home),
        ContactField::Address(AddressKind::Home, _) => {
            ContactField::Address(AddressKind::Business, AddressPart::Street)
        }
        ContactField::Address(..) => ContactField::Address(AddressKind::Home, AddressPart::Street),
        _ => return None,
    };
    Some(neighbour)
}
