//! Shared helpers for the integration tests.

use chrono::{NaiveDate, TimeZone, Utc};

use cardshift_test::core::contact::{Contact, PostalAddress};
use cardshift_test::rfc::rfc::vcard::{VCard, VCardVersion};
use cardshift_test::service::{ImportResult, VCardService};
use cardshift_test::{ERIKA_JPEG, service};

pub use cardshift_test::service::WarningCode;

pub const VERSIONS: [VCardVersion; 3] = [VCardVersion::V21, VCardVersion::V3, VCardVersion::V4];

pub fn import(input: &str) -> ImportResult {
    let service = service();
    service
        .import_vcard(input.as_bytes(), None, &service.parameters())
        .unwrap()
}

/// Exports `contact` as a fresh card and returns the document text.
pub fn export(contact: &Contact, version: VCardVersion) -> String {
    export_into(contact, None, version).1
}

/// Exports `contact`, merging into `existing` when given.
pub fn export_into(
    contact: &Contact,
    existing: Option<VCard>,
    version: VCardVersion,
) -> (VCard, String) {
    let service = service();
    let params = service.parameters().with_version(version);
    let card = service.export_contact(contact, existing, &params).unwrap();
    let text = String::from_utf8(VCardService::write_vcard(&card)).unwrap();
    (card, text)
}

/// Exports and re-imports `contact`.
pub fn round_trip(contact: &Contact, version: VCardVersion) -> ImportResult {
    import(&export(contact, version))
}

pub fn erika_home() -> PostalAddress {
    PostalAddress {
        street: Some("Heidestraße 17".to_string()),
        city: Some("Köln".to_string()),
        region: None,
        postal_code: Some("51147".to_string()),
        country: Some("Deutschland".to_string()),
        label: Some("Heidestraße 17\n51147 Köln\nDeutschland".to_string()),
    }
}

/// A contact with every field set.
pub fn full_contact() -> Contact {
    Contact {
        uid: Some("4fbe8971-0bc3-424c-9c26-36c3e1eff6b1".to_string()),
        last_modified: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 15).single(),
        display_name: Some("Dr. Erika Mustermann".to_string()),
        given_name: Some("Erika".to_string()),
        sur_name: Some("Mustermann".to_string()),
        middle_name: Some("Gabriele".to_string()),
        title: Some("Dr.".to_string()),
        suffix: Some("MdB".to_string()),
        nickname: Some("Riki".to_string()),
        birthday: NaiveDate::from_ymd_opt(1964, 8, 12),
        anniversary: NaiveDate::from_ymd_opt(1990, 6, 2),
        company: Some("Wikimedia".to_string()),
        department: Some("Kommunikation".to_string()),
        position: Some("Redaktion & Gestaltung".to_string()),
        profession: Some("Journalistin".to_string()),
        email1: Some("erika@wikimedia.de".to_string()),
        email2: Some("erika@mustermann.de".to_string()),
        email3: Some("e.mustermann@example.com".to_string()),
        telephone_business1: Some("+49 221 9999123".to_string()),
        telephone_business2: Some("+49 221 9999124".to_string()),
        fax_business: Some("+49 221 9999125".to_string()),
        telephone_home1: Some("+49 221 1234567".to_string()),
        telephone_home2: Some("+49 221 1234568".to_string()),
        fax_home: Some("+49 221 1234569".to_string()),
        cellular_telephone1: Some("+49 170 1234567".to_string()),
        cellular_telephone2: Some("+49 170 7654321".to_string()),
        telephone_pager: Some("+49 171 1111111".to_string()),
        telephone_car: Some("+49 172 2222222".to_string()),
        telephone_isdn: Some("+49 221 3333333".to_string()),
        telephone_other: Some("+49 221 4444444".to_string()),
        fax_other: Some("+49 221 5555555".to_string()),
        address_business: Some(PostalAddress {
            street: Some("Tempelhofer Ufer 23-24".to_string()),
            city: Some("Berlin".to_string()),
            region: Some("Berlin".to_string()),
            postal_code: Some("10963".to_string()),
            country: Some("Deutschland".to_string()),
            label: None,
        }),
        address_home: Some(erika_home()),
        address_other: Some(PostalAddress {
            city: Some("Bonn".to_string()),
            ..PostalAddress::default()
        }),
        url: Some("https://de.wikipedia.org/wiki/Erika_Mustermann".to_string()),
        note: Some("Zeile eins\nZeile zwei; mit Semikolon, Komma und \\".to_string()),
        categories: Some(vec!["Freunde".to_string(), "Arbeit".to_string()]),
        color_label: Some(3),
        image: Some(ERIKA_JPEG.to_vec()),
        image_content_type: Some("image/jpeg".to_string()),
        distribution_list: None,
    }
}
