//! The same person written by 2.1, 3.0 and 4.0 producers.

use chrono::{TimeZone, Utc};

use cardshift_test::core::contact::{Contact, PostalAddress};
use cardshift_test::{ERIKA_JPEG, ERIKA_V21, ERIKA_V30, ERIKA_V40};

use super::helpers::*;

fn home_without_label(contact: &Contact) -> Option<PostalAddress> {
    contact.address_home.clone().map(|address| PostalAddress {
        label: None,
        ..address
    })
}

#[test_log::test]
fn every_version_yields_the_same_person() {
    let expected_home = PostalAddress {
        label: None,
        ..erika_home()
    };

    for input in [ERIKA_V21, ERIKA_V30, ERIKA_V40] {
        let result = import(input);
        let contact = &result.contact;

        assert_eq!(contact.sur_name.as_deref(), Some("Mustermann"), "{input}");
        assert_eq!(contact.given_name.as_deref(), Some("Erika"));
        assert_eq!(contact.title.as_deref(), Some("Dr."));
        assert_eq!(contact.display_name.as_deref(), Some("Dr. Erika Mustermann"));
        assert_eq!(contact.company.as_deref(), Some("Wikimedia"));
        assert_eq!(contact.telephone_business1.as_deref(), Some("+49 221 9999123"));
        assert_eq!(contact.telephone_home1.as_deref(), Some("+49 221 1234567"));
        assert_eq!(contact.email1.as_deref(), Some("erika@mustermann.de"));
        assert_eq!(home_without_label(contact), Some(expected_home.clone()));
        assert_eq!(contact.image.as_deref(), Some(ERIKA_JPEG));
        assert_eq!(contact.image_content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(
            contact.last_modified,
            Utc.with_ymd_and_hms(2014, 3, 1, 22, 11, 10).single()
        );
        assert!(!result.warnings.contains(WarningCode::ImageUnavailable));
    }
}

#[test]
fn labels_agree_across_versions() {
    let label = |c: &Contact| c.address_home.as_ref().and_then(|a| a.label.clone());
    for input in [ERIKA_V21, ERIKA_V30, ERIKA_V40] {
        assert_eq!(label(&import(input).contact), erika_home().label, "{input}");
    }
}

#[test]
fn each_sample_survives_conversion_to_every_version() {
    for input in [ERIKA_V21, ERIKA_V30, ERIKA_V40] {
        let original = import(input).contact;
        for version in VERSIONS {
            let converted = round_trip(&original, version).contact;
            assert_eq!(converted, original, "{version:?}\n{input}");
        }
    }
}

#[test]
fn missing_version_is_read_as_3_0() {
    let input = ERIKA_V30.replace("VERSION:3.0\r\n", "");
    let result = import(&input);

    assert_eq!(result.contact.sur_name.as_deref(), Some("Mustermann"));
    assert_eq!(
        result.contact.telephone_business1.as_deref(),
        Some("+49 221 9999123")
    );
}
