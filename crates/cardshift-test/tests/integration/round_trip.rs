//! Export followed by import gives back the same contact.

use chrono::{DateTime, NaiveDate, Utc};
use proptest::prelude::*;

use cardshift_test::core::contact::{Contact, PostalAddress};
use cardshift_test::ERIKA_JPEG;

use super::helpers::*;

#[test_log::test]
fn full_contact_survives_every_version() {
    let contact = full_contact();
    for version in VERSIONS {
        let result = round_trip(&contact, version);
        assert!(result.warnings.is_empty(), "{version:?}: {:?}", result.warnings);
        assert_eq!(result.contact, contact, "{version:?}");
    }
}

#[test]
fn second_round_trip_is_byte_identical() {
    let contact = full_contact();
    for version in VERSIONS {
        let first = export(&contact, version);
        let again = export(&import(&first).contact, version);
        assert_eq!(first, again, "{version:?}");
    }
}

#[test]
fn empty_contact_exports_only_the_header() {
    for version in VERSIONS {
        let text = export(&Contact::new(), version);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4, "{text}");
        assert!(lines[2].starts_with("PRODID:"));
        assert_eq!(round_trip(&Contact::new(), version).contact, Contact::new());
    }
}

fn word() -> impl Strategy<Value = String> {
    "[A-Za-zäöüßÄÖÜ0-9]([A-Za-zäöüßÄÖÜ0-9 .&-]{0,14}[A-Za-zäöüßÄÖÜ0-9])?"
}

fn text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(word())
}

fn phone() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("\\+49 [1-9][0-9]{2} [0-9]{4,8}")
}

fn email() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z][a-z0-9.]{0,8}[a-z0-9]@[a-z]{2,10}\\.(de|com|org)")
}

fn date() -> impl Strategy<Value = Option<NaiveDate>> {
    proptest::option::of((1900_i32..2100, 1_u32..=12, 1_u32..=28))
        .prop_map(|d| d.and_then(|(y, m, day)| NaiveDate::from_ymd_opt(y, m, day)))
}

fn timestamp() -> impl Strategy<Value = Option<DateTime<Utc>>> {
    proptest::option::of(0_i64..4_102_444_800)
        .prop_map(|secs| secs.and_then(|s| DateTime::from_timestamp(s, 0)))
}

fn address() -> impl Strategy<Value = Option<PostalAddress>> {
    (text(), text(), text(), text(), text(), text()).prop_map(
        |(street, city, region, postal_code, country, label)| {
            let address = PostalAddress {
                street,
                city,
                region,
                postal_code,
                country,
                label,
            };
            (!address.is_empty()).then_some(address)
        },
    )
}

prop_compose! {
    fn names()(
        display_name in text(),
        given_name in text(),
        sur_name in text(),
        middle_name in text(),
        title in text(),
        suffix in text(),
        nickname in text(),
    ) -> Contact {
        Contact {
            display_name,
            given_name,
            sur_name,
            middle_name,
            title,
            suffix,
            nickname,
            ..Contact::default()
        }
    }
}

prop_compose! {
    fn work(base: Contact)(
        company in text(),
        department in text(),
        position in text(),
        profession in text(),
        email1 in email(),
        email2 in email(),
        email3 in email(),
        url in proptest::option::of("https://example\\.(com|org)/[a-z]{0,10}"),
    ) -> Contact {
        Contact {
            company,
            department,
            position,
            profession,
            email1,
            email2,
            email3,
            url,
            ..base.clone()
        }
    }
}

prop_compose! {
    fn phones(base: Contact)(
        numbers in proptest::collection::vec(phone(), 13),
    ) -> Contact {
        let mut contact = base.clone();
        let [b1, b2, bf, h1, h2, hf, c1, c2, pager, car, isdn, other, of]: [Option<String>; 13] =
            numbers.try_into().unwrap();
        contact.telephone_business1 = b1;
        contact.telephone_business2 = b2;
        contact.fax_business = bf;
        contact.telephone_home1 = h1;
        contact.telephone_home2 = h2;
        contact.fax_home = hf;
        contact.cellular_telephone1 = c1;
        contact.cellular_telephone2 = c2;
        contact.telephone_pager = pager;
        contact.telephone_car = car;
        contact.telephone_isdn = isdn;
        contact.telephone_other = other;
        contact.fax_other = of;
        contact
    }
}

prop_compose! {
    fn rest(base: Contact)(
        uid in proptest::option::of("[a-f0-9]{8}-[a-f0-9]{4}"),
        last_modified in timestamp(),
        birthday in date(),
        anniversary in date(),
        address_business in address(),
        address_home in address(),
        address_other in address(),
        note in text(),
        categories in proptest::option::of(proptest::collection::vec("[A-Za-z]{1,10}", 1..4)),
        color_label in proptest::option::of(0_u8..=10),
        with_image in any::<bool>(),
    ) -> Contact {
        Contact {
            uid,
            last_modified,
            birthday,
            anniversary,
            address_business,
            address_home,
            address_other,
            note,
            categories,
            color_label,
            image: with_image.then(|| ERIKA_JPEG.to_vec()),
            image_content_type: with_image.then(|| "image/jpeg".to_string()),
            ..base.clone()
        }
    }
}

fn contact() -> impl Strategy<Value = Contact> {
    names()
        .prop_flat_map(work)
        .prop_flat_map(phones)
        .prop_flat_map(rest)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_contact_round_trips(contact in contact(), version in proptest::sample::select(VERSIONS.to_vec())) {
        let result = round_trip(&contact, version);
        prop_assert_eq!(result.contact, contact);
    }
}
