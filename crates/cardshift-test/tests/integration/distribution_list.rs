//! Group contacts through the full service.

use cardshift_test::core::contact::{Contact, DistributionListEntry};
use cardshift_test::rfc::rfc::vcard::VCardVersion;

use super::helpers::*;

fn members(n: usize) -> Vec<DistributionListEntry> {
    (0..n)
        .map(|i| match i % 2 {
            0 => DistributionListEntry::independent(
                Some(format!("Gast {i}")),
                format!("gast{i}@example.com"),
            ),
            _ => DistributionListEntry::contact(
                None,
                format!("kollege{i}@example.com"),
                format!("uid-{i}"),
            ),
        })
        .collect()
}

fn team(n: usize) -> Contact {
    Contact {
        display_name: Some("Team Köln".to_string()),
        distribution_list: Some(members(n)),
        ..Contact::default()
    }
}

#[test]
fn every_member_is_written_and_read_back() {
    for version in VERSIONS {
        for n in [0, 1, 5] {
            let text = export(&team(n), version);
            let unfolded = text.replace("\r\n ", "");

            assert!(unfolded.contains("KIND:group\r\n"), "{unfolded}");
            assert_eq!(unfolded.matches("\r\nMEMBER").count(), n);

            let contact = import(&text).contact;
            assert_eq!(contact.distribution_list, Some(members(n)), "{version:?} {n}");
            assert_eq!(contact.email1, None);
        }
    }
}

const LEGACY: &str = "BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Stammtisch\r\n\
X-OPEN-XCHANGE-CTYPE:dlist\r\n\
EMAIL;X-OX-FN=Anna:anna@example.com\r\n\
EMAIL;X-OX-FN=Bernd;X-OX-UID=42:bernd@example.com\r\n\
EMAIL:mailto:carla@example.com\r\n\
X-MOZILLA-HTML:FALSE\r\n\
END:VCARD\r\n";

#[test]
fn legacy_list_reads_emails_as_members() {
    let contact = import(LEGACY).contact;

    assert_eq!(
        contact.distribution_list,
        Some(vec![
            DistributionListEntry::independent(Some("Anna".to_string()), "anna@example.com"),
            DistributionListEntry::contact(Some("Bernd".to_string()), "bernd@example.com", "42"),
            DistributionListEntry::independent(None, "carla@example.com"),
        ])
    );
    assert_eq!(contact.email1, None);
    assert_eq!(contact.email2, None);
    assert_eq!(contact.email3, None);
}

#[test_log::test]
fn legacy_list_is_rewritten_in_modern_form() {
    let imported = import(LEGACY);
    let (_, text) = export_into(&imported.contact, Some(imported.vcard), VCardVersion::V4);
    let unfolded = text.replace("\r\n ", "");

    assert!(!unfolded.contains("X-OPEN-XCHANGE-CTYPE"));
    assert!(!unfolded.contains("\r\nEMAIL"));
    assert!(unfolded.contains("KIND:group\r\n"));
    assert!(unfolded.contains("MEMBER;X-OX-FN=Anna:mailto:anna@example.com\r\n"));
    assert!(unfolded.contains("MEMBER;X-OX-FN=Bernd;X-OX-UID=42:mailto:bernd@example.com\r\n"));
    assert!(unfolded.contains("MEMBER:mailto:carla@example.com\r\n"));
    assert!(unfolded.contains("X-MOZILLA-HTML:FALSE\r\n"));

    let again = import(&text).contact;
    assert_eq!(again.distribution_list, imported.contact.distribution_list);
}

#[test]
fn turning_a_list_into_a_person_drops_its_members() {
    let imported = import(&export(&team(3), VCardVersion::V4));
    let mut contact = imported.contact.clone();
    contact.distribution_list = None;
    contact.email1 = Some("team@example.com".to_string());

    let (_, text) = export_into(&contact, Some(imported.vcard), VCardVersion::V4);

    assert!(!text.contains("KIND"));
    assert!(!text.contains("MEMBER"));
    assert!(text.contains("EMAIL"));
    assert!(!import(&text).contact.is_distribution_list());
}
