//! Tests for the contact record.

use super::*;

#[test]
fn every_field_round_trips_through_named_access() {
    let mut contact = Contact::new();
    for field in ContactField::all() {
        let value = format!("value of {field}");
        contact.set_text(field, Some(value.clone()));
        assert_eq!(contact.get_text(field), Some(value.as_str()), "{field}");
    }
}

#[test]
fn all_fields_are_distinct() {
    let fields = ContactField::all();
    let unique: std::collections::HashSet<_> = fields.iter().collect();
    assert_eq!(unique.len(), fields.len());
    assert_eq!(fields.len(), 14 + 3 + 13 + 3 * 6);
}

#[test]
fn clearing_last_address_part_removes_address() {
    let mut contact = Contact::new();
    let street = ContactField::Address(AddressKind::Home, AddressPart::Street);
    let city = ContactField::Address(AddressKind::Home, AddressPart::City);

    contact.set_text(street, Some("Heidestraße 17".to_string()));
    contact.set_text(city, Some("Köln".to_string()));
    contact.set_text(street, None);
    assert_eq!(contact.address_home.as_ref().and_then(|a| a.city.as_deref()), Some("Köln"));

    contact.set_text(city, None);
    assert!(contact.address_home.is_none());
}

#[test]
fn empty_string_is_not_absence() {
    let mut contact = Contact::new();
    contact.set_text(ContactField::Note, Some(String::new()));
    assert_eq!(contact.get_text(ContactField::Note), Some(""));
    assert_ne!(contact, Contact::new());
}

#[test]
fn empty_distribution_list_still_marks_group() {
    let contact = Contact {
        distribution_list: Some(Vec::new()),
        ..Contact::default()
    };
    assert!(contact.is_distribution_list());
}

#[test]
fn contact_serializes_to_json() {
    let contact = Contact {
        display_name: Some("Erika Mustermann".to_string()),
        distribution_list: Some(vec![DistributionListEntry::contact(
            Some("Max".to_string()),
            "max@example.com",
            "uid-1",
        )]),
        ..Contact::default()
    };

    let json = serde_json::to_string(&contact).unwrap();
    assert!(json.contains("\"kind\":\"contact\""));
    let back: Contact = serde_json::from_str(&json).unwrap();
    assert_eq!(back, contact);
}

#[test]
fn validate_rejects_out_of_range_color_label() {
    let mut contact = Contact {
        color_label: Some(10),
        ..Contact::default()
    };
    assert!(contact.validate().is_ok());

    contact.color_label = Some(11);
    assert!(matches!(
        contact.validate(),
        Err(CoreError::InvalidContact(_))
    ));
}

#[test]
fn validate_rejects_member_without_email() {
    let contact = Contact {
        distribution_list: Some(vec![
            DistributionListEntry::independent(None, "a@example.com"),
            DistributionListEntry::independent(Some("Nobody".to_string()), " "),
        ]),
        ..Contact::default()
    };
    assert!(matches!(contact.validate(), Err(CoreError::InvalidContact(_))));
}
