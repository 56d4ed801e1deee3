//! Repeated properties competing for contact slots.

use proptest::prelude::*;

use super::helpers::*;

fn card(lines: &[String]) -> String {
    format!(
        "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Erika\r\n{}END:VCARD\r\n",
        lines.concat()
    )
}

fn number(i: usize) -> String {
    format!("+49 221 {i:07}")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn home_numbers_fill_two_slots(n in 0_usize..12) {
        let lines: Vec<String> = (0..n)
            .map(|i| format!("TEL;TYPE=HOME;TYPE=VOICE:{}\r\n", number(i)))
            .collect();
        let result = import(&card(&lines));
        let contact = &result.contact;

        prop_assert_eq!(contact.telephone_home1.clone(), (n > 0).then(|| number(0)));
        prop_assert_eq!(contact.telephone_home2.clone(), (n > 1).then(|| number(1)));
        prop_assert_eq!(contact.telephone_other.clone(), None);
        prop_assert_eq!(contact.telephone_business1.clone(), None);

        let dropped = result
            .warnings
            .iter()
            .filter(|w| w.code == WarningCode::DroppedValue)
            .count();
        prop_assert_eq!(dropped, n.saturating_sub(2));
    }
}

#[test]
fn preferred_number_wins_the_first_slot() {
    let lines = [
        "TEL;TYPE=HOME:+49 221 1\r\n".to_string(),
        "TEL;TYPE=HOME:+49 221 2\r\n".to_string(),
        "TEL;TYPE=HOME,PREF:+49 221 3\r\n".to_string(),
    ];
    let result = import(&card(&lines));

    assert_eq!(result.contact.telephone_home1.as_deref(), Some("+49 221 3"));
    assert_eq!(result.contact.telephone_home2.as_deref(), Some("+49 221 1"));
    assert!(result.warnings.contains(WarningCode::DroppedValue));
}

#[test]
fn untyped_numbers_take_what_is_left() {
    let lines = [
        "TEL:+49 221 1\r\n".to_string(),
        "TEL;TYPE=OTHER:+49 221 2\r\n".to_string(),
        "TEL;TYPE=WORK:+49 221 3\r\n".to_string(),
    ];
    let contact = import(&card(&lines)).contact;

    assert_eq!(contact.telephone_other.as_deref(), Some("+49 221 2"));
    assert_eq!(contact.telephone_business1.as_deref(), Some("+49 221 3"));
    assert_eq!(contact.telephone_home1.as_deref(), Some("+49 221 1"));
}

#[test]
fn duplicate_numbers_are_dropped_quietly() {
    let lines = [
        "TEL;TYPE=CAR:+49 172 1\r\n".to_string(),
        "TEL;TYPE=CAR:+49 172 1\r\n".to_string(),
    ];
    let result = import(&card(&lines));

    assert_eq!(result.contact.telephone_car.as_deref(), Some("+49 172 1"));
    assert!(!result.warnings.contains(WarningCode::DroppedValue));
}

#[test]
fn typed_emails_overflow_into_the_other_slot() {
    let lines = [
        "EMAIL;TYPE=WORK:a@wikimedia.de\r\n".to_string(),
        "EMAIL;TYPE=WORK:b@wikimedia.de\r\n".to_string(),
        "EMAIL;TYPE=INTERNET:c@example.com\r\n".to_string(),
    ];
    let result = import(&card(&lines));
    let contact = &result.contact;

    assert_eq!(contact.email1.as_deref(), Some("a@wikimedia.de"));
    assert_eq!(contact.email3.as_deref(), Some("b@wikimedia.de"));
    assert_eq!(contact.email2.as_deref(), Some("c@example.com"));
    assert!(!result.warnings.contains(WarningCode::DroppedValue));
}
