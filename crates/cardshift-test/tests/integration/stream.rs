//! Multi-card documents read through the service.

use std::io::Cursor;

use cardshift_test::service::VCardError;
use cardshift_test::{ERIKA_JPEG, ERIKA_V21, ERIKA_V30, ERIKA_V40, service};

use super::helpers::*;

#[test]
fn sample_cards_stream_in_order() {
    let document = [ERIKA_V21, ERIKA_V30, ERIKA_V40].concat();
    let service = service();
    let results: Vec<_> = service
        .import_stream(Cursor::new(document), service.parameters())
        .collect();

    assert_eq!(results.len(), 3);
    for result in results {
        let result = result.unwrap();
        assert_eq!(result.contact.sur_name.as_deref(), Some("Mustermann"));
        assert_eq!(result.contact.image.as_deref(), Some(ERIKA_JPEG));
    }
}

#[test]
fn empty_document_yields_nothing() {
    let service = service();
    let mut iter = service.import_stream(Cursor::new(""), service.parameters());
    assert!(!iter.has_next());
    assert!(iter.next().is_none());
}

#[test]
fn text_around_cards_is_ignored() {
    let document = format!("Exported contacts\r\n\r\n{ERIKA_V30}\r\n-- end --\r\n");
    let service = service();
    let results: Vec<_> = service
        .import_stream(Cursor::new(document), service.parameters())
        .collect();

    assert_eq!(results.len(), 1);
    assert!(results[0].is_ok());
}

#[test_log::test]
fn oversized_card_does_not_stop_the_stream() {
    let small = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Klein\r\nEND:VCARD\r\n";
    let document = [small, ERIKA_V40, small].concat();
    let service = service();
    let params = service
        .parameters()
        .with_max_vcard_size(Some(small.len() as u64));

    let results: Vec<_> = service.import_stream(Cursor::new(document), params).collect();

    assert_eq!(results.len(), 3);
    assert!(matches!(results[1], Err(VCardError::MaximumSizeExceeded { .. })));
    for result in [&results[0], &results[2]] {
        let contact = &result.as_ref().unwrap().contact;
        assert_eq!(contact.display_name.as_deref(), Some("Klein"));
    }
}

#[test]
fn each_card_carries_its_own_warnings() {
    let broken = "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Kaputt\r\nBDAY:gestern\r\nEND:VCARD\r\n";
    let document = [broken, ERIKA_V30].concat();
    let service = service();
    let results: Vec<_> = service
        .import_stream(Cursor::new(document), service.parameters())
        .map(Result::unwrap)
        .collect();

    assert!(results[0].warnings.contains(WarningCode::InvalidDate));
    assert!(!results[1].warnings.contains(WarningCode::InvalidDate));
}
