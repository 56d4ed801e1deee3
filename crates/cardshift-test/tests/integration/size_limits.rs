//! Document and image size limits.

use cardshift_test::service::VCardError;
use cardshift_test::{ERIKA_JPEG, ERIKA_V21, ERIKA_V30, ERIKA_V40, service};

use super::helpers::*;

#[test]
fn card_at_the_limit_is_accepted() {
    let service = service();
    let limit = ERIKA_V30.len() as u64;

    let at_limit = service.parameters().with_max_vcard_size(Some(limit));
    assert!(service.import_vcard(ERIKA_V30.as_bytes(), None, &at_limit).is_ok());

    let below = service.parameters().with_max_vcard_size(Some(limit - 1));
    let err = service
        .import_vcard(ERIKA_V30.as_bytes(), None, &below)
        .unwrap_err();
    assert_eq!(err.code(), "VCARD-0001");
    assert!(matches!(
        err,
        VCardError::MaximumSizeExceeded { size, limit: l } if size == limit && l == limit - 1
    ));
}

#[test_log::test]
fn oversized_photo_is_dropped_with_one_warning() {
    let service = service();
    let params = service
        .parameters()
        .with_max_image_size(Some(ERIKA_JPEG.len() as u64 - 1));

    for input in [ERIKA_V21, ERIKA_V30, ERIKA_V40] {
        let result = service.import_vcard(input.as_bytes(), None, &params).unwrap();

        let too_large = result
            .warnings
            .iter()
            .filter(|w| w.code == WarningCode::ImageTooLarge)
            .count();
        assert_eq!(too_large, 1, "{input}");
        assert_eq!(result.contact.image, None);
        assert_eq!(result.contact.image_content_type, None);
        assert_eq!(result.contact.sur_name.as_deref(), Some("Mustermann"));
        assert_eq!(
            result.contact.telephone_business1.as_deref(),
            Some("+49 221 9999123")
        );
    }
}

#[test]
fn warnings_serialize_for_callers() {
    let service = service();
    let params = service.parameters().with_max_image_size(Some(1));
    let result = service
        .import_vcard(ERIKA_V40.as_bytes(), None, &params)
        .unwrap();

    let json = serde_json::to_value(result.warnings.iter().collect::<Vec<_>>()).unwrap();
    let codes: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|w| w["code"].as_str())
        .collect();
    assert_eq!(codes, vec!["image_too_large"]);
    assert_eq!(json[0]["source"]["property"], "PHOTO");
}

#[test]
fn photo_at_the_limit_is_kept() {
    let service = service();
    let params = service
        .parameters()
        .with_max_image_size(Some(ERIKA_JPEG.len() as u64));

    for input in [ERIKA_V21, ERIKA_V30, ERIKA_V40] {
        let result = service.import_vcard(input.as_bytes(), None, &params).unwrap();
        assert_eq!(result.contact.image.as_deref(), Some(ERIKA_JPEG));
        assert!(!result.warnings.contains(WarningCode::ImageTooLarge));
    }
}

#[test]
fn kept_original_can_drop_the_photo() {
    let service = service();
    let params = service.parameters().keep_original(true, true);

    let result = service
        .import_vcard(ERIKA_V21.as_bytes(), None, &params)
        .unwrap();
    let original = String::from_utf8(result.original_vcard.unwrap()).unwrap();

    assert!(!original.contains("PHOTO"));
    assert!(original.contains("TEL;WORK;VOICE:+49 221 9999123\r\n"));
    assert_eq!(result.contact.image.as_deref(), Some(ERIKA_JPEG));
}
