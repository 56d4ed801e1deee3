/// Product identifier written into exported vCards.
pub const PRODUCT_NAME: &str = "cardshift";
pub const PRODID: &str = const_str::concat!("-//", PRODUCT_NAME, "//", PRODUCT_NAME, " vCard//EN");

/// Default upper bound for a single vCard document, in bytes.
pub const DEFAULT_MAX_VCARD_SIZE: u64 = 4 * 1024 * 1024;
/// Default upper bound for a decoded contact image, in bytes.
pub const DEFAULT_MAX_IMAGE_SIZE: u64 = 4 * 1024 * 1024;
pub const DEFAULT_VCARD_VERSION: &str = "3.0";
pub const DEFAULT_IMAGE_FETCH_TIMEOUT_SECS: u64 = 10;

/// Highest color label value a contact may carry.
pub const MAX_COLOR_LABEL: u8 = 10;
