//! vCard property-bag model, lenient parser and order-preserving writer.

pub mod rfc;
