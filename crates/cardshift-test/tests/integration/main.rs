#![allow(clippy::unwrap_used)]
//! End-to-end tests of the vCard service.
//!
//! Every test drives the public [`VCardService`](cardshift_service::VCardService)
//! API with raw documents, the way callers do.

mod helpers;

mod distribution_list;
mod field_cycle;
mod merge;
mod round_trip;
mod size_limits;
mod slot_assignment;
mod stream;
mod version_tolerance;
