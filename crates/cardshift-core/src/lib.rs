//! Core types shared across the cardshift crates.
//!
//! - [`config`] - settings loaded from the environment and `config.toml`
//! - [`contact`] - the flat contact record the vCard engine reads and writes
//! - [`error`] - core error type

pub mod config;
pub mod constants;
pub mod contact;
pub mod error;
