//! Booking module - room search, quoting and the guest-facing booking views

pub mod catalog;
pub mod confirmation;
pub mod fetch;
pub mod parse;
pub mod timeline;
pub mod types;

pub use types::*;
