//! Error types for stay quoting

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using QuoteError
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Input-contract violations raised while quoting a stay.
/// None of these are transient, callers should not retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Check-out date {check_out} must be after check-in date {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("Invalid stay selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Failures of booking operations against the hotel API
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Room is not available for the selected dates")]
    RoomUnavailable,

    #[error("Booking {0} is in the past and cannot be cancelled")]
    NotCancellable(String),

    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Message shown in place of a total when a quote cannot be produced
pub const PRICE_UNAVAILABLE: &str = "Unable to calculate price";
