//! Confirmation view model built from a stored booking summary

use crate::booking::types::{BookingSummary, PriceQuote};
use crate::error::PRICE_UNAVAILABLE;
use crate::compute_quote_with_fee;
use rust_decimal::Decimal;
use std::fmt;
use tracing::warn;

/// What the confirmation view shows after a booking is created
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub room_id: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    /// `Err` holds the message shown in place of the total
    pub quote: Result<PriceQuote, String>,
}

impl Confirmation {
    pub fn from_summary(summary: &BookingSummary, guest_fee_per_night: Decimal) -> Self {
        let quote = summary
            .to_selection()
            .and_then(|selection| compute_quote_with_fee(&selection, guest_fee_per_night))
            .map_err(|e| {
                warn!("Cannot price booking for room {}: {}", summary.room_id, e);
                PRICE_UNAVAILABLE.to_string()
            });

        Confirmation {
            room_id: summary.room_id.clone(),
            check_in: summary.check_in.clone(),
            check_out: summary.check_out.clone(),
            guests: summary.guests,
            quote,
        }
    }

    /// Total line, or the fallback message when no quote exists
    pub fn total_line(&self) -> String {
        match &self.quote {
            Ok(quote) => format!("Total: {}", quote.display_total()),
            Err(message) => message.clone(),
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Booking Confirmation")?;
        writeln!(f, "{}", self.total_line())?;
        writeln!(f, "Dates: {} → {}", self.check_in, self.check_out)?;
        write!(f, "Guests: {}", self.guests)
    }
}
