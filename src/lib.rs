// Library module for testable functions

pub mod api;
pub mod booking;
pub mod config;
pub mod error;

use booking::types::{PriceQuote, StaySelection};
use chrono::NaiveDate;
use error::{QuoteError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Per-guest surcharge added for every night of a stay
pub const GUEST_FEE_PER_NIGHT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Count the billable nights between two calendar dates.
/// Checkout day is not billed: D to D+2 is 2 nights.
pub fn compute_nights(check_in: NaiveDate, check_out: NaiveDate) -> Result<i64> {
    if check_out <= check_in {
        return Err(QuoteError::InvalidDateRange {
            check_in,
            check_out,
        });
    }
    Ok((check_out - check_in).num_days())
}

/// Reject selections without at least one guest
pub fn validate_guests(guests: u32) -> Result<()> {
    if guests < 1 {
        return Err(QuoteError::InvalidSelection(
            "guest count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Quote a stay using the standard guest fee
pub fn compute_quote(selection: &StaySelection) -> Result<PriceQuote> {
    compute_quote_with_fee(selection, GUEST_FEE_PER_NIGHT)
}

/// Quote a stay with an explicit per-guest nightly fee
/// Formula: nights × price + nights × fee × guests, total rounded half-up
pub fn compute_quote_with_fee(
    selection: &StaySelection,
    guest_fee_per_night: Decimal,
) -> Result<PriceQuote> {
    validate_guests(selection.guests)?;
    if selection.price_per_night < Decimal::ZERO {
        return Err(QuoteError::InvalidSelection(format!(
            "price per night must not be negative (got {})",
            selection.price_per_night
        )));
    }
    if guest_fee_per_night < Decimal::ZERO {
        return Err(QuoteError::InvalidSelection(format!(
            "guest fee per night must not be negative (got {})",
            guest_fee_per_night
        )));
    }

    let nights = compute_nights(selection.check_in, selection.check_out)?;
    let nights_dec = Decimal::from(nights);

    let out_of_range = || QuoteError::InvalidSelection("amount out of range".to_string());

    let base_amount = nights_dec
        .checked_mul(selection.price_per_night)
        .ok_or_else(out_of_range)?;
    let guest_fee_amount = nights_dec
        .checked_mul(guest_fee_per_night)
        .and_then(|fee| fee.checked_mul(Decimal::from(selection.guests)))
        .ok_or_else(out_of_range)?;
    let unrounded_total = base_amount
        .checked_add(guest_fee_amount)
        .ok_or_else(out_of_range)?;
    let total_amount =
        unrounded_total.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    Ok(PriceQuote {
        nights,
        base_amount,
        guest_fee_amount,
        total_amount,
        unrounded_total,
    })
}
