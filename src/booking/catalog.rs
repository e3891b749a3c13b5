//! Room catalog helpers - normalization, fallback rooms and per-room quotes

use crate::booking::types::{RoomOffer, RoomQuote, StaySelection};
use crate::compute_quote_with_fee;
use crate::error::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Nightly price assumed when the API omits one
pub const DEFAULT_BASE_PRICE: i64 = 100;

/// Rooms offered when the hotel API has nothing to show
pub fn fallback_rooms() -> Vec<RoomOffer> {
    vec![
        RoomOffer {
            id: "room-101".to_string(),
            name: "Standard 101".to_string(),
            room_type: "Standard".to_string(),
            capacity: 2,
            base_price: Decimal::from(100),
            status: "available".to_string(),
        },
        RoomOffer {
            id: "room-201".to_string(),
            name: "Deluxe Suite".to_string(),
            room_type: "Deluxe".to_string(),
            capacity: 3,
            base_price: Decimal::from(180),
            status: "available".to_string(),
        },
    ]
}

/// Fill in a default price for offers that came back without one
pub fn normalize_offers(offers: Vec<RoomOffer>) -> Vec<RoomOffer> {
    offers
        .into_iter()
        .map(|offer| {
            if offer.base_price.is_zero() {
                RoomOffer {
                    base_price: Decimal::from(DEFAULT_BASE_PRICE),
                    ..offer
                }
            } else {
                offer
            }
        })
        .collect()
}

/// Quote every offer for the same stay
pub fn quote_offers(
    offers: Vec<RoomOffer>,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    guest_fee_per_night: Decimal,
) -> Result<Vec<RoomQuote>> {
    offers
        .into_iter()
        .map(|room| {
            let selection = StaySelection {
                check_in,
                check_out,
                guests,
                price_per_night: room.base_price,
            };
            let quote = compute_quote_with_fee(&selection, guest_fee_per_night)?;
            Ok(RoomQuote { room, quote })
        })
        .collect()
}
