//! Core data types for quoting and booking views
//! Pure data structures with no behavior

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Input to the stay calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaySelection {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub price_per_night: Decimal,
}

/// Price breakdown for a stay, computed on demand and never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub nights: i64,
    pub base_amount: Decimal,
    pub guest_fee_amount: Decimal,
    /// Whole currency units, rounded half-up
    pub total_amount: Decimal,
    #[serde(skip)]
    pub unrounded_total: Decimal,
}

impl PriceQuote {
    /// Currency string shown on the confirmation view, e.g. `$240`
    pub fn display_total(&self) -> String {
        format!("${}", self.total_amount.normalize())
    }
}

/// Booking summary handed from the search page to the confirmation view.
/// Dates stay as entered; they are parsed when converted to a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub room_id: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    pub price_per_night: Decimal,
}

/// Room as advertised by the hotel API search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOffer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub base_price: Decimal,
    #[serde(default)]
    pub status: String,
}

/// A `null` price reads as zero so normalization can fill in the default
fn null_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

/// Where a booking sits relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineStatus {
    Past,
    Future,
}

impl std::fmt::Display for TimelineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimelineStatus::Past => write!(f, "past"),
            TimelineStatus::Future => write!(f, "future"),
        }
    }
}

/// Booking as listed for a guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(alias = "checkin")]
    pub check_in: NaiveDate,
    #[serde(alias = "checkout")]
    pub check_out: NaiveDate,
    #[serde(default)]
    pub status: Option<String>,
}

/// Booking entry annotated for the "my bookings" view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingTimeline {
    pub id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub timeline_status: TimelineStatus,
    pub cancellable: bool,
}

/// Room offer paired with the quote for the requested stay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomQuote {
    pub room: RoomOffer,
    pub quote: PriceQuote,
}

/// Booking creation request sent to the hotel API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub user_id: String,
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

/// Booking accepted by the hotel API, plus the summary for the confirmation view
#[derive(Debug, Clone, PartialEq)]
pub struct BookingReceipt {
    pub booking: BookingEntry,
    pub summary: BookingSummary,
}
