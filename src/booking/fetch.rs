//! Fetch functions - talk to the hotel API

use crate::booking::catalog::{fallback_rooms, normalize_offers};
use crate::booking::timeline::{classify, fallback_bookings};
use crate::booking::types::{
    BookingEntry, BookingReceipt, BookingRequest, BookingSummary, RoomOffer, TimelineStatus,
};
use crate::error::{BookingError, Result};
use crate::{compute_nights, validate_guests};
use anyhow::Context;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

/// Everything needed to call the hotel API on behalf of one caller
#[derive(Debug, Clone)]
pub struct ApiContext {
    pub base_url: String,
    pub token: Option<String>,
    client: Client,
}

impl ApiContext {
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(ApiContext {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self.client.post(format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    rooms: Vec<RoomOffer>,
}

/// Search available rooms for a stay.
/// The range is validated before any request goes out; transport failures,
/// error statuses and empty results fall back to the built-in rooms.
pub async fn search_rooms(
    ctx: &ApiContext,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
) -> Result<Vec<RoomOffer>> {
    compute_nights(check_in, check_out)?;

    let offers = match fetch_offers(ctx, check_in, check_out, guests).await {
        Ok(offers) => normalize_offers(offers),
        Err(e) => {
            warn!("Room search failed, using fallback rooms: {:#}", e);
            return Ok(fallback_rooms());
        }
    };

    if offers.is_empty() {
        warn!("Room search returned no rooms, using fallback rooms");
        return Ok(fallback_rooms());
    }

    info!("Found {} rooms for {} → {}", offers.len(), check_in, check_out);
    Ok(offers)
}

async fn fetch_offers(
    ctx: &ApiContext,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
) -> anyhow::Result<Vec<RoomOffer>> {
    let response = ctx
        .get("/api/guest/rooms/search")
        .query(&[
            ("checkIn", check_in.to_string()),
            ("checkOut", check_out.to_string()),
            ("guests", guests.to_string()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow::anyhow!("HTTP request failed: {}", status));
    }

    let body: SearchResponse = response.json().await?;
    Ok(body.rooms)
}

/// Book a room for a guest and build the summary the confirmation view reads.
/// The stay is validated before the request goes out.
pub async fn create_booking(
    ctx: &ApiContext,
    user_id: &str,
    room: &RoomOffer,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
) -> std::result::Result<BookingReceipt, BookingError> {
    compute_nights(check_in, check_out)?;
    validate_guests(guests)?;

    let request = BookingRequest {
        user_id: user_id.to_string(),
        room_id: room.id.clone(),
        check_in,
        check_out,
        guests,
    };

    let response = ctx.post("/api/guest/bookings").json(&request).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let message = response.text().await.unwrap_or_default().trim().to_string();
        warn!("Booking of {} rejected ({}): {}", room.id, status, message);

        if message.to_lowercase().contains("room is not available") {
            return Err(BookingError::RoomUnavailable);
        }
        if message.is_empty() {
            return Err(BookingError::Rejected("Booking failed".to_string()));
        }
        return Err(BookingError::Rejected(message));
    }

    let booking: BookingEntry = response.json().await?;
    info!(
        "Booked {} for {} ({} → {})",
        room.id, user_id, check_in, check_out
    );

    Ok(BookingReceipt {
        booking,
        summary: BookingSummary {
            room_id: request.room_id,
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            guests,
            price_per_night: room.base_price,
        },
    })
}

#[derive(Debug, Deserialize)]
struct BookingsResponse {
    #[serde(default)]
    bookings: Option<Vec<BookingEntry>>,
}

/// List a guest's bookings, falling back to the built-in list when the API
/// fails or has none
pub async fn list_bookings(ctx: &ApiContext, user_id: &str) -> Vec<BookingEntry> {
    match fetch_bookings(ctx, user_id).await {
        Ok(bookings) if !bookings.is_empty() => {
            info!("Loaded {} bookings for {}", bookings.len(), user_id);
            bookings
        }
        Ok(_) => {
            warn!("No bookings for {}, using fallback bookings", user_id);
            fallback_bookings()
        }
        Err(e) => {
            warn!("Loading bookings failed, using fallback bookings: {:#}", e);
            fallback_bookings()
        }
    }
}

async fn fetch_bookings(ctx: &ApiContext, user_id: &str) -> anyhow::Result<Vec<BookingEntry>> {
    let response = ctx
        .get("/api/guest/bookings")
        .query(&[("userId", user_id)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow::anyhow!("HTTP request failed: {}", status));
    }

    let body: BookingsResponse = response.json().await?;
    Ok(body.bookings.unwrap_or_default())
}

/// Cancel a booking. Bookings whose check-in has arrived are refused
/// without contacting the API.
pub async fn cancel_booking(
    ctx: &ApiContext,
    booking: &BookingEntry,
    today: NaiveDate,
) -> std::result::Result<(), BookingError> {
    let id = booking
        .id
        .as_deref()
        .ok_or_else(|| BookingError::Rejected("Booking has no id".to_string()))?;

    if classify(booking.check_in, today) != TimelineStatus::Future {
        return Err(BookingError::NotCancellable(id.to_string()));
    }

    let response = ctx
        .post(&format!("/api/guest/bookings/{}/cancel", id))
        .send()
        .await?;

    if !response.status().is_success() {
        let message = response.text().await.unwrap_or_default().trim().to_string();
        warn!("Cancelling {} failed: {}", id, message);
        if message.is_empty() {
            return Err(BookingError::Rejected("Cancel failed".to_string()));
        }
        return Err(BookingError::Rejected(message));
    }

    info!("Cancelled booking {}", id);
    Ok(())
}
