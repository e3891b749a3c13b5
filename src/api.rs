//! HTTP surface for quoting stays and annotating bookings

use crate::booking::catalog::quote_offers;
use crate::booking::fetch::{list_bookings, search_rooms, ApiContext};
use crate::booking::parse::parse_stay_date;
use crate::booking::timeline::annotate;
use crate::booking::types::{BookingEntry, BookingTimeline, PriceQuote, RoomQuote, StaySelection};
use crate::{compute_nights, compute_quote_with_fee, validate_guests};
use crate::config::Config;
use crate::error::QuoteError;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

#[derive(Clone)]
pub struct AppState {
    pub api: ApiContext,
    pub guest_fee_per_night: Decimal,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(AppState {
            api: config.api_context()?,
            guest_fee_per_night: config.guest_fee_per_night,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api/health", get(health_check))
        .route("/api/quote", post(create_quote))
        .route("/api/rooms/quotes", get(room_quotes))
        .route(
            "/api/bookings/timeline",
            get(guest_timeline).post(booking_timeline),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Serialize, Deserialize)]
struct ApiResponse {
    message: String,
    status: String,
}

async fn health_check() -> Json<ApiResponse> {
    Json(ApiResponse {
        message: "Hotel quote API is running!".to_string(),
        status: "ok".to_string(),
    })
}

/// Quote errors are caller mistakes, so they all map to 400
pub struct ApiError(QuoteError);

impl From<QuoteError> for ApiError {
    fn from(e: QuoteError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!("Rejecting request: {}", self.0);
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    pub price_per_night: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub quote: PriceQuote,
    pub display_total: String,
}

async fn create_quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let selection = StaySelection {
        check_in: parse_stay_date(&req.check_in)?,
        check_out: parse_stay_date(&req.check_out)?,
        guests: req.guests,
        price_per_night: req.price_per_night,
    };

    let quote = compute_quote_with_fee(&selection, state.guest_fee_per_night)?;
    info!(
        "Quoted {} night(s) for {} guest(s): {}",
        quote.nights,
        selection.guests,
        quote.display_total()
    );

    Ok(Json(QuoteResponse {
        display_total: quote.display_total(),
        quote,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomQuotesParams {
    pub check_in: String,
    pub check_out: String,
    pub guests: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct RoomQuotesResponse {
    pub rooms: Vec<RoomQuote>,
}

async fn room_quotes(
    State(state): State<AppState>,
    Query(params): Query<RoomQuotesParams>,
) -> Result<Json<RoomQuotesResponse>, ApiError> {
    let check_in = parse_stay_date(&params.check_in)?;
    let check_out = parse_stay_date(&params.check_out)?;
    let guests = params.guests.unwrap_or(1);
    compute_nights(check_in, check_out)?;
    validate_guests(guests)?;

    let offers = search_rooms(&state.api, check_in, check_out, guests).await?;
    let rooms = quote_offers(offers, check_in, check_out, guests, state.guest_fee_per_night)?;

    Ok(Json(RoomQuotesResponse { rooms }))
}

#[derive(Debug, Deserialize)]
pub struct TimelineRequest {
    #[serde(default)]
    pub bookings: Vec<BookingEntry>,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub bookings: Vec<BookingTimeline>,
}

async fn booking_timeline(Json(req): Json<TimelineRequest>) -> Json<TimelineResponse> {
    let today = Utc::now().date_naive();
    Json(TimelineResponse {
        bookings: annotate(req.bookings, today),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineParams {
    pub user_id: String,
}

async fn guest_timeline(
    State(state): State<AppState>,
    Query(params): Query<TimelineParams>,
) -> Json<TimelineResponse> {
    let bookings = list_bookings(&state.api, &params.user_id).await;
    let today = Utc::now().date_naive();
    Json(TimelineResponse {
        bookings: annotate(bookings, today),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        // Port 9 has no listener, so room searches use the fallback rooms
        AppState {
            api: ApiContext::new("http://127.0.0.1:9", None, Duration::from_secs(2)).unwrap(),
            guest_fee_per_night: crate::GUEST_FEE_PER_NIGHT,
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, json) = send(Request::get("/api/health").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_quote_endpoint() {
        let (status, json) = send(post_json(
            "/api/quote",
            serde_json::json!({
                "checkIn": "2025-12-01",
                "checkOut": "2025-12-05",
                "guests": 3,
                "pricePerNight": 180
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["nights"], 4);
        assert_eq!(json["baseAmount"], 720.0);
        assert_eq!(json["guestFeeAmount"], 240.0);
        assert_eq!(json["totalAmount"], 960.0);
        assert_eq!(json["displayTotal"], "$960");
        assert!(json.get("unroundedTotal").is_none());
    }

    #[tokio::test]
    async fn test_quote_endpoint_rejects_inverted_range() {
        let (status, json) = send(post_json(
            "/api/quote",
            serde_json::json!({
                "checkIn": "2025-12-10",
                "checkOut": "2025-12-05",
                "guests": 1,
                "pricePerNight": 100
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("must be after"));
    }

    #[tokio::test]
    async fn test_quote_endpoint_rejects_zero_guests() {
        let (status, json) = send(post_json(
            "/api/quote",
            serde_json::json!({
                "checkIn": "2025-12-10",
                "checkOut": "2025-12-12",
                "guests": 0,
                "pricePerNight": 100
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("guest count"));
    }

    #[tokio::test]
    async fn test_quote_endpoint_rejects_huge_amount() {
        let (status, json) = send(post_json(
            "/api/quote",
            serde_json::json!({
                "checkIn": "2025-12-10",
                "checkOut": "2025-12-12",
                "guests": 1,
                "pricePerNight": 5e28
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("amount out of range"));
    }

    #[tokio::test]
    async fn test_quote_endpoint_rejects_bad_date() {
        let (status, _) = send(post_json(
            "/api/quote",
            serde_json::json!({
                "checkIn": "12/10/2025",
                "checkOut": "2025-12-12",
                "guests": 1,
                "pricePerNight": 100
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_room_quotes_use_fallback_rooms() {
        let (status, json) = send(
            Request::get("/api/rooms/quotes?checkIn=2025-12-10&checkOut=2025-12-12&guests=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let rooms = json["rooms"].as_array().unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0]["room"]["id"], "room-101");
        assert_eq!(rooms[0]["quote"]["totalAmount"], 280.0); // 2 × 100 + 2 × 20 × 2
        assert_eq!(rooms[1]["quote"]["totalAmount"], 440.0); // 2 × 180 + 2 × 20 × 2
    }

    #[tokio::test]
    async fn test_room_quotes_reject_inverted_range() {
        let (status, _) = send(
            Request::get("/api/rooms/quotes?checkIn=2025-12-12&checkOut=2025-12-10")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_room_quotes_reject_zero_guests_before_search() {
        // A room search that ran would succeed with fallback rooms
        let (status, json) = send(
            Request::get("/api/rooms/quotes?checkIn=2025-12-10&checkOut=2025-12-12&guests=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("guest count"));
    }

    #[tokio::test]
    async fn test_guest_timeline_uses_fallback_bookings() {
        let (status, json) = send(
            Request::get("/api/bookings/timeline?userId=user-guest-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let bookings = json["bookings"].as_array().unwrap();
        assert_eq!(bookings.len(), 3);
        assert_eq!(bookings[2]["id"], "booking-past-1");
        assert_eq!(bookings[2]["timelineStatus"], "past");
        assert_eq!(bookings[2]["cancellable"], false);
    }

    #[tokio::test]
    async fn test_booking_timeline_endpoint() {
        let (status, json) = send(post_json(
            "/api/bookings/timeline",
            serde_json::json!({
                "bookings": [
                    {"id": "booking-past-1", "checkIn": "2024-11-01", "checkOut": "2024-11-03"},
                    {"checkIn": "2999-12-20", "checkOut": "2999-12-22", "status": "confirmed"}
                ]
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let bookings = json["bookings"].as_array().unwrap();
        assert_eq!(bookings[0]["timelineStatus"], "past");
        assert_eq!(bookings[0]["cancellable"], false);
        assert_eq!(bookings[1]["id"], "booking-1");
        assert_eq!(bookings[1]["timelineStatus"], "future");
        assert_eq!(bookings[1]["cancellable"], true);
    }
}
