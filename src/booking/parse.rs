//! Parse functions - turn user-entered values into calculator inputs

use crate::booking::types::{BookingSummary, StaySelection};
use crate::error::{QuoteError, Result};
use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fs;
use std::path::Path;

/// Parse a stay date, keeping the calendar day as written.
/// Accepts `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM:SS` and RFC 3339.
/// Any time of day is dropped so offsets never move the date.
pub fn parse_stay_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }

    Err(QuoteError::InvalidDate(format!("'{}' is not a calendar date", text)))
}

impl BookingSummary {
    /// Parse a stored booking summary
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read booking summary {:?}", path))?;
        Self::from_json(&text).with_context(|| format!("Malformed booking summary {:?}", path))
    }

    pub fn to_selection(&self) -> Result<StaySelection> {
        Ok(StaySelection {
            check_in: parse_stay_date(&self.check_in)?,
            check_out: parse_stay_date(&self.check_out)?,
            guests: self.guests,
            price_per_night: self.price_per_night,
        })
    }
}
