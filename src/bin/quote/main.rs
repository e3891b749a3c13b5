//! Print the confirmation for a stored booking summary

use anyhow::{Context, Result};
use hotel_booking_backend::booking::confirmation::Confirmation;
use hotel_booking_backend::booking::BookingSummary;
use hotel_booking_backend::config::Config;
use rust_decimal::Decimal;
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let path: PathBuf = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: quote <booking-summary.json>")?;

    let (output, priced) = run(&path, config.guest_fee_per_night)?;
    println!("{}", output);

    if !priced {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Render the confirmation text; the flag is false when no price could be given
fn run(path: &Path, guest_fee_per_night: Decimal) -> Result<(String, bool)> {
    info!("Reading booking summary from {:?}", path);

    let summary = BookingSummary::from_file(path)?;
    let confirmation = Confirmation::from_summary(&summary, guest_fee_per_night);

    let priced = confirmation.quote.is_ok();
    if !priced {
        error!("No price available for booking of room {}", summary.room_id);
    }

    Ok((confirmation.to_string(), priced))
}
