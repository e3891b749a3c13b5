//! Configuration loaded from environment variables

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::booking::fetch::ApiContext;
use crate::GUEST_FEE_PER_NIGHT;

#[derive(Debug, Clone)]
pub struct Config {
    pub guest_fee_per_night: Decimal,
    pub hotel_api_base: String,
    pub hotel_api_token: Option<String>,
    pub server_addr: SocketAddr,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let guest_fee_per_night = match env::var("GUEST_FEE_PER_NIGHT") {
            Ok(raw) => Decimal::from_str(raw.trim())
                .context("GUEST_FEE_PER_NIGHT must be a valid amount")?,
            Err(_) => GUEST_FEE_PER_NIGHT,
        };
        if guest_fee_per_night < Decimal::ZERO {
            anyhow::bail!("GUEST_FEE_PER_NIGHT must not be negative");
        }

        Ok(Config {
            guest_fee_per_night,
            hotel_api_base: env::var("HOTEL_API_BASE")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            hotel_api_token: env::var("HOTEL_API_TOKEN").ok().filter(|t| !t.is_empty()),
            server_addr: env::var("QUOTE_SERVER_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:3001".to_string())
                .parse()
                .context("QUOTE_SERVER_ADDR must be a socket address")?,
            http_timeout: Duration::from_secs(
                env::var("HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }

    /// Hotel API context for outbound requests
    pub fn api_context(&self) -> Result<ApiContext> {
        ApiContext::new(
            &self.hotel_api_base,
            self.hotel_api_token.clone(),
            self.http_timeout,
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            guest_fee_per_night: GUEST_FEE_PER_NIGHT,
            hotel_api_base: "http://localhost:8080".to_string(),
            hotel_api_token: None,
            server_addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
            http_timeout: Duration::from_secs(10),
        }
    }
}
