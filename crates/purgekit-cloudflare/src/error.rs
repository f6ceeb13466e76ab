//! Cloudflare client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudflareError {
    #[error("Cloudflare API credentials not configured: {0}")]
    MissingCredentials(String),

    #[error("no zone ID or domain configured; set CLOUDFLARE_ZONE_ID or CLOUDFLARE_DOMAIN")]
    MissingZone,

    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("Cloudflare API error: {0}")]
    ApiError(String),

    #[error("Failed to connect to Cloudflare API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CloudflareError>;
