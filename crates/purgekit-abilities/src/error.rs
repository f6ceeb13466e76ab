//! Ability execution errors
//!
//! These never cross the ability boundary; the executor folds them into a
//! failed [`Outcome`](crate::Outcome) message.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbilityError {
    #[error(transparent)]
    Config(#[from] purgekit_config::ConfigError),

    #[error(transparent)]
    Cloudflare(#[from] purgekit_cloudflare::CloudflareError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
