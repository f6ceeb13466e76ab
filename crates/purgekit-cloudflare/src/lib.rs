//! Cloudflare API client for purgekit
//!
//! This crate implements the small slice of the Cloudflare v4 API that
//! cache management needs: zone lookup, cache purge, and the
//! `development_mode` zone setting.
//!
//! # Authentication
//!
//! Both scoped API tokens (Bearer) and the legacy global key pair
//! (`X-Auth-Email` / `X-Auth-Key`) are supported.
//!
//! # Example
//!
//! ```ignore
//! use purgekit_cloudflare::{CloudflareClient, Credentials, PurgeRequest, ZoneResolver};
//!
//! let client = CloudflareClient::new(Credentials::Token("token".into()))?;
//! let resolver = ZoneResolver::new(None, Some("example.com".into()));
//!
//! let zone_id = resolver.zone_id(&client).await?;
//! client.purge_cache(zone_id, &PurgeRequest::everything()).await?;
//! ```

pub mod api;
pub mod cache;
pub mod client;
pub mod devmode;
pub mod error;
pub mod zone;

pub use cache::{PurgeReceipt, PurgeRequest};
pub use client::{CloudflareClient, Credentials};
pub use devmode::{DevelopmentMode, ZoneSetting};
pub use error::{CloudflareError, Result};
pub use zone::{Zone, ZoneResolver};
