//! Cloudflare API client
//!
//! Direct Cloudflare v4 API implementation for cache management.
//! Supports Bearer token authentication (scoped API tokens) as well as the
//! legacy X-Auth-Email / X-Auth-Key global key pair.

use crate::api::ApiResponse;
use crate::cache::{PurgeReceipt, PurgeRequest};
use crate::devmode::{DevelopmentMode, SetSettingRequest, ZoneSetting};
use crate::error::{CloudflareError, Result};
use crate::zone::Zone;
use std::time::Duration;

const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Cloudflare API credentials
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Scoped API token (preferred)
    Token(String),
    /// Legacy global API key pair
    GlobalKey { email: String, key: String },
}

impl Credentials {
    fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Credentials::Token(token) => request.bearer_auth(token),
            Credentials::GlobalKey { email, key } => request
                .header("X-Auth-Email", email)
                .header("X-Auth-Key", key),
        }
    }
}

/// Cloudflare cache-management client
pub struct CloudflareClient {
    client: reqwest::Client,
    credentials: Credentials,
}

impl CloudflareClient {
    /// Create a new client
    pub fn new(credentials: Credentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            credentials,
        })
    }

    /// Look up the zone for a domain name
    ///
    /// A successful envelope with an empty result list means the domain is
    /// not managed by the authenticated account.
    pub async fn lookup_zone(&self, domain: &str) -> Result<Zone> {
        let url = format!("{}/zones", CLOUDFLARE_API_BASE);

        let response = self
            .credentials
            .apply(self.client.get(&url).query(&[("name", domain)]))
            .send()
            .await?;

        let api_response: ApiResponse<Vec<Zone>> = response.json().await?;

        api_response
            .into_result()?
            .into_iter()
            .next()
            .ok_or_else(|| CloudflareError::ZoneNotFound(domain.to_string()))
    }

    /// Fetch details for a zone
    pub async fn zone_details(&self, zone_id: &str) -> Result<Zone> {
        let url = format!("{}/zones/{}", CLOUDFLARE_API_BASE, zone_id);

        let response = self
            .credentials
            .apply(self.client.get(&url))
            .send()
            .await?;

        let api_response: ApiResponse<Zone> = response.json().await?;
        api_response.into_result()
    }

    /// Purge cached content for a zone
    pub async fn purge_cache(&self, zone_id: &str, request: &PurgeRequest) -> Result<PurgeReceipt> {
        let url = format!("{}/zones/{}/purge_cache", CLOUDFLARE_API_BASE, zone_id);

        tracing::debug!("purging cache for zone {}: {:?}", zone_id, request);

        let response = self
            .credentials
            .apply(self.client.post(&url).json(request))
            .send()
            .await?;

        let api_response: ApiResponse<PurgeReceipt> = response.json().await?;
        api_response.into_result()
    }

    /// Read the development mode setting for a zone
    pub async fn get_development_mode(&self, zone_id: &str) -> Result<ZoneSetting> {
        let url = format!(
            "{}/zones/{}/settings/development_mode",
            CLOUDFLARE_API_BASE, zone_id
        );

        let response = self
            .credentials
            .apply(self.client.get(&url))
            .send()
            .await?;

        let api_response: ApiResponse<ZoneSetting> = response.json().await?;
        api_response.into_result()
    }

    /// Toggle the development mode setting for a zone
    pub async fn set_development_mode(
        &self,
        zone_id: &str,
        value: DevelopmentMode,
    ) -> Result<ZoneSetting> {
        let url = format!(
            "{}/zones/{}/settings/development_mode",
            CLOUDFLARE_API_BASE, zone_id
        );

        tracing::info!("setting development mode {} for zone {}", value, zone_id);

        let response = self
            .credentials
            .apply(self.client.patch(&url).json(&SetSettingRequest { value }))
            .send()
            .await?;

        let api_response: ApiResponse<ZoneSetting> = response.json().await?;
        api_response.into_result()
    }
}
