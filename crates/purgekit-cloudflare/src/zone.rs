//! Zone types and zone-ID resolution

use crate::client::CloudflareClient;
use crate::error::{CloudflareError, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

/// A Cloudflare zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub status: String,
    pub paused: bool,
    /// Seconds of development mode remaining, 0 when off
    #[serde(default)]
    pub development_mode: i64,
    #[serde(default)]
    pub name_servers: Vec<String>,
    pub plan: Option<ZonePlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZonePlan {
    pub name: String,
}

/// Resolves the zone ID for the configured domain, at most once
///
/// A configured zone ID short-circuits the API lookup entirely. Otherwise
/// the first caller performs a `GET /zones?name=<domain>` and the result is
/// memoized for the lifetime of the resolver.
pub struct ZoneResolver {
    configured: Option<String>,
    domain: Option<String>,
    resolved: OnceCell<String>,
}

impl ZoneResolver {
    pub fn new(configured_zone_id: Option<String>, domain: Option<String>) -> Self {
        Self {
            configured: configured_zone_id.filter(|s| !s.is_empty()),
            domain: domain.filter(|s| !s.is_empty()),
            resolved: OnceCell::new(),
        }
    }

    /// The domain this resolver was configured with, if any
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Resolve the zone ID, hitting the API only on the first call
    pub async fn zone_id(&self, client: &CloudflareClient) -> Result<&str> {
        if let Some(id) = &self.configured {
            return Ok(id);
        }

        let domain = self.domain.as_deref().ok_or(CloudflareError::MissingZone)?;

        let id = self
            .resolved
            .get_or_try_init(|| async {
                let zone = client.lookup_zone(domain).await?;
                tracing::debug!("resolved zone {} for domain {}", zone.id, domain);
                Ok::<_, CloudflareError>(zone.id)
            })
            .await?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Credentials;

    fn test_client() -> CloudflareClient {
        CloudflareClient::new(Credentials::Token("test-token".to_string())).unwrap()
    }

    #[test]
    fn test_parse_zone_list_response() {
        let body = r#"[{
            "id": "023e105f4ecef8ad9ca31a8372d0c353",
            "name": "example.com",
            "status": "active",
            "paused": false,
            "development_mode": 7200,
            "name_servers": ["tony.ns.cloudflare.com", "uma.ns.cloudflare.com"],
            "plan": {"id": "free", "name": "Free Website"}
        }]"#;
        let zones: Vec<Zone> = serde_json::from_str(body).unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].id, "023e105f4ecef8ad9ca31a8372d0c353");
        assert_eq!(zones[0].name, "example.com");
        assert_eq!(zones[0].development_mode, 7200);
        assert_eq!(zones[0].plan.as_ref().unwrap().name, "Free Website");
    }

    #[test]
    fn test_parse_minimal_zone() {
        let body = r#"{"id": "abc", "name": "example.com", "status": "pending", "paused": true}"#;
        let zone: Zone = serde_json::from_str(body).unwrap();
        assert_eq!(zone.development_mode, 0);
        assert!(zone.name_servers.is_empty());
        assert!(zone.plan.is_none());
    }

    #[tokio::test]
    async fn test_configured_zone_id_skips_lookup() {
        let resolver = ZoneResolver::new(Some("zone-123".to_string()), None);
        let id = resolver.zone_id(&test_client()).await.unwrap();
        assert_eq!(id, "zone-123");
    }

    #[tokio::test]
    async fn test_empty_zone_id_is_ignored() {
        // An empty stored value must not short-circuit to an empty zone ID.
        let resolver = ZoneResolver::new(Some(String::new()), None);
        let err = resolver.zone_id(&test_client()).await.unwrap_err();
        assert!(matches!(err, CloudflareError::MissingZone));
    }

    #[tokio::test]
    async fn test_no_zone_and_no_domain() {
        let resolver = ZoneResolver::new(None, None);
        let err = resolver.zone_id(&test_client()).await.unwrap_err();
        assert!(matches!(err, CloudflareError::MissingZone));
    }
}
