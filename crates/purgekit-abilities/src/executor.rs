//! Ability execution
//!
//! [`AbilityService`] is the execute-callback layer: it checks the permission
//! policy, resolves credentials and the zone, issues the Cloudflare call, and
//! normalizes whatever happened into an [`Outcome`].

use crate::error::AbilityError;
use crate::input::{ClearCacheInput, SetDevelopmentModeInput};
use crate::outcome::Outcome;
use crate::permission::PermissionPolicy;
use purgekit_cloudflare::{CloudflareClient, DevelopmentMode, PurgeRequest, ZoneResolver};
use purgekit_config::Settings;

/// Executes cache-management abilities against the configured zone
pub struct AbilityService {
    settings: Settings,
    policy: PermissionPolicy,
}

impl AbilityService {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            policy: PermissionPolicy::manage(),
        }
    }

    /// Purge the zone cache, entirely or scoped to files/tags/hosts
    pub async fn clear_cache(&self, input: &ClearCacheInput) -> Outcome {
        if let Err(denied) = self.check_permission() {
            return denied;
        }
        self.try_clear_cache(input).await.unwrap_or_else(fold)
    }

    /// Read status, plan, and name servers of the configured zone
    pub async fn zone_info(&self) -> Outcome {
        if let Err(denied) = self.check_permission() {
            return denied;
        }
        self.try_zone_info().await.unwrap_or_else(fold)
    }

    /// Read the development mode setting
    pub async fn get_development_mode(&self) -> Outcome {
        if let Err(denied) = self.check_permission() {
            return denied;
        }
        self.try_get_development_mode().await.unwrap_or_else(fold)
    }

    /// Turn development mode on or off
    pub async fn set_development_mode(&self, input: &SetDevelopmentModeInput) -> Outcome {
        if let Err(denied) = self.check_permission() {
            return denied;
        }
        self.try_set_development_mode(input).await.unwrap_or_else(fold)
    }

    fn check_permission(&self) -> Result<(), Outcome> {
        let role = self.settings.caller_role();
        if self.policy.allows(role) {
            Ok(())
        } else {
            tracing::warn!("ability execution denied for role '{}'", role);
            Err(Outcome::fail(format!(
                "Permission denied: role '{}' may not manage the Cloudflare cache.",
                role
            )))
        }
    }

    fn connect(&self) -> Result<(CloudflareClient, ZoneResolver), AbilityError> {
        let credentials = self.settings.credentials()?;
        let client = CloudflareClient::new(credentials)?;
        let resolver = ZoneResolver::new(
            self.settings.zone_id.clone(),
            self.settings.domain.clone(),
        );
        Ok((client, resolver))
    }

    async fn try_clear_cache(&self, input: &ClearCacheInput) -> Result<Outcome, AbilityError> {
        let (client, resolver) = self.connect()?;
        let zone_id = resolver.zone_id(&client).await?;

        let request = input.to_request();
        let receipt = client.purge_cache(zone_id, &request).await?;

        let message = match &request {
            PurgeRequest::Files { files } => {
                format!("Purged {} specific URL(s) from Cloudflare cache.", files.len())
            }
            PurgeRequest::Tags { tags } => {
                format!("Purged {} cache tag(s) from Cloudflare cache.", tags.len())
            }
            PurgeRequest::Hosts { hosts } => {
                format!("Purged {} host(s) from Cloudflare cache.", hosts.len())
            }
            PurgeRequest::Everything { .. } => format!(
                "Purged entire Cloudflare cache for {}.",
                self.zone_label(&receipt.id)
            ),
        };

        tracing::info!("cache purge completed for zone {}", receipt.id);
        Ok(Outcome::ok(message))
    }

    async fn try_zone_info(&self) -> Result<Outcome, AbilityError> {
        let (client, resolver) = self.connect()?;
        let zone_id = resolver.zone_id(&client).await?;

        let zone = client.zone_details(zone_id).await?;

        let paused = if zone.paused { ", paused" } else { "" };
        let plan = zone
            .plan
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("unknown");
        let message = format!(
            "Zone {} ({}) is {}{} on the {} plan.",
            zone.name, zone.id, zone.status, paused, plan
        );

        Ok(Outcome::ok_with_detail(message, serde_json::to_value(&zone)?))
    }

    async fn try_get_development_mode(&self) -> Result<Outcome, AbilityError> {
        let (client, resolver) = self.connect()?;
        let zone_id = resolver.zone_id(&client).await?;

        let setting = client.get_development_mode(zone_id).await?;

        let message = if setting.value.is_on() {
            format!(
                "Development mode is on, {} second(s) remaining.",
                setting.time_remaining
            )
        } else {
            "Development mode is off.".to_string()
        };

        Ok(Outcome::ok_with_detail(
            message,
            serde_json::to_value(&setting)?,
        ))
    }

    async fn try_set_development_mode(
        &self,
        input: &SetDevelopmentModeInput,
    ) -> Result<Outcome, AbilityError> {
        let (client, resolver) = self.connect()?;
        let zone_id = resolver.zone_id(&client).await?;

        let value = DevelopmentMode::from_enabled(input.enabled);
        let setting = client.set_development_mode(zone_id, value).await?;

        let message = if setting.value.is_on() {
            "Development mode turned on. Cloudflare switches it off automatically after three hours."
                .to_string()
        } else {
            "Development mode turned off.".to_string()
        };

        Ok(Outcome::ok_with_detail(
            message,
            serde_json::to_value(&setting)?,
        ))
    }

    fn zone_label(&self, zone_id: &str) -> String {
        match self.settings.domain.as_deref().filter(|d| !d.is_empty()) {
            Some(domain) => domain.to_string(),
            None => format!("zone {}", zone_id),
        }
    }
}

fn fold(err: AbilityError) -> Outcome {
    tracing::warn!("ability execution failed: {}", err);
    Outcome::fail(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_settings() -> Settings {
        Settings {
            caller_role: Some("admin".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_denied_role_short_circuits() {
        let service = AbilityService::new(Settings {
            api_token: Some("tok".to_string()),
            zone_id: Some("zone-1".to_string()),
            caller_role: Some("editor".to_string()),
            ..Default::default()
        });

        let outcome = service.clear_cache(&ClearCacheInput::default()).await;
        assert!(!outcome.success);
        assert!(outcome.message.contains("Permission denied"));
        assert!(outcome.message.contains("editor"));
    }

    #[tokio::test]
    async fn test_missing_credentials_fold_into_outcome() {
        let service = AbilityService::new(admin_settings());

        let outcome = service.clear_cache(&ClearCacheInput::default()).await;
        assert!(!outcome.success);
        assert!(outcome.message.contains("credentials not configured"));
    }

    #[tokio::test]
    async fn test_missing_zone_folds_into_outcome() {
        let service = AbilityService::new(Settings {
            api_token: Some("tok".to_string()),
            ..admin_settings()
        });

        let outcome = service.zone_info().await;
        assert!(!outcome.success);
        assert!(outcome.message.contains("no zone ID or domain configured"));
    }

    #[test]
    fn test_zone_label_prefers_domain() {
        let service = AbilityService::new(Settings {
            domain: Some("example.com".to_string()),
            ..Default::default()
        });
        assert_eq!(service.zone_label("z1"), "example.com");

        let service = AbilityService::new(Settings::default());
        assert_eq!(service.zone_label("z1"), "zone z1");
    }
}
