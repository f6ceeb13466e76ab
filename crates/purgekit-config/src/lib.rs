//! Configuration management for purgekit
//!
//! Settings come from two layers: an optional YAML settings file and
//! environment variables, with the environment taking priority. This mirrors
//! how the Cloudflare credentials are usually already present in the
//! environment of the machine issuing the purge.

pub mod error;

pub use error::*;

use purgekit_cloudflare::Credentials;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Role allowed to execute abilities. The permission model is a single
/// equality check against this value.
pub const MANAGE_ROLE: &str = "admin";

/// Resolved purgekit settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Scoped API token (preferred over the global key pair)
    #[serde(default)]
    pub api_token: Option<String>,

    /// Account email for the legacy global key pair
    #[serde(default)]
    pub api_email: Option<String>,

    /// Legacy global API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Zone ID, skips the per-domain lookup when set
    #[serde(default)]
    pub zone_id: Option<String>,

    /// Domain used to look up the zone ID when none is stored
    #[serde(default)]
    pub domain: Option<String>,

    /// Role of the caller, checked against [`MANAGE_ROLE`]
    #[serde(default)]
    pub caller_role: Option<String>,
}

impl Settings {
    /// Load settings: YAML file (if any) overridden by environment variables
    pub fn load() -> Result<Self> {
        let mut settings = match find_config_file() {
            Some(path) => Self::from_file(&path)?,
            None => Settings::default(),
        };
        settings.apply_env();
        Ok(settings)
    }

    /// Parse a settings file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Overlay environment variables on top of file values
    pub fn apply_env(&mut self) {
        overlay(&mut self.api_token, "CLOUDFLARE_API_TOKEN");
        overlay(&mut self.api_email, "CLOUDFLARE_API_EMAIL");
        overlay(&mut self.api_key, "CLOUDFLARE_API_KEY");
        overlay(&mut self.zone_id, "CLOUDFLARE_ZONE_ID");
        overlay(&mut self.domain, "CLOUDFLARE_DOMAIN");
        overlay(&mut self.caller_role, "PURGEKIT_ROLE");
    }

    /// Build API credentials, requiring them to be present before any call
    pub fn credentials(&self) -> Result<Credentials> {
        if let Some(token) = non_empty(&self.api_token) {
            return Ok(Credentials::Token(token.to_string()));
        }
        match (non_empty(&self.api_email), non_empty(&self.api_key)) {
            (Some(email), Some(key)) => Ok(Credentials::GlobalKey {
                email: email.to_string(),
                key: key.to_string(),
            }),
            _ => Err(ConfigError::MissingCredentials),
        }
    }

    /// Role used for the permission check, defaulting to [`MANAGE_ROLE`]
    pub fn caller_role(&self) -> &str {
        non_empty(&self.caller_role).unwrap_or(MANAGE_ROLE)
    }
}

fn overlay(slot: &mut Option<String>, var: &str) {
    if let Ok(value) = std::env::var(var) {
        if !value.is_empty() {
            *slot = Some(value);
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Find the purgekit settings file
///
/// Search order:
/// 1. `PURGEKIT_CONFIG_PATH` environment variable (direct path)
/// 2. Current directory: `purgekit.yaml`, `.purgekit.yaml`
/// 3. `./.purgekit/purgekit.yaml`
/// 4. `~/.config/purgekit/purgekit.yaml` (global settings)
pub fn find_config_file() -> Option<PathBuf> {
    if let Ok(config_path) = std::env::var("PURGEKIT_CONFIG_PATH") {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Some(path);
        }
    }

    let current_dir = std::env::current_dir().ok()?;
    let candidates = ["purgekit.yaml", ".purgekit.yaml"];

    for filename in &candidates {
        let path = current_dir.join(filename);
        if path.exists() {
            return Some(path);
        }
    }

    let local_dir = current_dir.join(".purgekit");
    if local_dir.is_dir() {
        let path = local_dir.join("purgekit.yaml");
        if path.exists() {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let global_config = config_dir.join("purgekit").join("purgekit.yaml");
        if global_config.exists() {
            return Some(global_config);
        }
    }

    None
}

/// Directory for global purgekit settings, created on demand
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("purgekit");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}
