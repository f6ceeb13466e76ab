//! Ability input types
//!
//! These derive `JsonSchema` so hosts can publish and validate the input
//! schema before the execute callback ever runs.

use purgekit_cloudflare::PurgeRequest;
use schemars::JsonSchema;
use serde::Deserialize;

/// Input for `cloudflare/clear-cache`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ClearCacheInput {
    /// Purge all cached files (default: true)
    #[serde(default = "default_true")]
    pub purge_everything: bool,

    /// Specific URLs to purge instead of everything
    #[serde(default)]
    pub files: Option<Vec<String>>,

    /// Cache tags to purge instead of everything
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Hostnames to purge instead of everything
    #[serde(default)]
    pub hosts: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}

impl Default for ClearCacheInput {
    fn default() -> Self {
        Self {
            purge_everything: true,
            files: None,
            tags: None,
            hosts: None,
        }
    }
}

impl ClearCacheInput {
    /// Select the purge scope: an explicit non-empty list wins over
    /// `purge_everything`, files before tags before hosts.
    pub fn to_request(&self) -> PurgeRequest {
        if let Some(files) = non_empty(&self.files) {
            return PurgeRequest::files(files);
        }
        if let Some(tags) = non_empty(&self.tags) {
            return PurgeRequest::tags(tags);
        }
        if let Some(hosts) = non_empty(&self.hosts) {
            return PurgeRequest::hosts(hosts);
        }
        PurgeRequest::Everything {
            purge_everything: self.purge_everything,
        }
    }
}

fn non_empty(list: &Option<Vec<String>>) -> Option<Vec<String>> {
    list.as_ref().filter(|l| !l.is_empty()).cloned()
}

/// Input for `cloudflare/set-development-mode`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SetDevelopmentModeInput {
    /// Turn development mode on (bypass cache) or off
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_purges_everything() {
        let input: ClearCacheInput = serde_json::from_str("{}").unwrap();
        assert!(input.purge_everything);
        assert_eq!(input.to_request(), PurgeRequest::everything());
    }

    #[test]
    fn test_files_take_precedence() {
        let input: ClearCacheInput = serde_json::from_str(
            r#"{"purge_everything": true, "files": ["https://example.com/a.css"]}"#,
        )
        .unwrap();
        assert_eq!(
            input.to_request(),
            PurgeRequest::files(vec!["https://example.com/a.css".to_string()])
        );
    }

    #[test]
    fn test_empty_file_list_falls_back_to_everything() {
        let input: ClearCacheInput =
            serde_json::from_str(r#"{"files": [], "tags": [], "hosts": []}"#).unwrap();
        assert_eq!(input.to_request(), PurgeRequest::everything());
    }

    #[test]
    fn test_tags_before_hosts() {
        let input: ClearCacheInput =
            serde_json::from_str(r#"{"tags": ["blog"], "hosts": ["www.example.com"]}"#).unwrap();
        assert_eq!(
            input.to_request(),
            PurgeRequest::tags(vec!["blog".to_string()])
        );
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<ClearCacheInput, _> =
            serde_json::from_str(r#"{"purge_every_thing": true}"#);
        assert!(result.is_err());
    }
}
