//! Cache purge request types

use serde::Serialize;

/// Body for `POST /zones/{id}/purge_cache`
///
/// Cloudflare accepts exactly one purge scope per request: everything, a
/// list of URLs, a list of cache tags, or a list of hostnames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PurgeRequest {
    Everything { purge_everything: bool },
    Files { files: Vec<String> },
    Tags { tags: Vec<String> },
    Hosts { hosts: Vec<String> },
}

impl PurgeRequest {
    pub fn everything() -> Self {
        PurgeRequest::Everything {
            purge_everything: true,
        }
    }

    pub fn files(files: Vec<String>) -> Self {
        PurgeRequest::Files { files }
    }

    pub fn tags(tags: Vec<String>) -> Self {
        PurgeRequest::Tags { tags }
    }

    pub fn hosts(hosts: Vec<String>) -> Self {
        PurgeRequest::Hosts { hosts }
    }

    /// Number of items in a scoped purge, `None` for a full purge
    pub fn scope_len(&self) -> Option<usize> {
        match self {
            PurgeRequest::Everything { .. } => None,
            PurgeRequest::Files { files } => Some(files.len()),
            PurgeRequest::Tags { tags } => Some(tags.len()),
            PurgeRequest::Hosts { hosts } => Some(hosts.len()),
        }
    }
}

/// Result payload of a purge call
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PurgeReceipt {
    /// The zone the purge was issued against
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_purge_everything() {
        let body = serde_json::to_value(PurgeRequest::everything()).unwrap();
        assert_eq!(body, serde_json::json!({"purge_everything": true}));
    }

    #[test]
    fn test_serialize_purge_files() {
        let request = PurgeRequest::files(vec![
            "https://example.com/style.css".to_string(),
            "https://example.com/app.js".to_string(),
        ]);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "files": ["https://example.com/style.css", "https://example.com/app.js"]
            })
        );
    }

    #[test]
    fn test_serialize_purge_tags_and_hosts() {
        let body = serde_json::to_value(PurgeRequest::tags(vec!["blog".to_string()])).unwrap();
        assert_eq!(body, serde_json::json!({"tags": ["blog"]}));

        let body =
            serde_json::to_value(PurgeRequest::hosts(vec!["www.example.com".to_string()])).unwrap();
        assert_eq!(body, serde_json::json!({"hosts": ["www.example.com"]}));
    }

    #[test]
    fn test_scope_len() {
        assert_eq!(PurgeRequest::everything().scope_len(), None);
        assert_eq!(
            PurgeRequest::files(vec!["a".to_string(), "b".to_string()]).scope_len(),
            Some(2)
        );
    }
}
