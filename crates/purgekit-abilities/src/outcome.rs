//! Normalized ability results
//!
//! Every ability execution produces the same shape regardless of what went
//! wrong underneath: transport failures, API-level `success: false` bodies,
//! and misconfiguration all fold into a failed `Outcome`.

use serde::{Deserialize, Serialize};

/// Uniform result of an ability execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
    pub message: String,

    /// Structured payload for read operations (zone info, settings)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl Outcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            detail: None,
        }
    }

    pub fn ok_with_detail(message: impl Into<String>, detail: serde_json::Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            detail: Some(detail),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            detail: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(Outcome::ok("Purged entire Cloudflare cache for example.com.")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "success": true,
                "message": "Purged entire Cloudflare cache for example.com."
            })
        );
    }

    #[test]
    fn test_detail_is_kept_when_present() {
        let value = serde_json::to_value(Outcome::ok_with_detail(
            "m",
            serde_json::json!({"id": "z1"}),
        ))
        .unwrap();
        assert_eq!(value["detail"]["id"], "z1");
    }
}
