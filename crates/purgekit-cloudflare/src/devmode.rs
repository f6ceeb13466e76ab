//! Development mode zone setting

use serde::{Deserialize, Serialize};

/// Development mode state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevelopmentMode {
    On,
    Off,
}

impl DevelopmentMode {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            DevelopmentMode::On
        } else {
            DevelopmentMode::Off
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, DevelopmentMode::On)
    }
}

impl std::fmt::Display for DevelopmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DevelopmentMode::On => write!(f, "on"),
            DevelopmentMode::Off => write!(f, "off"),
        }
    }
}

/// A zone setting as returned by `GET /zones/{id}/settings/development_mode`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneSetting {
    pub id: String,
    pub value: DevelopmentMode,
    /// Seconds until development mode switches itself off
    #[serde(default)]
    pub time_remaining: i64,
    pub modified_on: Option<String>,
}

/// Body for `PATCH /zones/{id}/settings/development_mode`
#[derive(Debug, Serialize)]
pub struct SetSettingRequest {
    pub value: DevelopmentMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_setting() {
        let body = r#"{
            "id": "development_mode",
            "value": "on",
            "time_remaining": 3600,
            "modified_on": "2026-08-01T05:20:00.12345Z",
            "editable": true
        }"#;
        let setting: ZoneSetting = serde_json::from_str(body).unwrap();
        assert_eq!(setting.id, "development_mode");
        assert!(setting.value.is_on());
        assert_eq!(setting.time_remaining, 3600);
    }

    #[test]
    fn test_parse_setting_without_time_remaining() {
        let body = r#"{"id": "development_mode", "value": "off", "modified_on": null}"#;
        let setting: ZoneSetting = serde_json::from_str(body).unwrap();
        assert_eq!(setting.value, DevelopmentMode::Off);
        assert_eq!(setting.time_remaining, 0);
        assert!(setting.modified_on.is_none());
    }

    #[test]
    fn test_serialize_set_request() {
        let body = serde_json::to_value(SetSettingRequest {
            value: DevelopmentMode::On,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"value": "on"}));
    }

    #[test]
    fn test_from_enabled() {
        assert_eq!(DevelopmentMode::from_enabled(true), DevelopmentMode::On);
        assert_eq!(DevelopmentMode::from_enabled(false), DevelopmentMode::Off);
        assert_eq!(DevelopmentMode::On.to_string(), "on");
    }
}
