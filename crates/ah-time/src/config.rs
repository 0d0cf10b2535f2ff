//! Clock configuration
//!
//! Serialized in the settings shape the clock pages exchange:
//! `{"policyKind": "fixed"|"variable", "normalPeriodMinutes": n, "timezoneName": "..."}`

use ah_core::{AhError, AhResult, ScalingPolicy};
use serde::{Deserialize, Serialize};

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Policy and timezone of one on-screen clock
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(flatten)]
    pub policy: ScalingPolicy,
    #[serde(rename = "timezoneName", default = "default_timezone")]
    pub timezone: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            policy: ScalingPolicy::Fixed,
            timezone: default_timezone(),
        }
    }
}

impl ClockConfig {
    /// Main/world clock in `timezone`
    pub fn fixed(timezone: impl Into<String>) -> Self {
        ClockConfig {
            policy: ScalingPolicy::Fixed,
            timezone: timezone.into(),
        }
    }

    /// Personalized clock; `normal_period_minutes` clamps to `[0, 1440]`
    pub fn variable(timezone: impl Into<String>, normal_period_minutes: i64) -> Self {
        ClockConfig {
            policy: ScalingPolicy::variable(normal_period_minutes),
            timezone: timezone.into(),
        }
    }

    pub fn from_json(json: &str) -> AhResult<Self> {
        serde_json::from_str(json).map_err(|err| AhError::InvalidConfig(err.to_string()))
    }

    pub fn to_json(&self) -> AhResult<String> {
        serde_json::to_string(self).map_err(|err| AhError::InvalidConfig(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ah_core::NormalPeriod;

    #[test]
    fn test_default_config() {
        let config = ClockConfig::default();
        assert_eq!(config.policy, ScalingPolicy::Fixed);
        assert_eq!(config.timezone, "UTC");
    }

    #[test]
    fn test_parse_variable() {
        let config = ClockConfig::from_json(
            r#"{"policyKind":"variable","normalPeriodMinutes":720,"timezoneName":"Asia/Tokyo"}"#,
        )
        .unwrap();
        assert_eq!(config, ClockConfig::variable("Asia/Tokyo", 720));
    }

    #[test]
    fn test_parse_clamps() {
        let config = ClockConfig::from_json(
            r#"{"policyKind":"variable","normalPeriodMinutes":2000,"timezoneName":"UTC"}"#,
        )
        .unwrap();
        assert_eq!(config.policy.normal_period(), NormalPeriod::FULL_DAY);
    }

    #[test]
    fn test_parse_clamps_float_minutes() {
        let minutes = |value: &str| {
            let json = format!(
                r#"{{"policyKind":"variable","normalPeriodMinutes":{},"timezoneName":"UTC"}}"#,
                value
            );
            ClockConfig::from_json(&json).unwrap().policy.normal_period().minutes()
        };
        assert_eq!(minutes("1e4"), 1440);
        assert_eq!(minutes("-1e30"), 0);
        assert_eq!(minutes("720.5"), 720);
        assert_eq!(minutes("99999999999999999999"), 1440);
        assert_eq!(minutes("-50"), 0);
    }

    #[test]
    fn test_parse_defaults() {
        let config = ClockConfig::from_json(r#"{"policyKind":"fixed"}"#).unwrap();
        assert_eq!(config, ClockConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        let result = ClockConfig::from_json(r#"{"policyKind":"lunar","timezoneName":"UTC"}"#);
        assert!(matches!(result, Err(AhError::InvalidConfig(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = ClockConfig::variable("Europe/Paris", 900);
        let json = config.to_json().unwrap();
        assert_eq!(ClockConfig::from_json(&json).unwrap(), config);
    }
}
