use crate::error::Result;
use annolint_api::Severity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_SOURCE: &str = "jakarta";

/// Caller-supplied switches for a diagnostics pass.
///
/// The engine never enables or disables rules on its own; everything here comes
/// from the host (typically LSP initialization options).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagnosticsSettings {
    /// When non-empty, only these codes are reported.
    pub enabled_codes: Vec<String>,
    pub disabled_codes: Vec<String>,
    pub severity_overrides: BTreeMap<String, Severity>,
    pub source: String,
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            enabled_codes: Vec::new(),
            disabled_codes: Vec::new(),
            severity_overrides: BTreeMap::new(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

impl DiagnosticsSettings {
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn is_enabled(&self, code: &str) -> bool {
        if self.disabled_codes.iter().any(|c| c == code) {
            return false;
        }
        self.enabled_codes.is_empty() || self.enabled_codes.iter().any(|c| c == code)
    }

    pub fn severity_for(&self, code: &str, default: Severity) -> Severity {
        self.severity_overrides.get(code).copied().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_partial_json() {
        let settings = DiagnosticsSettings::from_json(&json!({
            "disabledCodes": ["UnusedConstructor"],
            "severityOverrides": { "PostConstructException": "error" }
        }))
        .unwrap();
        assert_eq!(settings.source, DEFAULT_SOURCE);
        assert!(!settings.is_enabled("UnusedConstructor"));
        assert!(settings.is_enabled("AmbiguousConstructors"));
        assert_eq!(
            settings.severity_for("PostConstructException", Severity::Warning),
            Severity::Error
        );
    }

    #[test]
    fn allow_list_restricts_codes() {
        let settings = DiagnosticsSettings {
            enabled_codes: vec!["NonPublicResourceMethod".to_string()],
            ..DiagnosticsSettings::default()
        };
        assert!(settings.is_enabled("NonPublicResourceMethod"));
        assert!(!settings.is_enabled("AmbiguousConstructors"));
        assert_eq!(DiagnosticsSettings::from_json(&serde_json::Value::Null).unwrap(), DiagnosticsSettings::default());
    }
}
