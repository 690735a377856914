use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleKey {
    MinMarginThreshold,
    TargetMargin,
    MaxCostPerMile,
}

impl RuleKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKey::MinMarginThreshold => "min_margin_threshold",
            RuleKey::TargetMargin => "target_margin",
            RuleKey::MaxCostPerMile => "max_cost_per_mile",
        }
    }
}

impl std::fmt::Display for RuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min_margin_threshold" => Ok(RuleKey::MinMarginThreshold),
            "target_margin" => Ok(RuleKey::TargetMargin),
            "max_cost_per_mile" => Ok(RuleKey::MaxCostPerMile),
            _ => Err(()),
        }
    }
}

/// Variants are declared from most to least severe, so the derived ordering
/// sorts critical first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => f.write_str("critical"),
            Severity::Warning => f.write_str("warning"),
            Severity::Info => f.write_str("info"),
        }
    }
}

impl FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleScope {
    Trip,
    Booking,
}

impl FromStr for RuleScope {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trip" => Ok(RuleScope::Trip),
            "booking" => Ok(RuleScope::Booking),
            _ => Err(()),
        }
    }
}

/// A threshold from the business rules catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BusinessRule {
    pub key: RuleKey,
    pub threshold: f64,
    pub severity: Severity,
    pub scope: RuleScope,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BusinessRule {
    pub fn new(key: RuleKey, threshold: f64, severity: Severity) -> Self {
        Self {
            key,
            threshold,
            severity,
            scope: RuleScope::Trip,
            is_active: true,
            description: None,
        }
    }

    pub fn with_scope(mut self, scope: RuleScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_orders_critical_first() {
        let mut severities = vec![Severity::Info, Severity::Critical, Severity::Warning];
        severities.sort();

        assert_eq!(
            severities,
            vec![Severity::Critical, Severity::Warning, Severity::Info]
        );
    }

    #[test]
    fn test_parse_rule_key() {
        assert_eq!(
            " MIN_MARGIN_THRESHOLD ".parse::<RuleKey>(),
            Ok(RuleKey::MinMarginThreshold)
        );
        assert_eq!("max_cost_per_mile".parse::<RuleKey>(), Ok(RuleKey::MaxCostPerMile));
        assert!("max_detention_hours".parse::<RuleKey>().is_err());
    }

    #[test]
    fn test_deserialize_rule() {
        let rule: BusinessRule = serde_json::from_value(serde_json::json!({
            "key": "target_margin",
            "threshold": 20.0,
            "severity": "warning",
            "scope": "booking",
            "is_active": true
        }))
        .unwrap();

        assert_eq!(
            rule,
            BusinessRule::new(RuleKey::TargetMargin, 20.0, Severity::Warning)
                .with_scope(RuleScope::Booking)
        );
    }
}
