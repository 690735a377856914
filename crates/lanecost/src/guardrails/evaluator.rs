use schemars::JsonSchema;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

use crate::guardrails::{
    business_rule::{BusinessRule, RuleKey, Severity},
    guardrail::{Guardrail, GuardrailInput, GuardrailType},
    recommendation::BookingRecommendation,
};

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Violation {
    pub rule_key: RuleKey,
    pub severity: Severity,
    pub actual: f64,
    pub threshold: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct GuardrailResult {
    /// Ranked critical first, then warning, then info. Rules of the same
    /// severity keep their catalog order.
    pub violations: SmallVec<[Violation; 4]>,
    pub recommendation: BookingRecommendation,
}

impl GuardrailResult {
    pub fn is_ready(&self) -> bool {
        self.recommendation.is_ready()
    }

    pub fn has_critical(&self) -> bool {
        self.violations
            .iter()
            .any(|violation| violation.severity == Severity::Critical)
    }
}

fn is_applicable(rule: &BusinessRule) -> bool {
    if !rule.is_active {
        debug!(rule = %rule.key, "Skipping inactive rule");
        return false;
    }

    if !rule.threshold.is_finite() {
        debug!(rule = %rule.key, threshold = rule.threshold, "Skipping rule with invalid threshold");
        return false;
    }

    true
}

/// Checks a costed trip against every applicable rule. Rules that do not apply
/// are skipped, never reported as errors. A non-finite margin or CPM breaches
/// every rule that measures it.
pub fn evaluate(margin_pct: f64, total_cpm: f64, rules: &[BusinessRule]) -> GuardrailResult {
    let input = GuardrailInput {
        margin_pct,
        total_cpm,
    };

    let mut violations: SmallVec<[Violation; 4]> = rules
        .iter()
        .filter(|rule| is_applicable(rule))
        .filter_map(|rule| {
            let guardrail = GuardrailType::from_rule(rule);
            let actual = guardrail.check(&input)?;
            debug!(
                guardrail = guardrail.guardrail_name(),
                actual,
                threshold = rule.threshold,
                "Guardrail breached"
            );

            Some(Violation {
                rule_key: rule.key,
                severity: rule.severity,
                actual,
                threshold: guardrail.threshold(),
                message: guardrail.message(),
            })
        })
        .collect();

    // Stable, so equal severities keep catalog order.
    violations.sort_by_key(|violation| violation.severity);

    let recommendation =
        BookingRecommendation::from_severities(violations.iter().map(|violation| violation.severity));

    GuardrailResult {
        violations,
        recommendation,
    }
}

/// Threshold of the first applicable `target_margin` rule.
pub fn target_margin_pct(rules: &[BusinessRule]) -> Option<f64> {
    rules
        .iter()
        .filter(|rule| rule.key == RuleKey::TargetMargin)
        .find(|rule| is_applicable(rule) && (0.0..100.0).contains(&rule.threshold))
        .map(|rule| rule.threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guardrails::business_rule::RuleScope;

    fn catalog() -> Vec<BusinessRule> {
        vec![
            BusinessRule::new(RuleKey::MinMarginThreshold, 8.0, Severity::Critical),
            BusinessRule::new(RuleKey::TargetMargin, 15.0, Severity::Warning)
                .with_scope(RuleScope::Booking),
            BusinessRule::new(RuleKey::MaxCostPerMile, 2.5, Severity::Warning),
        ]
    }

    #[test]
    fn test_no_violations_is_ready() {
        let result = evaluate(26.0, 1.85, &catalog());

        assert!(result.violations.is_empty());
        assert_eq!(result.recommendation, BookingRecommendation::Ready);
    }

    #[test]
    fn test_critical_min_margin_is_not_recommended() {
        let rules = [BusinessRule::new(
            RuleKey::MinMarginThreshold,
            15.0,
            Severity::Critical,
        )];
        let result = evaluate(7.5, 1.85, &rules);

        assert_eq!(result.recommendation, BookingRecommendation::NotRecommended);
        assert_eq!(result.violations.len(), 1);

        let violation = &result.violations[0];
        assert_eq!(violation.rule_key, RuleKey::MinMarginThreshold);
        assert_eq!(violation.actual, 7.5);
        assert_eq!(violation.threshold, 15.0);
        assert_eq!(violation.message, "Margin below minimum threshold (15%)");
    }

    #[test]
    fn test_warning_only_is_caution() {
        let result = evaluate(12.0, 1.85, &catalog());

        assert_eq!(result.recommendation, BookingRecommendation::Caution);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].rule_key, RuleKey::TargetMargin);
    }

    #[test]
    fn test_info_only_is_caution() {
        let rules = [BusinessRule::new(RuleKey::MaxCostPerMile, 1.0, Severity::Info)];
        let result = evaluate(30.0, 1.85, &rules);

        assert_eq!(result.recommendation, BookingRecommendation::Caution);
        assert!(!result.is_ready());
    }

    #[test]
    fn test_all_violations_reported_critical_first() {
        let mut rules = catalog();
        rules.push(BusinessRule::new(RuleKey::TargetMargin, 40.0, Severity::Info));
        let result = evaluate(5.0, 3.0, &rules);

        let ranked: Vec<(RuleKey, Severity)> = result
            .violations
            .iter()
            .map(|violation| (violation.rule_key, violation.severity))
            .collect();

        assert_eq!(
            ranked,
            vec![
                (RuleKey::MinMarginThreshold, Severity::Critical),
                (RuleKey::TargetMargin, Severity::Warning),
                (RuleKey::MaxCostPerMile, Severity::Warning),
                (RuleKey::TargetMargin, Severity::Info),
            ]
        );
        assert!(result.has_critical());
        assert_eq!(result.recommendation, BookingRecommendation::NotRecommended);
    }

    #[test]
    fn test_inactive_and_invalid_rules_are_skipped() {
        let rules = [
            BusinessRule::new(RuleKey::MinMarginThreshold, 50.0, Severity::Critical).inactive(),
            BusinessRule::new(RuleKey::TargetMargin, f64::NAN, Severity::Critical),
        ];
        let result = evaluate(10.0, 1.85, &rules);

        assert!(result.violations.is_empty());
        assert!(result.is_ready());
    }

    #[test]
    fn test_ready_iff_no_violations() {
        let rules = catalog();

        for margin in [-20.0, 0.0, 7.9, 8.0, 14.9, 15.0, 40.0] {
            for cpm in [0.0, 1.85, 2.5, 2.51, 4.0] {
                let result = evaluate(margin, cpm, &rules);
                assert_eq!(result.is_ready(), result.violations.is_empty());
                if result.has_critical() {
                    assert_eq!(result.recommendation, BookingRecommendation::NotRecommended);
                }
            }
        }
    }

    #[test]
    fn test_non_finite_measurements_are_not_ready() {
        let result = evaluate(f64::NAN, 1.85, &catalog());

        assert_eq!(result.recommendation, BookingRecommendation::NotRecommended);
        assert_eq!(result.violations.len(), 2);
        assert_eq!(result.violations[0].rule_key, RuleKey::MinMarginThreshold);
        assert!(result.violations[0].actual.is_nan());

        let result = evaluate(26.0, f64::INFINITY, &catalog());
        assert_eq!(result.recommendation, BookingRecommendation::Caution);
        assert_eq!(result.violations[0].rule_key, RuleKey::MaxCostPerMile);
    }

    #[test]
    fn test_target_margin_pct() {
        assert_eq!(target_margin_pct(&catalog()), Some(15.0));
        assert_eq!(target_margin_pct(&catalog()[..1]), None);

        let rules = [
            BusinessRule::new(RuleKey::TargetMargin, 25.0, Severity::Warning).inactive(),
            BusinessRule::new(RuleKey::TargetMargin, 18.0, Severity::Warning),
        ];
        assert_eq!(target_margin_pct(&rules), Some(18.0));
    }
}
