use crate::guardrails::{
    business_rule::{BusinessRule, RuleKey},
    max_cost_per_mile_guardrail::MaxCostPerMileGuardrail,
    min_margin_guardrail::MinMarginGuardrail,
    target_margin_guardrail::TargetMarginGuardrail,
};

/// Measured values of a costed trip that guardrails are checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardrailInput {
    pub margin_pct: f64,
    pub total_cpm: f64,
}

pub trait Guardrail {
    fn threshold(&self) -> f64;

    /// Returns the measured value when it breaches the threshold. A NaN or
    /// infinite measurement always breaches.
    fn check(&self, input: &GuardrailInput) -> Option<f64>;

    fn message(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardrailType {
    MinMargin(MinMarginGuardrail),
    TargetMargin(TargetMarginGuardrail),
    MaxCostPerMile(MaxCostPerMileGuardrail),
}

impl GuardrailType {
    pub fn from_rule(rule: &BusinessRule) -> Self {
        match rule.key {
            RuleKey::MinMarginThreshold => {
                Self::MinMargin(MinMarginGuardrail::new(rule.threshold))
            }
            RuleKey::TargetMargin => Self::TargetMargin(TargetMarginGuardrail::new(rule.threshold)),
            RuleKey::MaxCostPerMile => {
                Self::MaxCostPerMile(MaxCostPerMileGuardrail::new(rule.threshold))
            }
        }
    }

    pub fn guardrail_name(&self) -> &'static str {
        match self {
            Self::MinMargin(_) => "min_margin",
            Self::TargetMargin(_) => "target_margin",
            Self::MaxCostPerMile(_) => "max_cost_per_mile",
        }
    }
}

impl Guardrail for GuardrailType {
    fn threshold(&self) -> f64 {
        match self {
            Self::MinMargin(guardrail) => guardrail.threshold(),
            Self::TargetMargin(guardrail) => guardrail.threshold(),
            Self::MaxCostPerMile(guardrail) => guardrail.threshold(),
        }
    }

    fn check(&self, input: &GuardrailInput) -> Option<f64> {
        match self {
            Self::MinMargin(guardrail) => guardrail.check(input),
            Self::TargetMargin(guardrail) => guardrail.check(input),
            Self::MaxCostPerMile(guardrail) => guardrail.check(input),
        }
    }

    fn message(&self) -> String {
        match self {
            Self::MinMargin(guardrail) => guardrail.message(),
            Self::TargetMargin(guardrail) => guardrail.message(),
            Self::MaxCostPerMile(guardrail) => guardrail.message(),
        }
    }
}
