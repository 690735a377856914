use crate::guardrails::guardrail::{Guardrail, GuardrailInput};

/// Margin the desk aims for. Missing it is usually a warning rather than a
/// reason to refuse the load.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetMarginGuardrail {
    threshold: f64,
}

impl TargetMarginGuardrail {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Guardrail for TargetMarginGuardrail {
    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn check(&self, input: &GuardrailInput) -> Option<f64> {
        (!input.margin_pct.is_finite() || input.margin_pct < self.threshold)
            .then_some(input.margin_pct)
    }

    fn message(&self) -> String {
        format!("Margin below target ({}%)", self.threshold)
    }
}
