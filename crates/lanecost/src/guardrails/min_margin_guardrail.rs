use crate::guardrails::guardrail::{Guardrail, GuardrailInput};

/// Hard floor on the margin percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMarginGuardrail {
    threshold: f64,
}

impl MinMarginGuardrail {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Guardrail for MinMarginGuardrail {
    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn check(&self, input: &GuardrailInput) -> Option<f64> {
        (!input.margin_pct.is_finite() || input.margin_pct < self.threshold)
            .then_some(input.margin_pct)
    }

    fn message(&self) -> String {
        format!("Margin below minimum threshold ({}%)", self.threshold)
    }
}
