use crate::guardrails::guardrail::{Guardrail, GuardrailInput};

#[derive(Debug, Clone, PartialEq)]
pub struct MaxCostPerMileGuardrail {
    threshold: f64,
}

impl MaxCostPerMileGuardrail {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Guardrail for MaxCostPerMileGuardrail {
    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn check(&self, input: &GuardrailInput) -> Option<f64> {
        (!input.total_cpm.is_finite() || input.total_cpm > self.threshold)
            .then_some(input.total_cpm)
    }

    fn message(&self) -> String {
        format!("Cost per mile exceeds maximum (${:.2})", self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_cost_per_mile() {
        let guardrail = MaxCostPerMileGuardrail::new(2.5);
        let input = |total_cpm| GuardrailInput {
            margin_pct: 20.0,
            total_cpm,
        };

        assert_eq!(guardrail.check(&input(2.75)), Some(2.75));
        assert_eq!(guardrail.check(&input(2.5)), None);
        assert_eq!(guardrail.message(), "Cost per mile exceeds maximum ($2.50)");
        assert!(guardrail.check(&input(f64::NAN)).is_some_and(f64::is_nan));
    }
}
