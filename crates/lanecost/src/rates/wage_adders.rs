use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Percentage adders on top of the base driver wage, as fractions (`0.12` is 12%).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct WageAdders {
    pub benefits_pct: f64,
    pub performance_pct: f64,
    pub safety_pct: f64,
    pub step_pct: f64,
}

impl WageAdders {
    pub fn components(&self) -> [(&'static str, f64); 4] {
        [
            ("benefits_pct", self.benefits_pct),
            ("performance_pct", self.performance_pct),
            ("safety_pct", self.safety_pct),
            ("step_pct", self.step_pct),
        ]
    }

    pub fn total(&self) -> f64 {
        self.components().iter().map(|(_, value)| value).sum()
    }

    /// Effective wage per mile for the given base wage.
    pub fn apply(&self, base_wage_cpm: f64) -> f64 {
        base_wage_cpm * (1.0 + self.total())
    }
}
