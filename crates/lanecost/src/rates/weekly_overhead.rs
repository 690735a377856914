use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fixed weekly costs carried by a unit regardless of the miles it runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct WeeklyOverhead {
    pub insurance: f64,
    pub dispatch_ops: f64,
    pub eld: f64,
    pub prepass: f64,
    pub sga: f64,
    pub miscellaneous: f64,
    pub trailer_lease: f64,
}

impl WeeklyOverhead {
    pub fn components(&self) -> [(&'static str, f64); 7] {
        [
            ("insurance", self.insurance),
            ("dispatch_ops", self.dispatch_ops),
            ("eld", self.eld),
            ("prepass", self.prepass),
            ("sga", self.sga),
            ("miscellaneous", self.miscellaneous),
            ("trailer_lease", self.trailer_lease),
        ]
    }

    pub fn total(&self) -> f64 {
        self.components().iter().map(|(_, value)| value).sum()
    }

    /// Spreads the weekly total over the standard weekly mileage.
    pub fn per_mile(&self, weekly_mileage_baseline: f64) -> f64 {
        if weekly_mileage_baseline > 0.0 {
            self.total() / weekly_mileage_baseline
        } else {
            0.0
        }
    }
}
