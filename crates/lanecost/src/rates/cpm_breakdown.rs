use schemars::JsonSchema;
use serde::Serialize;

use crate::trip::miles::Miles;

/// Per-mile cost components of a resolved rate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, JsonSchema)]
pub struct CpmBreakdown {
    pub wage: f64,
    pub fuel: f64,
    pub truck_maintenance: f64,
    pub trailer_maintenance: f64,
    pub rolling: f64,
    /// Weekly overhead amortized over the weekly mileage baseline.
    pub fixed: f64,
}

impl CpmBreakdown {
    pub fn variable(&self) -> f64 {
        self.wage + self.fuel + self.truck_maintenance + self.trailer_maintenance + self.rolling
    }

    pub fn total(&self) -> f64 {
        self.variable() + self.fixed
    }

    /// Dollar amount of every component over the given distance.
    pub fn over(&self, miles: Miles) -> CpmBreakdown {
        CpmBreakdown {
            wage: miles * self.wage,
            fuel: miles * self.fuel,
            truck_maintenance: miles * self.truck_maintenance,
            trailer_maintenance: miles * self.trailer_maintenance,
            rolling: miles * self.rolling,
            fixed: miles * self.fixed,
        }
    }

    pub fn components(&self) -> [(&'static str, f64); 6] {
        [
            ("wage", self.wage),
            ("fuel", self.fuel),
            ("truck_maintenance", self.truck_maintenance),
            ("trailer_maintenance", self.trailer_maintenance),
            ("rolling", self.rolling),
            ("fixed", self.fixed),
        ]
    }
}
