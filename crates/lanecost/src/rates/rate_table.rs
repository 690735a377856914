use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::CostingError,
    rates::{
        driver_type::{DriverProfile, OoZone},
        wage_adders::WageAdders,
        weekly_overhead::WeeklyOverhead,
        zone::ZoneMap,
    },
};

/// Per-mile constants of one driver profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DriverRates {
    /// Base wage, before adders.
    pub wage_cpm: f64,
    #[serde(default)]
    pub wage_adders: WageAdders,
    pub fuel_cpm: f64,
    pub truck_maintenance_cpm: f64,
    pub trailer_maintenance_cpm: f64,
    /// Other per-mile costs, such as tolls or permits.
    #[serde(default)]
    pub rolling_cpm: f64,
    #[serde(default)]
    pub weekly_overhead: WeeklyOverhead,
}

impl DriverRates {
    pub fn effective_wage_cpm(&self) -> f64 {
        self.wage_adders.apply(self.wage_cpm)
    }

    fn validate(&self, profile: DriverProfile) -> Result<(), CostingError> {
        let values = [
            self.wage_cpm,
            self.fuel_cpm,
            self.truck_maintenance_cpm,
            self.trailer_maintenance_cpm,
            self.rolling_cpm,
        ]
        .into_iter()
        .chain(self.wage_adders.components().map(|(_, value)| value))
        .chain(self.weekly_overhead.components().map(|(_, value)| value));

        for value in values {
            CostingError::check_non_negative("rate table", value).map_err(|error| {
                CostingError::invalid_input("rate table", format!("{profile}: {error}"))
            })?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OwnerOperatorRates {
    pub zone1: DriverRates,
    pub zone2: DriverRates,
    pub zone3: DriverRates,
}

/// Rate configuration handed to the resolver. Loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RateTable {
    pub company: DriverRates,
    pub rental: DriverRates,
    pub owner_operator: OwnerOperatorRates,

    /// Miles a unit is assumed to run per week, used to amortize overhead.
    pub weekly_mileage_baseline: f64,

    /// Owner-operator zone per lane kind, used when a booking has no zone.
    #[serde(default)]
    pub zone_map: ZoneMap,

    #[serde(default = "default_zone")]
    pub default_zone: OoZone,

    /// Margin targeted by pricing suggestions when no `target_margin` rule is
    /// active, in percent.
    #[serde(default = "default_target_margin_pct")]
    pub default_target_margin_pct: f64,
}

fn default_zone() -> OoZone {
    OoZone::Zone2
}

fn default_target_margin_pct() -> f64 {
    15.0
}

impl RateTable {
    pub fn rates_for(&self, profile: DriverProfile) -> &DriverRates {
        match profile {
            DriverProfile::Company => &self.company,
            DriverProfile::Rental => &self.rental,
            DriverProfile::OwnerOperatorZone1 => &self.owner_operator.zone1,
            DriverProfile::OwnerOperatorZone2 => &self.owner_operator.zone2,
            DriverProfile::OwnerOperatorZone3 => &self.owner_operator.zone3,
        }
    }

    pub fn validate(&self) -> Result<(), CostingError> {
        if !self.weekly_mileage_baseline.is_finite() || self.weekly_mileage_baseline <= 0.0 {
            return Err(CostingError::invalid_input(
                "weekly_mileage_baseline",
                format!("{} must be a positive number", self.weekly_mileage_baseline),
            ));
        }

        if !(0.0..100.0).contains(&self.default_target_margin_pct) {
            return Err(CostingError::invalid_input(
                "default_target_margin_pct",
                format!("{} is outside [0, 100)", self.default_target_margin_pct),
            ));
        }

        for profile in DriverProfile::ALL {
            self.rates_for(profile).validate(profile)?;
        }

        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        let fleet_overhead = WeeklyOverhead {
            insurance: 450.0,
            dispatch_ops: 120.0,
            eld: 35.0,
            prepass: 25.0,
            sga: 180.0,
            miscellaneous: 75.0,
            trailer_lease: 250.0,
        };

        // Owner-operators insure their own tractor.
        let owner_operator_overhead = WeeklyOverhead {
            insurance: 0.0,
            ..fleet_overhead.clone()
        };

        let fleet_adders = WageAdders {
            benefits_pct: 0.12,
            performance_pct: 0.05,
            safety_pct: 0.03,
            step_pct: 0.02,
        };

        let owner_operator = |wage_cpm: f64| DriverRates {
            wage_cpm,
            wage_adders: WageAdders::default(),
            fuel_cpm: 0.50,
            truck_maintenance_cpm: 0.12,
            trailer_maintenance_cpm: 0.04,
            rolling_cpm: 0.0,
            weekly_overhead: owner_operator_overhead.clone(),
        };

        Self {
            company: DriverRates {
                wage_cpm: 0.45,
                wage_adders: fleet_adders.clone(),
                fuel_cpm: 0.45,
                truck_maintenance_cpm: 0.12,
                trailer_maintenance_cpm: 0.04,
                rolling_cpm: 0.0,
                weekly_overhead: fleet_overhead.clone(),
            },
            rental: DriverRates {
                wage_cpm: 0.38,
                wage_adders: fleet_adders,
                fuel_cpm: 0.42,
                truck_maintenance_cpm: 0.12,
                trailer_maintenance_cpm: 0.04,
                rolling_cpm: 0.0,
                weekly_overhead: fleet_overhead,
            },
            owner_operator: OwnerOperatorRates {
                zone1: owner_operator(0.72),
                zone2: owner_operator(0.68),
                zone3: owner_operator(0.65),
            },
            weekly_mileage_baseline: 2500.0,
            zone_map: ZoneMap::default(),
            default_zone: default_zone(),
            default_target_margin_pct: default_target_margin_pct(),
        }
    }
}
