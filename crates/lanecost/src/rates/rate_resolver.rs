use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    error::CostingError,
    rates::{
        cpm_breakdown::CpmBreakdown,
        driver_type::{DriverProfile, DriverType},
        rate_table::RateTable,
        zone::ZoneClassification,
    },
    trip::lane::Lane,
};

/// Cost per mile of a driver profile, before miles and accessorials are applied.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RateResolution {
    pub profile: DriverProfile,
    pub cpm: CpmBreakdown,
    pub total_cpm: f64,
    pub weekly_overhead_total: f64,
    /// Set for owner-operators whose zone was derived from the lane.
    pub zone: Option<ZoneClassification>,
}

impl RateResolution {
    pub fn is_zone_defaulted(&self) -> bool {
        self.zone.is_some_and(|zone| zone.defaulted)
    }
}

pub struct RateResolver<'a> {
    rates: &'a RateTable,
}

impl<'a> RateResolver<'a> {
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    pub fn resolve(&self, driver_type: DriverType, lane: &Lane) -> RateResolution {
        let (profile, zone) = match driver_type {
            DriverType::Company => (DriverProfile::Company, None),
            DriverType::Rental => (DriverProfile::Rental, None),
            DriverType::OwnerOperator(Some(zone)) => (DriverProfile::owner_operator(zone), None),
            DriverType::OwnerOperator(None) => {
                let classification = self
                    .rates
                    .zone_map
                    .classify(lane, self.rates.default_zone);

                if classification.defaulted {
                    warn!(
                        lane = %lane,
                        origin_region = ?lane.origin_region(),
                        destination_region = ?lane.destination_region(),
                        zone = %classification.zone,
                        "Owner-operator zone could not be determined, using default zone"
                    );
                }

                (
                    DriverProfile::owner_operator(classification.zone),
                    Some(classification),
                )
            }
        };

        let mut resolution = self.resolve_profile(profile);
        resolution.zone = zone;
        resolution
    }

    /// Resolves a driver type as received from a booking payload.
    pub fn resolve_str(&self, driver_type: &str, lane: &Lane) -> Result<RateResolution, CostingError> {
        let driver_type = driver_type.parse::<DriverType>()?;
        Ok(self.resolve(driver_type, lane))
    }

    pub fn resolve_profile(&self, profile: DriverProfile) -> RateResolution {
        let rates = self.rates.rates_for(profile);

        let cpm = CpmBreakdown {
            wage: rates.effective_wage_cpm(),
            fuel: rates.fuel_cpm,
            truck_maintenance: rates.truck_maintenance_cpm,
            trailer_maintenance: rates.trailer_maintenance_cpm,
            rolling: rates.rolling_cpm,
            fixed: rates
                .weekly_overhead
                .per_mile(self.rates.weekly_mileage_baseline),
        };

        debug!(%profile, total_cpm = cpm.total(), "Resolved rate");

        RateResolution {
            profile,
            cpm,
            total_cpm: cpm.total(),
            weekly_overhead_total: rates.weekly_overhead.total(),
            zone: None,
        }
    }
}
