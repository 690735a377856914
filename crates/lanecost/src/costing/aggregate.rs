use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    costing::margin::{MarginAnalysis, PricingSuggestion, margin_pct},
    error::CostingError,
    rates::{cpm_breakdown::CpmBreakdown, rate_resolver::RateResolution},
    trip::{accessorial::AccessorialSet, miles::Miles},
};

/// Total cost of a trip for one resolved rate.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CostAggregate {
    pub miles: Miles,
    pub total_cpm: f64,
    /// Dollar amount of each CPM component over the trip miles.
    pub linehaul_breakdown: CpmBreakdown,
    pub linehaul_cost: f64,
    pub accessorials: AccessorialSet,
    pub accessorial_cost: f64,
    pub total_cost: f64,
    /// Total cost including accessorials divided by miles, 0 without miles.
    pub effective_cpm: f64,
}

/// `total_cost = total_cpm * miles + sum(quantity * unit_price)`.
pub fn aggregate(
    resolution: &RateResolution,
    miles: f64,
    accessorials: &AccessorialSet,
) -> Result<CostAggregate, CostingError> {
    let miles = Miles::new(miles)?;

    let linehaul_cost = miles * resolution.total_cpm;
    let accessorial_cost = accessorials.total();
    let total_cost = linehaul_cost + accessorial_cost;

    if !total_cost.is_finite() {
        return Err(CostingError::invalid_input(
            "total_cost",
            "trip cost overflows, miles or accessorial amounts are out of range",
        ));
    }

    Ok(CostAggregate {
        miles,
        total_cpm: resolution.total_cpm,
        linehaul_breakdown: resolution.cpm.over(miles),
        linehaul_cost,
        accessorials: accessorials.clone(),
        accessorial_cost,
        total_cost,
        effective_cpm: miles.per_mile(total_cost),
    })
}

impl CostAggregate {
    /// Margin in percent of revenue, 0 when there is no revenue yet.
    pub fn margin_pct(&self, revenue: f64) -> Result<f64, CostingError> {
        let revenue = CostingError::check_non_negative("revenue", revenue)?;
        Ok(margin_pct(revenue, self.total_cost))
    }

    pub fn margin_analysis(&self, revenue: f64) -> Result<MarginAnalysis, CostingError> {
        let revenue = CostingError::check_non_negative("revenue", revenue)?;
        Ok(MarginAnalysis::new(revenue, self.total_cost, self.miles))
    }

    pub fn pricing_suggestion(&self, target_margin_pct: f64) -> PricingSuggestion {
        PricingSuggestion::new(self.total_cost, self.miles, target_margin_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        rates::{
            driver_type::{DriverProfile, DriverType},
            rate_resolver::RateResolver,
            rate_table::RateTable,
        },
        test_utils::{assert_approx, create_test_lane, create_test_rate_table},
        trip::accessorial::{Accessorial, AccessorialCode},
    };

    fn company_resolution() -> RateResolution {
        let rates = create_test_rate_table();
        RateResolver::new(&rates).resolve(DriverType::Company, &create_test_lane(500.0))
    }

    #[test]
    fn test_aggregate_company_500_miles() {
        let aggregate = aggregate(&company_resolution(), 500.0, &AccessorialSet::new()).unwrap();

        assert_approx(aggregate.total_cost, 925.0);
        assert_approx(aggregate.total_cpm, 1.85);
        assert_approx(aggregate.linehaul_breakdown.total(), 925.0);
        assert_approx(aggregate.margin_pct(1250.0).unwrap(), 26.0);
        assert_approx(aggregate.margin_pct(1000.0).unwrap(), 7.5);
    }

    #[test]
    fn test_zero_miles_no_accessorials_costs_nothing() {
        let rates = RateTable::default();
        let resolver = RateResolver::new(&rates);

        for profile in DriverProfile::ALL {
            let resolution = resolver.resolve_profile(profile);
            let aggregate = aggregate(&resolution, 0.0, &AccessorialSet::new()).unwrap();

            assert_eq!(aggregate.total_cost, 0.0);
            assert_eq!(aggregate.effective_cpm, 0.0);
        }
    }

    #[test]
    fn test_liftgate_adds_exactly_its_price() {
        let resolution = company_resolution();
        let without = aggregate(&resolution, 500.0, &AccessorialSet::new()).unwrap();

        let accessorials = AccessorialSet::from_vec(vec![
            Accessorial::new(AccessorialCode::LiftgateDelivery, 1, 75.0).unwrap(),
        ])
        .unwrap();
        let with = aggregate(&resolution, 500.0, &accessorials).unwrap();

        assert_approx(with.total_cost - without.total_cost, 75.0);
        assert_eq!(with.accessorial_cost, 75.0);
        assert_eq!(with.linehaul_cost, without.linehaul_cost);
    }

    #[test]
    fn test_margin_without_revenue_is_zero() {
        let aggregate = aggregate(&company_resolution(), 500.0, &AccessorialSet::new()).unwrap();

        let margin = aggregate.margin_pct(0.0).unwrap();
        assert_eq!(margin, 0.0);
        assert!(margin.is_finite());
    }

    #[test]
    fn test_margin_decreases_with_cost() {
        let resolution = company_resolution();
        let mut previous = f64::INFINITY;

        for detention_hours in 0..10 {
            let accessorials = AccessorialSet::from_vec(vec![
                Accessorial::new(AccessorialCode::DetentionDelivery, detention_hours, 75.0).unwrap(),
            ])
            .unwrap();
            let margin = aggregate(&resolution, 500.0, &accessorials)
                .unwrap()
                .margin_pct(1250.0)
                .unwrap();

            assert!(margin < previous);
            previous = margin;
        }
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let resolution = company_resolution();

        assert!(matches!(
            aggregate(&resolution, -1.0, &AccessorialSet::new()),
            Err(CostingError::InvalidInput { field: "miles", .. })
        ));
        assert!(aggregate(&resolution, f64::NAN, &AccessorialSet::new()).is_err());

        let aggregate = aggregate(&resolution, 10.0, &AccessorialSet::new()).unwrap();
        assert!(matches!(
            aggregate.margin_pct(-5.0),
            Err(CostingError::InvalidInput { field: "revenue", .. })
        ));
        assert!(aggregate.margin_pct(f64::INFINITY).is_err());
    }

    #[test]
    fn test_overflowing_total_cost_is_rejected() {
        let resolution = company_resolution();

        assert!(matches!(
            aggregate(&resolution, 1e308, &AccessorialSet::new()),
            Err(CostingError::InvalidInput {
                field: "total_cost",
                ..
            })
        ));

        let accessorials = AccessorialSet::from_vec(vec![
            Accessorial::new(AccessorialCode::Layover, u32::MAX, f64::MAX).unwrap(),
        ])
        .unwrap();
        assert!(aggregate(&resolution, 10.0, &accessorials).is_err());
    }
}
