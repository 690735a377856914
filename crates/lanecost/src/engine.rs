use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    costing::{
        aggregate::{CostAggregate, aggregate},
        margin::{MarginAnalysis, PricingSuggestion},
    },
    error::CostingError,
    guardrails::{
        business_rule::BusinessRule,
        evaluator::{GuardrailResult, evaluate, target_margin_pct},
    },
    rates::{
        driver_type::{DriverProfile, DriverType},
        rate_resolver::{RateResolution, RateResolver},
        rate_table::RateTable,
    },
    trip::{
        accessorial::{Accessorial, AccessorialCode, AccessorialSet},
        booking::Booking,
        lane::Lane,
    },
};

/// Everything computed for one booking and driver profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripQuote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    pub driver_type: DriverType,
    pub lane: Lane,
    pub resolution: RateResolution,
    pub cost: CostAggregate,
    pub margin: MarginAnalysis,
    pub pricing: PricingSuggestion,
    pub guardrails: GuardrailResult,
}

impl TripQuote {
    pub fn profile(&self) -> DriverProfile {
        self.resolution.profile
    }

    pub fn total_cost(&self) -> f64 {
        self.cost.total_cost
    }
}

/// Composes rate resolution, cost aggregation and guardrail evaluation over a
/// validated rate table. Holds no state besides the table, every call is a
/// pure function of its inputs.
#[derive(Debug, Clone)]
pub struct TripCostEngine {
    rates: RateTable,
}

impl TripCostEngine {
    pub fn new(rates: RateTable) -> Result<Self, CostingError> {
        rates.validate()?;
        Ok(Self { rates })
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn resolve_rate(&self, driver_type: DriverType, lane: &Lane) -> RateResolution {
        RateResolver::new(&self.rates).resolve(driver_type, lane)
    }

    pub fn aggregate(
        &self,
        resolution: &RateResolution,
        miles: f64,
        accessorials: &AccessorialSet,
    ) -> Result<CostAggregate, CostingError> {
        aggregate(resolution, miles, accessorials)
    }

    pub fn evaluate(
        &self,
        margin_pct: f64,
        total_cpm: f64,
        rules: &[BusinessRule],
    ) -> GuardrailResult {
        evaluate(margin_pct, total_cpm, rules)
    }

    /// Accessorials billed on the trip, including a border crossing for
    /// cross-border lanes that do not list one.
    pub fn billable_accessorials(&self, booking: &Booking) -> Result<AccessorialSet, CostingError> {
        let mut accessorials = booking.accessorials().clone();

        if booking.lane().is_cross_border()
            && !accessorials.contains(AccessorialCode::BorderCrossing)
        {
            debug!(lane = %booking.lane(), "Adding border crossing to cross-border lane");
            accessorials.insert(Accessorial::auto_detected(AccessorialCode::BorderCrossing))?;
        }

        Ok(accessorials)
    }

    #[instrument(skip_all, level = "debug", fields(driver_type = %booking.driver_type()))]
    pub fn quote(
        &self,
        booking: &Booking,
        rules: &[BusinessRule],
    ) -> Result<TripQuote, CostingError> {
        let lane = booking.lane();
        let resolution = self.resolve_rate(booking.driver_type(), lane);
        let accessorials = self.billable_accessorials(booking)?;
        let cost = self.aggregate(&resolution, lane.miles().value(), &accessorials)?;

        let margin = cost.margin_analysis(booking.revenue())?;
        let guardrails = self.evaluate(margin.margin_pct, cost.total_cpm, rules);
        let pricing = cost.pricing_suggestion(
            target_margin_pct(rules).unwrap_or(self.rates.default_target_margin_pct),
        );

        debug!(
            profile = %resolution.profile,
            total_cost = cost.total_cost,
            margin_pct = margin.margin_pct,
            recommendation = %guardrails.recommendation,
            "Quoted trip"
        );

        Ok(TripQuote {
            booking_id: booking.id().map(str::to_owned),
            driver_type: booking.driver_type(),
            lane: lane.clone(),
            resolution,
            cost,
            margin,
            pricing,
            guardrails,
        })
    }

    /// Quotes the booking for every driver profile, cheapest first.
    pub fn compare(
        &self,
        booking: &Booking,
        rules: &[BusinessRule],
    ) -> Result<Vec<TripQuote>, CostingError> {
        let mut quotes = DriverProfile::ALL
            .iter()
            .map(|profile| self.quote(&booking.with_driver_type(profile.driver_type()), rules))
            .collect::<Result<Vec<_>, _>>()?;

        quotes.sort_by(|a, b| a.total_cost().total_cmp(&b.total_cost()));

        Ok(quotes)
    }
}
