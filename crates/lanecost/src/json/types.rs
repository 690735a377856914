use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, serde_as};
use tracing::{debug, instrument};

use crate::{
    error::CostingError,
    guardrails::business_rule::{BusinessRule, RuleKey, RuleScope, Severity},
    rates::driver_type::DriverType,
    trip::{
        accessorial::{Accessorial, AccessorialCode, AccessorialSet},
        booking::Booking,
        lane::LaneBuilder,
        place::Place,
    },
};

/// Booking payload as sent by the order and quote screens. Field names differ
/// between producers, the aliases accept all of them.
#[serde_as]
#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Booking")]
pub struct JsonBooking {
    #[serde(default, alias = "order_id", alias = "orderId")]
    pub id: Option<String>,

    #[serde(alias = "driverType")]
    pub driver_type: String,

    #[serde(default, alias = "pickup_location", alias = "pickupLocation")]
    pub origin: Option<JsonPlace>,

    #[serde(default, alias = "delivery_location", alias = "deliveryLocation")]
    pub destination: Option<JsonPlace>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(
        alias = "distance",
        alias = "distance_miles",
        alias = "total_miles",
        alias = "totalMiles"
    )]
    pub miles: Option<f64>,

    #[serde(default, alias = "crossBorder")]
    pub cross_border: Option<bool>,

    #[serde(default)]
    pub accessorials: Vec<JsonAccessorial>,

    /// Stop events charged per event at catalog price.
    #[serde(default)]
    pub pickups: u32,

    #[serde(default)]
    pub deliveries: u32,

    #[serde(default, alias = "dropHooks")]
    pub drop_hooks: u32,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(
        alias = "quoted_rate",
        alias = "quotedRate",
        alias = "rate",
        alias = "total_revenue"
    )]
    pub revenue: Option<f64>,
}

/// A location given either as a bare name or with `[lon, lat]` coordinates.
#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(untagged, rename = "Place")]
pub enum JsonPlace {
    Name(String),
    Detailed {
        name: String,
        coordinates: Option<[f64; 2]>,
    },
}

impl From<&JsonPlace> for Place {
    fn from(value: &JsonPlace) -> Self {
        match value {
            JsonPlace::Name(name) => Place::named(name.as_str()),
            JsonPlace::Detailed {
                name,
                coordinates: Some([lon, lat]),
            } => Place::from_lat_lon(name.as_str(), *lat, *lon),
            JsonPlace::Detailed { name, .. } => Place::named(name.as_str()),
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Accessorial")]
pub struct JsonAccessorial {
    #[serde(alias = "accessorialCode", alias = "accessorial_code")]
    pub code: String,

    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Catalog price when omitted.
    #[serde(default, alias = "unitPrice", alias = "rate")]
    pub unit_price: Option<f64>,
}

fn default_quantity() -> u32 {
    1
}

impl JsonAccessorial {
    pub fn into_accessorial(self) -> Result<Accessorial, CostingError> {
        let code = self.code.parse::<AccessorialCode>()?;
        match self.unit_price {
            Some(unit_price) => Accessorial::new(code, self.quantity, unit_price),
            None => Ok(Accessorial::at_catalog_price(code, self.quantity)),
        }
    }
}

impl JsonBooking {
    #[instrument(skip_all, level = "debug")]
    pub fn into_booking(self) -> Result<Booking, CostingError> {
        let driver_type = self.driver_type.parse::<DriverType>()?;

        let mut lane_builder = LaneBuilder::default();
        if let Some(origin) = &self.origin {
            lane_builder.set_origin(origin.into());
        }
        if let Some(destination) = &self.destination {
            lane_builder.set_destination(destination.into());
        }
        if let Some(miles) = self.miles {
            lane_builder.set_miles(miles);
        }
        if let Some(cross_border) = self.cross_border {
            lane_builder.set_cross_border(cross_border);
        }
        let lane = lane_builder.build()?;

        let events = [
            (AccessorialCode::PickupStop, self.pickups),
            (AccessorialCode::DeliveryStop, self.deliveries),
            (AccessorialCode::DropHook, self.drop_hooks),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(code, count)| Ok(Accessorial::at_catalog_price(code, count)));

        let accessorials = AccessorialSet::from_vec(
            self.accessorials
                .into_iter()
                .map(JsonAccessorial::into_accessorial)
                .chain(events)
                .collect::<Result<Vec<_>, _>>()?,
        )?;

        let mut booking = Booking::new(driver_type, lane).with_accessorials(accessorials);
        if let Some(id) = self.id {
            booking = booking.with_id(id);
        }
        if let Some(revenue) = self.revenue {
            booking = booking.with_revenue(revenue)?;
        }

        Ok(booking)
    }
}

/// Row of the business rules catalog. Values are stored as text upstream, so
/// both `8` and `"8.00"` are accepted.
#[serde_as]
#[derive(Deserialize)]
pub struct JsonBusinessRule {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(alias = "ruleKey", alias = "key")]
    pub rule_key: String,

    #[serde(default)]
    pub scope: Option<String>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default, alias = "ruleValue", alias = "threshold")]
    pub rule_value: Option<f64>,

    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub severity: Option<String>,

    #[serde(default = "default_is_active", alias = "isActive")]
    pub is_active: bool,

    #[serde(default)]
    pub description: Option<String>,
}

fn default_is_active() -> bool {
    true
}

impl JsonBusinessRule {
    /// `None` for rules the guardrails cannot apply.
    pub fn into_rule(self) -> Option<BusinessRule> {
        let Ok(key) = self.rule_key.parse::<RuleKey>() else {
            debug!(rule = %self.rule_key, "Ignoring unrecognized rule");
            return None;
        };

        let Some(threshold) = self.rule_value.filter(|value| value.is_finite()) else {
            debug!(rule = %self.rule_key, "Ignoring rule without a numeric value");
            return None;
        };

        let severity = match self.severity.as_deref() {
            None => Severity::Warning,
            Some(severity) => match severity.parse::<Severity>() {
                Ok(severity) => severity,
                Err(()) => {
                    debug!(rule = %self.rule_key, severity, "Ignoring rule with unknown severity");
                    return None;
                }
            },
        };

        let scope = match self.scope.as_deref() {
            None => RuleScope::Trip,
            Some(scope) => match scope.parse::<RuleScope>() {
                Ok(scope) => scope,
                Err(()) => {
                    debug!(rule = %self.rule_key, scope, "Ignoring out of scope rule");
                    return None;
                }
            },
        };

        Some(BusinessRule {
            key,
            threshold,
            severity,
            scope,
            is_active: self.is_active,
            description: self.description,
        })
    }
}

pub fn normalize_rules(rules: impl IntoIterator<Item = JsonBusinessRule>) -> Vec<BusinessRule> {
    rules
        .into_iter()
        .filter_map(JsonBusinessRule::into_rule)
        .collect()
}
