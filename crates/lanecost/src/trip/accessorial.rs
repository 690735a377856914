use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CostingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AccessorialCategory {
    Equipment,
    Service,
    Time,
    Handling,
    Temperature,
    Documentation,
    Routing,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessorialCode {
    #[serde(rename = "LIFTGATE_PU")]
    LiftgatePickup,
    #[serde(rename = "LIFTGATE_DEL")]
    LiftgateDelivery,
    #[serde(rename = "INSIDE_PU")]
    InsidePickup,
    #[serde(rename = "INSIDE_DEL")]
    InsideDelivery,
    Residential,
    LimitedAccess,
    Appointment,
    #[serde(rename = "DETENTION_PU")]
    DetentionPickup,
    #[serde(rename = "DETENTION_DEL")]
    DetentionDelivery,
    Layover,
    Tarp,
    Team,
    Hazmat,
    ReeferProtection,
    TempControlled,
    SortSegregate,
    ScaleTicket,
    ExtraStop,
    BorderCrossing,
    BlindShipment,
    DropHook,
    #[serde(rename = "PICKUP")]
    PickupStop,
    #[serde(rename = "DELIVERY")]
    DeliveryStop,
}

impl AccessorialCode {
    pub const ALL: [AccessorialCode; 23] = [
        AccessorialCode::LiftgatePickup,
        AccessorialCode::LiftgateDelivery,
        AccessorialCode::InsidePickup,
        AccessorialCode::InsideDelivery,
        AccessorialCode::Residential,
        AccessorialCode::LimitedAccess,
        AccessorialCode::Appointment,
        AccessorialCode::DetentionPickup,
        AccessorialCode::DetentionDelivery,
        AccessorialCode::Layover,
        AccessorialCode::Tarp,
        AccessorialCode::Team,
        AccessorialCode::Hazmat,
        AccessorialCode::ReeferProtection,
        AccessorialCode::TempControlled,
        AccessorialCode::SortSegregate,
        AccessorialCode::ScaleTicket,
        AccessorialCode::ExtraStop,
        AccessorialCode::BorderCrossing,
        AccessorialCode::BlindShipment,
        AccessorialCode::DropHook,
        AccessorialCode::PickupStop,
        AccessorialCode::DeliveryStop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessorialCode::LiftgatePickup => "LIFTGATE_PU",
            AccessorialCode::LiftgateDelivery => "LIFTGATE_DEL",
            AccessorialCode::InsidePickup => "INSIDE_PU",
            AccessorialCode::InsideDelivery => "INSIDE_DEL",
            AccessorialCode::Residential => "RESIDENTIAL",
            AccessorialCode::LimitedAccess => "LIMITED_ACCESS",
            AccessorialCode::Appointment => "APPOINTMENT",
            AccessorialCode::DetentionPickup => "DETENTION_PU",
            AccessorialCode::DetentionDelivery => "DETENTION_DEL",
            AccessorialCode::Layover => "LAYOVER",
            AccessorialCode::Tarp => "TARP",
            AccessorialCode::Team => "TEAM",
            AccessorialCode::Hazmat => "HAZMAT",
            AccessorialCode::ReeferProtection => "REEFER_PROTECTION",
            AccessorialCode::TempControlled => "TEMP_CONTROLLED",
            AccessorialCode::SortSegregate => "SORT_SEGREGATE",
            AccessorialCode::ScaleTicket => "SCALE_TICKET",
            AccessorialCode::ExtraStop => "EXTRA_STOP",
            AccessorialCode::BorderCrossing => "BORDER_CROSSING",
            AccessorialCode::BlindShipment => "BLIND_SHIPMENT",
            AccessorialCode::DropHook => "DROP_HOOK",
            AccessorialCode::PickupStop => "PICKUP",
            AccessorialCode::DeliveryStop => "DELIVERY",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AccessorialCode::LiftgatePickup => "Liftgate - Pickup",
            AccessorialCode::LiftgateDelivery => "Liftgate - Delivery",
            AccessorialCode::InsidePickup => "Inside Pickup",
            AccessorialCode::InsideDelivery => "Inside Delivery",
            AccessorialCode::Residential => "Residential",
            AccessorialCode::LimitedAccess => "Limited Access",
            AccessorialCode::Appointment => "Appointment",
            AccessorialCode::DetentionPickup => "Detention - Pickup",
            AccessorialCode::DetentionDelivery => "Detention - Delivery",
            AccessorialCode::Layover => "Layover",
            AccessorialCode::Tarp => "Tarping",
            AccessorialCode::Team => "Team Service",
            AccessorialCode::Hazmat => "Hazmat Handling",
            AccessorialCode::ReeferProtection => "Protect From Freeze",
            AccessorialCode::TempControlled => "Temperature Control",
            AccessorialCode::SortSegregate => "Sort & Segregate",
            AccessorialCode::ScaleTicket => "Scale Ticket",
            AccessorialCode::ExtraStop => "Extra Stop",
            AccessorialCode::BorderCrossing => "Border Crossing",
            AccessorialCode::BlindShipment => "Blind Shipment",
            AccessorialCode::DropHook => "Drop & Hook",
            AccessorialCode::PickupStop => "Pickup",
            AccessorialCode::DeliveryStop => "Delivery",
        }
    }

    pub fn category(&self) -> AccessorialCategory {
        match self {
            AccessorialCode::LiftgatePickup
            | AccessorialCode::LiftgateDelivery
            | AccessorialCode::Tarp => AccessorialCategory::Equipment,
            AccessorialCode::InsidePickup
            | AccessorialCode::InsideDelivery
            | AccessorialCode::Residential
            | AccessorialCode::LimitedAccess
            | AccessorialCode::Appointment
            | AccessorialCode::Team => AccessorialCategory::Service,
            AccessorialCode::DetentionPickup
            | AccessorialCode::DetentionDelivery
            | AccessorialCode::Layover => AccessorialCategory::Time,
            AccessorialCode::Hazmat | AccessorialCode::SortSegregate => {
                AccessorialCategory::Handling
            }
            AccessorialCode::ReeferProtection | AccessorialCode::TempControlled => {
                AccessorialCategory::Temperature
            }
            AccessorialCode::ScaleTicket | AccessorialCode::BlindShipment => {
                AccessorialCategory::Documentation
            }
            AccessorialCode::ExtraStop
            | AccessorialCode::BorderCrossing
            | AccessorialCode::DropHook
            | AccessorialCode::PickupStop
            | AccessorialCode::DeliveryStop => AccessorialCategory::Routing,
        }
    }

    /// Catalog price used when the booking does not quote one. Pickups,
    /// deliveries and drop-hooks are charged per event.
    pub fn default_unit_price(&self) -> f64 {
        match self {
            AccessorialCode::LiftgatePickup | AccessorialCode::LiftgateDelivery => 75.0,
            AccessorialCode::InsidePickup | AccessorialCode::InsideDelivery => 100.0,
            AccessorialCode::Residential => 85.0,
            AccessorialCode::LimitedAccess => 95.0,
            AccessorialCode::Appointment => 50.0,
            AccessorialCode::DetentionPickup | AccessorialCode::DetentionDelivery => 75.0,
            AccessorialCode::Layover => 350.0,
            AccessorialCode::Tarp => 125.0,
            AccessorialCode::Team => 0.0,
            AccessorialCode::Hazmat => 250.0,
            AccessorialCode::ReeferProtection => 150.0,
            AccessorialCode::TempControlled => 200.0,
            AccessorialCode::SortSegregate => 125.0,
            AccessorialCode::ScaleTicket => 25.0,
            AccessorialCode::ExtraStop => 150.0,
            AccessorialCode::BorderCrossing => 175.0,
            AccessorialCode::BlindShipment => 50.0,
            AccessorialCode::DropHook => 15.0,
            AccessorialCode::PickupStop | AccessorialCode::DeliveryStop => 30.0,
        }
    }
}

impl std::fmt::Display for AccessorialCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessorialCode {
    type Err = CostingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");
        AccessorialCode::ALL
            .into_iter()
            .find(|code| code.as_str() == normalized)
            .ok_or_else(|| CostingError::UnknownAccessorial(s.to_owned()))
    }
}

/// A quantity x unit price line item on a trip.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Accessorial {
    code: AccessorialCode,
    quantity: u32,
    unit_price: f64,
    auto_detected: bool,
}

impl Accessorial {
    pub fn new(code: AccessorialCode, quantity: u32, unit_price: f64) -> Result<Self, CostingError> {
        Ok(Self {
            code,
            quantity,
            unit_price: CostingError::check_non_negative("accessorial unit_price", unit_price)?,
            auto_detected: false,
        })
    }

    pub fn at_catalog_price(code: AccessorialCode, quantity: u32) -> Self {
        Self {
            code,
            quantity,
            unit_price: code.default_unit_price(),
            auto_detected: false,
        }
    }

    pub(crate) fn auto_detected(code: AccessorialCode) -> Self {
        Self {
            auto_detected: true,
            ..Accessorial::at_catalog_price(code, 1)
        }
    }

    pub fn code(&self) -> AccessorialCode {
        self.code
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn is_auto_detected(&self) -> bool {
        self.auto_detected
    }

    pub fn total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Accessorials of a single trip, at most one line per catalog code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct AccessorialSet(Vec<Accessorial>);

impl AccessorialSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(accessorials: Vec<Accessorial>) -> Result<Self, CostingError> {
        let mut set = AccessorialSet::new();
        for accessorial in accessorials {
            set.insert(accessorial)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, accessorial: Accessorial) -> Result<(), CostingError> {
        if self.contains(accessorial.code) {
            return Err(CostingError::DuplicateAccessorial(accessorial.code));
        }
        self.0.push(accessorial);
        Ok(())
    }

    pub fn contains(&self, code: AccessorialCode) -> bool {
        self.0.iter().any(|accessorial| accessorial.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Accessorial> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.0.iter().map(Accessorial::total).sum()
    }
}
