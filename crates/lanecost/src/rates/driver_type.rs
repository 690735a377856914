use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::error::CostingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OoZone {
    Zone1,
    Zone2,
    Zone3,
}

impl std::fmt::Display for OoZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OoZone::Zone1 => write!(f, "ZONE1"),
            OoZone::Zone2 => write!(f, "ZONE2"),
            OoZone::Zone3 => write!(f, "ZONE3"),
        }
    }
}

/// Contracting relationship with the operator, as supplied by a booking.
///
/// Owner-operators may come with or without a zone, the resolver picks one
/// from the lane when it is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum DriverType {
    Company,
    Rental,
    OwnerOperator(Option<OoZone>),
}

impl std::fmt::Display for DriverType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverType::Company => write!(f, "COM"),
            DriverType::Rental => write!(f, "RNR"),
            DriverType::OwnerOperator(None) => write!(f, "OO"),
            DriverType::OwnerOperator(Some(zone)) => write!(f, "OO_{zone}"),
        }
    }
}

impl FromStr for DriverType {
    type Err = CostingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_uppercase()
            .replace([' ', '-'], "_")
            .replace("OWNER_OPERATOR", "OO");

        let driver_type = match normalized.as_str() {
            "COM" | "COMPANY" => DriverType::Company,
            "RNR" | "RENTAL" => DriverType::Rental,
            "OO" => DriverType::OwnerOperator(None),
            "OO_ZONE1" | "OO_ZONE_1" | "OO_Z1" => DriverType::OwnerOperator(Some(OoZone::Zone1)),
            "OO_ZONE2" | "OO_ZONE_2" | "OO_Z2" => DriverType::OwnerOperator(Some(OoZone::Zone2)),
            "OO_ZONE3" | "OO_ZONE_3" | "OO_Z3" => DriverType::OwnerOperator(Some(OoZone::Zone3)),
            _ => return Err(CostingError::InvalidDriverType(s.to_owned())),
        };

        Ok(driver_type)
    }
}

/// The closed set of cost profiles a trip is priced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DriverProfile {
    Company,
    Rental,
    OwnerOperatorZone1,
    OwnerOperatorZone2,
    OwnerOperatorZone3,
}

impl DriverProfile {
    pub const ALL: [DriverProfile; 5] = [
        DriverProfile::OwnerOperatorZone1,
        DriverProfile::OwnerOperatorZone2,
        DriverProfile::OwnerOperatorZone3,
        DriverProfile::Company,
        DriverProfile::Rental,
    ];

    pub fn owner_operator(zone: OoZone) -> Self {
        match zone {
            OoZone::Zone1 => DriverProfile::OwnerOperatorZone1,
            OoZone::Zone2 => DriverProfile::OwnerOperatorZone2,
            OoZone::Zone3 => DriverProfile::OwnerOperatorZone3,
        }
    }

    pub fn zone(&self) -> Option<OoZone> {
        match self {
            DriverProfile::OwnerOperatorZone1 => Some(OoZone::Zone1),
            DriverProfile::OwnerOperatorZone2 => Some(OoZone::Zone2),
            DriverProfile::OwnerOperatorZone3 => Some(OoZone::Zone3),
            DriverProfile::Company | DriverProfile::Rental => None,
        }
    }

    pub fn driver_type(&self) -> DriverType {
        match self {
            DriverProfile::Company => DriverType::Company,
            DriverProfile::Rental => DriverType::Rental,
            _ => DriverType::OwnerOperator(self.zone()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DriverProfile::Company => "Company Driver",
            DriverProfile::Rental => "Rental Driver",
            DriverProfile::OwnerOperatorZone1 => "Owner Operator - Zone 1",
            DriverProfile::OwnerOperatorZone2 => "Owner Operator - Zone 2",
            DriverProfile::OwnerOperatorZone3 => "Owner Operator - Zone 3",
        }
    }
}

impl std::fmt::Display for DriverProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.driver_type())
    }
}
