use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    rates::driver_type::OoZone,
    trip::{lane::Lane, region::Region},
};

/// Owner-operator sub-rate per kind of lane, keyed by the regions of both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ZoneMap {
    pub canada_domestic: OoZone,
    pub cross_border: OoZone,
    pub united_states_domestic: OoZone,
}

impl Default for ZoneMap {
    fn default() -> Self {
        Self {
            canada_domestic: OoZone::Zone1,
            cross_border: OoZone::Zone2,
            united_states_domestic: OoZone::Zone3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ZoneClassification {
    pub zone: OoZone,
    /// One end of the lane has an unknown region and the default zone was used.
    pub defaulted: bool,
}

impl ZoneMap {
    /// `None` when either region is unknown.
    pub fn zone_for_regions(&self, origin: Region, destination: Region) -> Option<OoZone> {
        match (origin, destination) {
            (Region::Canada, Region::Canada) => Some(self.canada_domestic),
            (Region::UnitedStates, Region::UnitedStates) => Some(self.united_states_domestic),
            (Region::Canada, Region::UnitedStates) | (Region::UnitedStates, Region::Canada) => {
                Some(self.cross_border)
            }
            (Region::Unknown, _) | (_, Region::Unknown) => None,
        }
    }

    pub fn classify(&self, lane: &Lane, default_zone: OoZone) -> ZoneClassification {
        match self.zone_for_regions(lane.origin_region(), lane.destination_region()) {
            Some(zone) => ZoneClassification {
                zone,
                defaulted: false,
            },
            None => ZoneClassification {
                zone: default_zone,
                defaulted: true,
            },
        }
    }
}
