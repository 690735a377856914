use geo::{Distance, Haversine};
use serde::Serialize;

use crate::{
    error::CostingError,
    trip::{miles::Miles, region::Region},
};

/// Road distance is longer than the great-circle distance, this factor is
/// applied when miles have to be estimated from coordinates.
pub const ROAD_DISTANCE_FACTOR: f64 = 1.3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    name: String,
    point: Option<geo::Point>,
}

impl Place {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            point: None,
        }
    }

    pub fn from_lat_lon(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            point: Some(geo::Point::new(lon, lat)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn point(&self) -> Option<geo::Point> {
        self.point
    }

    pub fn region(&self) -> Region {
        Region::classify(&self.name)
    }

    pub fn haversine_distance(&self, to: &Place) -> Option<f64> {
        let (from, to) = (self.point?, to.point?);
        Some(Haversine.distance(from, to))
    }

    /// Estimated road miles between two places, `None` when either side has no
    /// coordinates.
    pub fn estimate_road_miles(&self, to: &Place) -> Option<Result<Miles, CostingError>> {
        self.haversine_distance(to)
            .map(|meters| Miles::from_meters(meters * ROAD_DISTANCE_FACTOR))
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
