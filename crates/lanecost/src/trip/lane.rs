use serde::Serialize;
use tracing::debug;

use crate::{
    error::CostingError,
    trip::{miles::Miles, place::Place, region::Region},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lane {
    origin: Place,
    destination: Place,
    miles: Miles,
    cross_border: bool,
    miles_estimated: bool,
}

impl Lane {
    pub fn origin(&self) -> &Place {
        &self.origin
    }

    pub fn destination(&self) -> &Place {
        &self.destination
    }

    pub fn miles(&self) -> Miles {
        self.miles
    }

    pub fn is_cross_border(&self) -> bool {
        self.cross_border
    }

    pub fn is_miles_estimated(&self) -> bool {
        self.miles_estimated
    }

    pub fn origin_region(&self) -> Region {
        self.origin.region()
    }

    pub fn destination_region(&self) -> Region {
        self.destination.region()
    }

    pub fn with_miles(&self, miles: Miles) -> Lane {
        Lane {
            miles,
            miles_estimated: false,
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.origin, self.destination, self.miles)
    }
}

#[derive(Default)]
pub struct LaneBuilder {
    origin: Option<Place>,
    destination: Option<Place>,
    miles: Option<f64>,
    cross_border: Option<bool>,
}

impl LaneBuilder {
    pub fn set_origin(&mut self, origin: Place) -> &mut LaneBuilder {
        self.origin = Some(origin);
        self
    }

    pub fn set_destination(&mut self, destination: Place) -> &mut LaneBuilder {
        self.destination = Some(destination);
        self
    }

    pub fn set_miles(&mut self, miles: f64) -> &mut LaneBuilder {
        self.miles = Some(miles);
        self
    }

    pub fn set_cross_border(&mut self, cross_border: bool) -> &mut LaneBuilder {
        self.cross_border = Some(cross_border);
        self
    }

    /// Miles come from the routing provider when given, otherwise they are
    /// estimated from coordinates. The cross-border flag defaults to the
    /// regions of both ends.
    pub fn build(self) -> Result<Lane, CostingError> {
        let origin = self.origin.unwrap_or_else(|| Place::named(""));
        let destination = self.destination.unwrap_or_else(|| Place::named(""));

        let (miles, miles_estimated) = match self.miles {
            Some(miles) => (Miles::new(miles)?, false),
            None => match origin.estimate_road_miles(&destination) {
                Some(estimate) => (estimate?, true),
                None => {
                    return Err(CostingError::invalid_input(
                        "miles",
                        "no distance given and the lane has no coordinates to estimate one",
                    ));
                }
            },
        };

        let cross_border = self.cross_border.unwrap_or_else(|| {
            let (from, to) = (origin.region(), destination.region());
            if !from.is_known() || !to.is_known() {
                debug!(%origin, %destination, "Region unknown, lane treated as domestic");
            }
            from.crosses_border_to(to)
        });

        Ok(Lane {
            origin,
            destination,
            miles,
            cross_border,
            miles_estimated,
        })
    }
}
