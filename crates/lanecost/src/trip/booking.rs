use serde::Serialize;

use crate::{
    error::CostingError,
    rates::driver_type::DriverType,
    trip::{accessorial::AccessorialSet, lane::Lane},
};

/// Normalized input of one booking attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    id: Option<String>,
    driver_type: DriverType,
    lane: Lane,
    accessorials: AccessorialSet,
    revenue: Option<f64>,
}

impl Booking {
    pub fn new(driver_type: DriverType, lane: Lane) -> Self {
        Self {
            id: None,
            driver_type,
            lane,
            accessorials: AccessorialSet::new(),
            revenue: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_accessorials(mut self, accessorials: AccessorialSet) -> Self {
        self.accessorials = accessorials;
        self
    }

    pub fn with_revenue(mut self, revenue: f64) -> Result<Self, CostingError> {
        self.revenue = Some(CostingError::check_non_negative("revenue", revenue)?);
        Ok(self)
    }

    pub fn with_driver_type(&self, driver_type: DriverType) -> Self {
        Self {
            driver_type,
            ..self.clone()
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn driver_type(&self) -> DriverType {
        self.driver_type
    }

    pub fn lane(&self) -> &Lane {
        &self.lane
    }

    pub fn accessorials(&self) -> &AccessorialSet {
        &self.accessorials
    }

    /// Revenue quoted so far, 0 when the quote has no revenue yet.
    pub fn revenue(&self) -> f64 {
        self.revenue.unwrap_or(0.0)
    }

    pub fn has_revenue(&self) -> bool {
        self.revenue.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rates::driver_type::OoZone, test_utils::create_test_lane};

    #[test]
    fn test_revenue_defaults_to_zero() {
        let booking = Booking::new(DriverType::Company, create_test_lane(100.0));

        assert_eq!(booking.revenue(), 0.0);
        assert!(!booking.has_revenue());
    }

    #[test]
    fn test_with_revenue_rejects_invalid_values() {
        let booking = Booking::new(DriverType::Company, create_test_lane(100.0));

        assert!(booking.clone().with_revenue(-1.0).is_err());
        assert!(booking.clone().with_revenue(f64::NAN).is_err());
        assert_eq!(booking.with_revenue(0.0).unwrap().revenue(), 0.0);
    }

    #[test]
    fn test_with_driver_type_keeps_the_rest() {
        let booking = Booking::new(DriverType::Rental, create_test_lane(100.0))
            .with_id("ORD-1")
            .with_revenue(300.0)
            .unwrap();

        let other = booking.with_driver_type(DriverType::OwnerOperator(Some(OoZone::Zone1)));

        assert_eq!(other.id(), Some("ORD-1"));
        assert_eq!(other.revenue(), 300.0);
        assert_eq!(other.lane(), booking.lane());
        assert_eq!(other.driver_type(), DriverType::OwnerOperator(Some(OoZone::Zone1)));
    }
}
