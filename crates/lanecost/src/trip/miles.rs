use std::{
    iter::Sum,
    ops::{Add, AddAssign, Mul},
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CostingError;

pub const METERS_PER_MILE: f64 = 1_609.344;

/// A trip distance in statute miles. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "f64", into = "f64")]
pub struct Miles(f64);

impl Miles {
    pub const ZERO: Miles = Miles(0.0);

    pub fn new(value: f64) -> Result<Self, CostingError> {
        CostingError::check_non_negative("miles", value).map(Miles)
    }

    pub fn from_meters(meters: f64) -> Result<Self, CostingError> {
        Miles::new(meters / METERS_PER_MILE)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Divides an amount by the distance, 0 for a zero-mile trip.
    pub fn per_mile(&self, amount: f64) -> f64 {
        if self.is_zero() { 0.0 } else { amount / self.0 }
    }
}

impl Eq for Miles {}

impl PartialOrd for Miles {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Miles {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Miles {
    type Error = CostingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Miles::new(value)
    }
}

impl From<Miles> for f64 {
    fn from(value: Miles) -> Self {
        value.0
    }
}

impl Add for Miles {
    type Output = Miles;

    fn add(self, other: Miles) -> Miles {
        Miles(self.0 + other.0)
    }
}

impl AddAssign for Miles {
    fn add_assign(&mut self, other: Miles) {
        self.0 += other.0;
    }
}

/// Cost per mile times miles gives dollars.
impl Mul<f64> for Miles {
    type Output = f64;

    fn mul(self, cpm: f64) -> f64 {
        self.0 * cpm
    }
}

impl Sum for Miles {
    fn sum<I: Iterator<Item = Miles>>(iter: I) -> Miles {
        iter.fold(Miles::ZERO, |acc, x| acc + x)
    }
}

impl std::fmt::Display for Miles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} mi", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miles_rejects_invalid_values() {
        assert!(Miles::new(-0.5).is_err());
        assert!(Miles::new(f64::NAN).is_err());
        assert!(Miles::new(f64::INFINITY).is_err());
        assert_eq!(Miles::new(0.0).unwrap(), Miles::ZERO);
    }

    #[test]
    fn test_miles_per_mile() {
        let miles = Miles::new(500.0).unwrap();
        assert_eq!(miles.per_mile(925.0), 1.85);
        assert_eq!(Miles::ZERO.per_mile(925.0), 0.0);
    }

    #[test]
    fn test_miles_deserialize_validates() {
        let miles: Miles = serde_json::from_str("250.5").unwrap();
        assert_eq!(miles.value(), 250.5);

        assert!(serde_json::from_str::<Miles>("-3").is_err());
    }

    #[test]
    fn test_miles_from_meters() {
        let miles = Miles::from_meters(METERS_PER_MILE * 10.0).unwrap();
        assert!((miles.value() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_miles_sum() {
        let total: Miles = [100.0, 250.0, 50.0]
            .into_iter()
            .map(|m| Miles::new(m).unwrap())
            .sum();
        assert_eq!(total.value(), 400.0);
    }
}
