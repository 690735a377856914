use std::{fs::File, path::PathBuf};

use serde::de::DeserializeOwned;

use crate::{
    rates::{rate_table::RateTable, wage_adders::WageAdders, weekly_overhead::WeeklyOverhead},
    trip::{
        lane::{Lane, LaneBuilder},
        place::Place,
    },
};

pub fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Domestic lane with explicit miles and no coordinates.
pub fn create_test_lane(miles: f64) -> Lane {
    let mut builder = LaneBuilder::default();
    builder
        .set_origin(Place::named("Guelph, ON"))
        .set_destination(Place::named("Windsor, ON"))
        .set_miles(miles);
    builder.build().unwrap()
}

/// Default table where the company profile totals exactly $1.85/mi:
/// 0.60 + 0.50 + 0.15 + 0.05 + 0.15 variable, no wage adders, and $1000/week
/// over 2500 mi.
pub fn create_test_rate_table() -> RateTable {
    let mut rates = RateTable::default();

    rates.company.wage_cpm = 0.60;
    rates.company.wage_adders = WageAdders::default();
    rates.company.fuel_cpm = 0.50;
    rates.company.truck_maintenance_cpm = 0.15;
    rates.company.trailer_maintenance_cpm = 0.05;
    rates.company.rolling_cpm = 0.15;
    rates.company.weekly_overhead = WeeklyOverhead {
        insurance: 400.0,
        dispatch_ops: 150.0,
        eld: 50.0,
        prepass: 25.0,
        sga: 200.0,
        miscellaneous: 75.0,
        trailer_lease: 100.0,
    };
    rates.weekly_mileage_baseline = 2500.0;

    rates
}

pub fn data_fixture_path(fixture: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data/fixtures/")
        .join(fixture)
        .canonicalize()
        .unwrap()
}

pub fn read_fixture<T: DeserializeOwned>(fixture: &str) -> T {
    let file = File::open(data_fixture_path(fixture)).unwrap();
    serde_json::from_reader(file).unwrap()
}
