use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lanecost::{
    engine::TripCostEngine,
    guardrails::business_rule::{BusinessRule, RuleKey, Severity},
    rates::{driver_type::DriverType, rate_table::RateTable},
    trip::{
        accessorial::{Accessorial, AccessorialCode, AccessorialSet},
        booking::Booking,
        lane::LaneBuilder,
        place::Place,
    },
};

fn create_booking() -> Booking {
    let mut builder = LaneBuilder::default();
    builder
        .set_origin(Place::from_lat_lon("Guelph, ON", 43.5448, -80.2482))
        .set_destination(Place::from_lat_lon("Chicago, IL", 41.8781, -87.6298));
    let lane = builder.build().unwrap();

    let accessorials = AccessorialSet::from_vec(vec![
        Accessorial::at_catalog_price(AccessorialCode::Appointment, 1),
        Accessorial::at_catalog_price(AccessorialCode::DetentionDelivery, 2),
    ])
    .unwrap();

    Booking::new(DriverType::OwnerOperator(None), lane)
        .with_accessorials(accessorials)
        .with_revenue(1650.0)
        .unwrap()
}

fn quote_benchmark(c: &mut Criterion) {
    let engine = TripCostEngine::new(RateTable::default()).unwrap();
    let booking = create_booking();
    let rules = vec![
        BusinessRule::new(RuleKey::MinMarginThreshold, 8.0, Severity::Critical),
        BusinessRule::new(RuleKey::TargetMargin, 15.0, Severity::Warning),
        BusinessRule::new(RuleKey::MaxCostPerMile, 2.5, Severity::Warning),
    ];

    c.bench_function("quote", |b| {
        b.iter(|| engine.quote(black_box(&booking), black_box(&rules)))
    });

    c.bench_function("compare", |b| {
        b.iter(|| engine.compare(black_box(&booking), black_box(&rules)))
    });
}

criterion_group!(benches, quote_benchmark);
criterion_main!(benches);
