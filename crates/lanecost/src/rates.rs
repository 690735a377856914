pub mod cpm_breakdown;
pub mod driver_type;
pub mod rate_resolver;
pub mod rate_table;
pub mod wage_adders;
pub mod weekly_overhead;
pub mod zone;
