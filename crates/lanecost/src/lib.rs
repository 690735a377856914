pub mod costing;
pub mod engine;
pub mod error;
pub mod guardrails;
pub mod json;
pub mod rates;
pub mod trip;

#[cfg(test)]
pub(crate) mod test_utils;
