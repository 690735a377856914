use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::guardrails::business_rule::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingRecommendation {
    Ready,
    Caution,
    NotRecommended,
}

impl BookingRecommendation {
    /// Any critical violation refuses the booking, any other violation asks
    /// for caution.
    pub fn from_severities(severities: impl IntoIterator<Item = Severity>) -> Self {
        severities
            .into_iter()
            .fold(BookingRecommendation::Ready, |recommendation, severity| {
                match (recommendation, severity) {
                    (BookingRecommendation::NotRecommended, _) | (_, Severity::Critical) => {
                        BookingRecommendation::NotRecommended
                    }
                    _ => BookingRecommendation::Caution,
                }
            })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, BookingRecommendation::Ready)
    }
}

impl std::fmt::Display for BookingRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingRecommendation::Ready => f.write_str("ready"),
            BookingRecommendation::Caution => f.write_str("caution"),
            BookingRecommendation::NotRecommended => f.write_str("not_recommended"),
        }
    }
}
