use schemars::JsonSchema;
use serde::Serialize;

use crate::trip::miles::Miles;

/// `(revenue - total_cost) / revenue * 100`, defined as 0 without revenue.
pub fn margin_pct(revenue: f64, total_cost: f64) -> f64 {
    if revenue > 0.0 {
        (revenue - total_cost) / revenue * 100.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct MarginAnalysis {
    pub revenue: f64,
    pub profit: f64,
    pub margin_pct: f64,
    pub is_profitable: bool,
    /// Revenue per mile.
    pub rpm: f64,
    /// Profit per mile.
    pub ppm: f64,
    /// Revenue per mile at which the trip breaks even.
    pub break_even_rpm: f64,
}

impl MarginAnalysis {
    pub fn new(revenue: f64, total_cost: f64, miles: Miles) -> Self {
        let profit = revenue - total_cost;

        MarginAnalysis {
            revenue,
            profit,
            margin_pct: margin_pct(revenue, total_cost),
            is_profitable: profit > 0.0,
            rpm: miles.per_mile(revenue),
            ppm: miles.per_mile(profit),
            break_even_rpm: miles.per_mile(total_cost),
        }
    }
}

/// Price needed to reach a target margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct PricingSuggestion {
    pub target_margin_pct: f64,
    pub minimum_rpm: f64,
    pub target_rpm: f64,
    pub recommended_price: f64,
}

impl PricingSuggestion {
    /// `target_margin_pct` must be below 100, higher targets are clamped to
    /// the break-even price.
    pub fn new(total_cost: f64, miles: Miles, target_margin_pct: f64) -> Self {
        let recommended_price = if (0.0..100.0).contains(&target_margin_pct) {
            total_cost / (1.0 - target_margin_pct / 100.0)
        } else {
            total_cost
        };

        PricingSuggestion {
            target_margin_pct,
            minimum_rpm: miles.per_mile(total_cost),
            target_rpm: miles.per_mile(recommended_price),
            recommended_price,
        }
    }
}
