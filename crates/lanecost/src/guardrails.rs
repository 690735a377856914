pub mod business_rule;
pub mod evaluator;
pub mod guardrail;
pub mod max_cost_per_mile_guardrail;
pub mod min_margin_guardrail;
pub mod recommendation;
pub mod target_margin_guardrail;
