use comfy_table::{Table, presets::UTF8_FULL};
use lanecost::engine::TripQuote;

fn dollars(value: f64) -> String {
    format!("${value:.2}")
}

pub fn quote_table(quote: &TripQuote) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["", "per mile", "trip"]);

    let miles = quote.cost.miles;
    for (name, cpm) in quote.resolution.cpm.components() {
        table.add_row(vec![name.to_owned(), dollars(cpm), dollars(miles * cpm)]);
    }

    for accessorial in quote.cost.accessorials.iter() {
        let mut name = format!("{} x{}", accessorial.code().name(), accessorial.quantity());
        if accessorial.is_auto_detected() {
            name.push_str(" (auto)");
        }
        table.add_row(vec![name, String::new(), dollars(accessorial.total())]);
    }

    table.add_row(vec![
        "total".to_owned(),
        dollars(quote.cost.effective_cpm),
        dollars(quote.cost.total_cost),
    ]);

    table
}

pub fn guardrails_table(quote: &TripQuote) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["severity", "rule", "actual", "threshold", "message"]);

    for violation in &quote.guardrails.violations {
        table.add_row(vec![
            violation.severity.to_string(),
            violation.rule_key.to_string(),
            format!("{:.2}", violation.actual),
            format!("{:.2}", violation.threshold),
            violation.message.clone(),
        ]);
    }

    table
}

pub fn comparison_table(quotes: &[TripQuote]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "driver",
        "cpm",
        "total cost",
        "margin",
        "recommended price",
        "recommendation",
    ]);

    for quote in quotes {
        table.add_row(vec![
            quote.profile().label().to_owned(),
            dollars(quote.cost.total_cpm),
            dollars(quote.cost.total_cost),
            format!("{:.1}%", quote.margin.margin_pct),
            dollars(quote.pricing.recommended_price),
            quote.guardrails.recommendation.to_string(),
        ]);
    }

    table
}
