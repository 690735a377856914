use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context;
use clap::Args;
use lanecost::{
    engine::TripCostEngine,
    guardrails::business_rule::BusinessRule,
    json::types::{JsonBusinessRule, normalize_rules},
    rates::rate_table::RateTable,
};
use tracing::{debug, info};

#[derive(Args)]
pub struct ConfigArgs {
    /// Rate table JSON file, the built-in rates are used when omitted
    #[arg(long, env = "LANECOST_RATES_FILE")]
    rates: Option<PathBuf>,

    /// Business rules catalog JSON file, no guardrails are checked when omitted
    #[arg(long, env = "LANECOST_RULES_FILE")]
    rules: Option<PathBuf>,
}

pub struct Config {
    pub engine: TripCostEngine,
    pub rules: Vec<BusinessRule>,
}

impl ConfigArgs {
    pub fn load(&self) -> anyhow::Result<Config> {
        let rates = match &self.rates {
            Some(path) => {
                info!("Loading rates from {:?}", path);
                let file = File::open(path).with_context(|| format!("opening {path:?}"))?;
                serde_json::from_reader::<_, RateTable>(BufReader::new(file))
                    .with_context(|| format!("parsing rate table {path:?}"))?
            }
            None => {
                debug!("Using built-in rate table");
                RateTable::default()
            }
        };

        let rules = match &self.rules {
            Some(path) => load_rules(path)?,
            None => Vec::new(),
        };

        Ok(Config {
            engine: TripCostEngine::new(rates)?,
            rules,
        })
    }
}

fn load_rules(path: &PathBuf) -> anyhow::Result<Vec<BusinessRule>> {
    let file = File::open(path).with_context(|| format!("opening {path:?}"))?;
    let raw: Vec<JsonBusinessRule> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing rules {path:?}"))?;

    let total = raw.len();
    let rules = normalize_rules(raw);
    info!("Loaded {} of {} business rules", rules.len(), total);

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = ConfigArgs {
            rates: None,
            rules: None,
        }
        .load()
        .unwrap();

        assert_eq!(config.engine.rates(), &RateTable::default());
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_load_rules_fixture() {
        let path = env::current_dir()
            .unwrap()
            .join("../data/fixtures/rules.json");

        let rules = load_rules(&path).unwrap();

        assert_eq!(rules.len(), 3);
    }
}
