use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Canada,
    UnitedStates,
    Unknown,
}

const CANADA_KEYWORDS: &[&str] = &[
    "canada",
    "ontario",
    "on",
    "quebec",
    "qc",
    "british columbia",
    "bc",
    "alberta",
    "ab",
    "manitoba",
    "mb",
    "saskatchewan",
    "sk",
    "nova scotia",
    "ns",
    "new brunswick",
    "nb",
];

const UNITED_STATES_KEYWORDS: &[&str] = &[
    "usa",
    "us",
    "united states",
    "michigan",
    "mi",
    "ohio",
    "oh",
    "new york",
    "ny",
    "illinois",
    "il",
    "pennsylvania",
    "pa",
    "washington",
    "wa",
    "indiana",
    "wisconsin",
    "wi",
    "minnesota",
    "mn",
    "texas",
    "tx",
    "california",
    "florida",
    "fl",
];

/// State codes that are also a country code ("CA") or a common word ("in").
/// They only count when no Canadian keyword matched.
const AMBIGUOUS_UNITED_STATES_CODES: &[&str] = &["ca", "in"];

impl Region {
    /// Classifies a free-text location ("Windsor, ON", "Detroit, Michigan").
    ///
    /// Keywords are matched against whole words only, so "Boston" does not
    /// match the "on" abbreviation. "CA" next to a province ("Toronto, ON, CA")
    /// is the country code, otherwise it is California. When both countries
    /// match, or none, the region is `Unknown`.
    pub fn classify(location: &str) -> Region {
        let words = location
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(|word| word.to_lowercase())
            .collect::<Vec<_>>();

        let is_canada = CANADA_KEYWORDS
            .iter()
            .any(|keyword| contains_phrase(&words, keyword));
        let is_united_states = UNITED_STATES_KEYWORDS
            .iter()
            .any(|keyword| contains_phrase(&words, keyword))
            || (!is_canada
                && AMBIGUOUS_UNITED_STATES_CODES
                    .iter()
                    .any(|code| contains_phrase(&words, code)));

        match (is_canada, is_united_states) {
            (true, false) => Region::Canada,
            (false, true) => Region::UnitedStates,
            _ => Region::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Region::Unknown)
    }

    pub fn crosses_border_to(&self, other: Region) -> bool {
        matches!(
            (self, other),
            (Region::Canada, Region::UnitedStates) | (Region::UnitedStates, Region::Canada)
        )
    }
}

fn contains_phrase(words: &[String], phrase: &str) -> bool {
    let phrase = phrase.split(' ').collect::<Vec<_>>();

    words
        .windows(phrase.len())
        .any(|window| window.iter().zip(phrase.iter()).all(|(w, p)| w == p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_province_and_state_codes() {
        assert_eq!(Region::classify("Windsor, ON"), Region::Canada);
        assert_eq!(Region::classify("Montreal, QC, Canada"), Region::Canada);
        assert_eq!(Region::classify("Detroit, MI"), Region::UnitedStates);
        assert_eq!(Region::classify("Columbus, Ohio, USA"), Region::UnitedStates);
    }

    #[test]
    fn test_classify_ca_as_country_after_province() {
        assert_eq!(Region::classify("Toronto, ON, CA"), Region::Canada);
        assert_eq!(Region::classify("Vancouver BC CA"), Region::Canada);
        assert_eq!(Region::classify("Los Angeles, CA"), Region::UnitedStates);
        assert_eq!(Region::classify("San Diego, CA, USA"), Region::UnitedStates);
        assert_eq!(Region::classify("Indianapolis, IN"), Region::UnitedStates);
        assert_eq!(Region::classify("Yard in Guelph, ON"), Region::Canada);
    }

    #[test]
    fn test_classify_multi_word_names() {
        assert_eq!(Region::classify("Buffalo, New York"), Region::UnitedStates);
        assert_eq!(Region::classify("Vancouver British Columbia"), Region::Canada);
    }

    #[test]
    fn test_classify_does_not_match_substrings() {
        assert_eq!(Region::classify("Boston"), Region::Unknown);
        assert_eq!(Region::classify("Guelph"), Region::Unknown);
        assert_eq!(Region::classify(""), Region::Unknown);
    }

    #[test]
    fn test_classify_ambiguous_is_unknown() {
        assert_eq!(Region::classify("Canada / USA"), Region::Unknown);
    }

    #[test]
    fn test_crosses_border() {
        assert!(Region::Canada.crosses_border_to(Region::UnitedStates));
        assert!(Region::UnitedStates.crosses_border_to(Region::Canada));
        assert!(!Region::Canada.crosses_border_to(Region::Canada));
        assert!(!Region::Unknown.crosses_border_to(Region::Canada));
    }
}
