use std::collections::HashMap;

use thiserror::Error;

use crate::types::DerivationRule;

const EMBEDDED_RULES: &str = include_str!("../data/derivation_rules.json");
const EMBEDDED_FREQUENCY: &str = include_str!("../data/word_frequency.json");

/// Errors raised while building a table from JSON. Construction is
/// all-or-nothing: a malformed record fails the whole table rather than
/// being skipped.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("malformed table data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("rule table is empty")]
    Empty,
}

/// The ordered derivation rule table. Rule order is significant: it is
/// the tie-break between rules whose conjugated endings have the same
/// length.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<DerivationRule>,
}

impl RuleTable {
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let rules: Vec<DerivationRule> = serde_json::from_str(json)?;
        if rules.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self { rules })
    }

    /// The rule table shipped with the crate.
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_RULES).expect("embedded derivation rule JSON is invalid")
    }

    pub fn rules(&self) -> &[DerivationRule] {
        &self.rules
    }
}

/// Word frequency ranks, lower is more common. Words not in the table
/// are unranked.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    ranks: HashMap<String, u32>,
}

impl FrequencyTable {
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let ranks: HashMap<String, u32> = serde_json::from_str(json)?;
        Ok(Self { ranks })
    }

    /// The frequency table shipped with the crate.
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_FREQUENCY).expect("embedded word frequency JSON is invalid")
    }

    pub fn rank(&self, word: &str) -> Option<u32> {
        self.ranks.get(word).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_load() {
        let rules = RuleTable::embedded();
        assert!(!rules.rules().is_empty());
        let freq = FrequencyTable::embedded();
        assert_eq!(freq.rank("する"), Some(1));
        assert_eq!(freq.rank("存在しない単語"), None);
    }

    #[test]
    fn empty_rule_table_is_rejected() {
        assert!(matches!(RuleTable::from_json("[]"), Err(TableError::Empty)));
    }

    #[test]
    fn unknown_word_type_is_rejected() {
        let json = r#"[{
            "conjugated_word_type": "NOT_A_CATEGORY",
            "unconjugated_word_type": "SENTENCE",
            "conjugated_ending": "た",
            "unconjugated_ending": "る"
        }]"#;
        assert!(matches!(
            RuleTable::from_json(json),
            Err(TableError::Parse(_))
        ));
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"[{
            "conjugated_word_type": "TE_FORM",
            "conjugated_ending": "て"
        }]"#;
        assert!(matches!(
            RuleTable::from_json(json),
            Err(TableError::Parse(_))
        ));
    }

    #[test]
    fn malformed_frequency_json_is_rejected() {
        assert!(FrequencyTable::from_json("{\"する\": \"first\"}").is_err());
    }
}
