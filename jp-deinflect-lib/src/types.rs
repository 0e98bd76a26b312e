use serde::{Deserialize, Serialize};

use crate::word_type::WordType;

/// Flags a derivation rule can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DerivationAttribute {
    /// The rule participates in matching but is omitted from
    /// human-facing derivation chains.
    Silent,
}

/// A single suffix-rewrite rule: a word of `conjugated_word_type` ending
/// in `conjugated_ending` may come from a word of
/// `unconjugated_word_type` ending in `unconjugated_ending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivationRule {
    pub conjugated_word_type: WordType,
    pub unconjugated_word_type: WordType,
    pub conjugated_ending: String,
    pub unconjugated_ending: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<DerivationAttribute>,
    /// Forbidden continuations. Each inner sequence is listed
    /// base-to-surface; its last element is matched against the rule
    /// applied immediately after this one during the search.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cannot_follow: Vec<Vec<WordType>>,
}

impl DerivationRule {
    pub fn is_silent(&self) -> bool {
        self.attributes.contains(&DerivationAttribute::Silent)
    }
}

/// One possible dictionary form for a conjugated input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeinflectionCandidate {
    /// The proposed dictionary form.
    pub base: String,
    /// Non-silent derivation categories, ordered base to surface.
    pub derivations: Vec<WordType>,
    /// The intermediate word forms, one per derivation, ending with the
    /// surface form. The base itself is not included.
    pub word_form_progression: Vec<String>,
}

/// One step of a rendered conjugation chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationStep {
    /// 1-indexed position in the chain.
    pub step: usize,
    /// Human-readable name of the form.
    pub form: String,
    /// The word form at this step.
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_deserializes_with_defaults() {
        let json = r#"{
            "conjugated_word_type": "TE_FORM",
            "unconjugated_word_type": "ICHIDAN_VERB",
            "conjugated_ending": "て",
            "unconjugated_ending": "る"
        }"#;
        let rule: DerivationRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.conjugated_word_type, WordType::TeForm);
        assert_eq!(rule.unconjugated_word_type, WordType::IchidanVerb);
        assert!(rule.attributes.is_empty());
        assert!(rule.cannot_follow.is_empty());
        assert!(!rule.is_silent());
    }

    #[test]
    fn silent_attribute_round_trips() {
        let json = r#"{
            "conjugated_word_type": "SENTENCE",
            "unconjugated_word_type": "GODAN_VERB",
            "conjugated_ending": "う",
            "unconjugated_ending": "う",
            "attributes": ["SILENT"]
        }"#;
        let rule: DerivationRule = serde_json::from_str(json).unwrap();
        assert!(rule.is_silent());
    }
}
