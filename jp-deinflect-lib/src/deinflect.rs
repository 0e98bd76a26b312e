use std::collections::{HashMap, HashSet};

use crate::tables::{FrequencyTable, RuleTable};
use crate::types::{DeinflectionCandidate, DerivationRule};
use crate::word_type::WordType;

/// Default bound on the recursion depth of the suffix search.
pub const DEFAULT_DEPTH_LIMIT: u32 = 42;

/// Knobs for a single `unconjugate` call.
#[derive(Debug, Clone)]
pub struct UnconjugateOptions {
    /// When nothing matches, retry with the input truncated one
    /// character at a time.
    pub fuzzy: bool,
    /// Maximum recursion depth of the suffix search.
    pub depth_limit: u32,
}

impl Default for UnconjugateOptions {
    fn default() -> Self {
        Self {
            fuzzy: false,
            depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }
}

/// Per-branch search state. Owned by each branch so sibling branches
/// never observe each other's derivations.
#[derive(Debug, Clone, Default)]
struct DerivationSequence {
    /// Indices of every rule applied, silent ones included, in
    /// application order (surface inward).
    all_taken: Vec<usize>,
    /// Indices of the non-silent rules applied, in application order.
    non_silent_taken: Vec<usize>,
    /// The word form as it was just before each non-silent rule was
    /// applied.
    non_silent_pre_forms: Vec<String>,
}

/// The deinflection engine: a rule table, an index of rules by
/// conjugated category, and a frequency table for ranking. Immutable
/// after construction.
pub struct Deinflector {
    rules: RuleTable,
    rules_by_conjugated_type: HashMap<WordType, Vec<usize>>,
    frequency: FrequencyTable,
}

impl Deinflector {
    /// Build a deinflector over the tables shipped with the crate.
    pub fn new() -> Self {
        Self::with_tables(RuleTable::embedded(), FrequencyTable::embedded())
    }

    pub fn with_tables(rules: RuleTable, frequency: FrequencyTable) -> Self {
        let mut rules_by_conjugated_type: HashMap<WordType, Vec<usize>> = HashMap::new();
        for (idx, rule) in rules.rules().iter().enumerate() {
            rules_by_conjugated_type
                .entry(rule.conjugated_word_type)
                .or_default()
                .push(idx);
        }
        Self {
            rules,
            rules_by_conjugated_type,
            frequency,
        }
    }

    /// Propose dictionary forms for a conjugated word, most likely
    /// first, using default options.
    pub fn unconjugate(&self, word: &str) -> Vec<DeinflectionCandidate> {
        self.unconjugate_with(word, &UnconjugateOptions::default())
    }

    /// Propose dictionary forms for a conjugated word, most likely
    /// first.
    pub fn unconjugate_with(
        &self,
        word: &str,
        options: &UnconjugateOptions,
    ) -> Vec<DeinflectionCandidate> {
        let mut results = self.search(
            word,
            WordType::Sentence,
            &DerivationSequence::default(),
            0,
            options.depth_limit,
        );

        if options.fuzzy && results.is_empty() {
            let mut truncated = word.to_string();
            truncated.pop();
            while !truncated.is_empty() && results.is_empty() {
                results.extend(self.search(
                    &truncated,
                    WordType::Sentence,
                    &DerivationSequence::default(),
                    0,
                    options.depth_limit,
                ));
                truncated.pop();
            }
        }

        self.sort_by_likelihood(results)
    }

    fn search(
        &self,
        word: &str,
        word_type: WordType,
        sequence: &DerivationSequence,
        level: u32,
        level_limit: u32,
    ) -> Vec<DeinflectionCandidate> {
        if self.took_invalid_derivation_path(sequence) {
            return Vec::new();
        }
        if level > level_limit {
            return Vec::new();
        }

        let mut results = Vec::new();
        if word_type.is_dictionary_form() {
            results.push(self.to_candidate(word, sequence));
        }

        for rule_idx in self.matching_rule_indices(word_type, word) {
            let rule = &self.rules.rules()[rule_idx];
            let mut next_sequence = sequence.clone();
            next_sequence.all_taken.push(rule_idx);
            if !rule.is_silent() {
                next_sequence.non_silent_taken.push(rule_idx);
                next_sequence.non_silent_pre_forms.push(word.to_string());
            }
            let unconjugated = rewrite_ending(word, rule);
            results.extend(self.search(
                &unconjugated,
                rule.unconjugated_word_type,
                &next_sequence,
                level + 1,
                level_limit,
            ));
        }

        // Identical (base, derivations, progression) triples can be
        // reached through different silent paths; keep the first.
        let mut seen = HashSet::new();
        results.retain(|candidate| seen.insert(candidate.clone()));
        results
    }

    /// Rules applicable at this category whose conjugated ending
    /// matches the word, longest ending first. At the `Sentence`
    /// category every rule is a candidate.
    fn matching_rule_indices(&self, word_type: WordType, word: &str) -> Vec<usize> {
        let rules = self.rules.rules();
        let candidate_indices: Vec<usize> = if word_type == WordType::Sentence {
            (0..rules.len()).collect()
        } else {
            self.rules_by_conjugated_type
                .get(&word_type)
                .cloned()
                .unwrap_or_default()
        };

        let mut matching: Vec<usize> = candidate_indices
            .into_iter()
            .filter(|&idx| word.ends_with(&rules[idx].conjugated_ending))
            .collect();
        // Stable sort: table order breaks ties between equal lengths.
        matching.sort_by(|&a, &b| {
            rules[b]
                .conjugated_ending
                .len()
                .cmp(&rules[a].conjugated_ending.len())
        });
        matching
    }

    /// Walk every applied rule's `cannot_follow` sequences against the
    /// rules applied after it. A fully matched sequence invalidates the
    /// whole branch.
    fn took_invalid_derivation_path(&self, sequence: &DerivationSequence) -> bool {
        let rules = self.rules.rules();
        let taken = &sequence.all_taken;
        for (i, &rule_idx) in taken.iter().enumerate() {
            for forbidden in &rules[rule_idx].cannot_follow {
                let mut offset = 1usize;
                for (g, forbidden_type) in forbidden.iter().enumerate().rev() {
                    let Some(&next_idx) = taken.get(i + offset) else {
                        break;
                    };
                    if rules[next_idx].conjugated_word_type != *forbidden_type {
                        break;
                    }
                    if g == 0 {
                        return true;
                    }
                    offset += 1;
                }
            }
        }
        false
    }

    fn to_candidate(&self, base: &str, sequence: &DerivationSequence) -> DeinflectionCandidate {
        let rules = self.rules.rules();
        DeinflectionCandidate {
            base: base.to_string(),
            derivations: sequence
                .non_silent_taken
                .iter()
                .rev()
                .map(|&idx| rules[idx].conjugated_word_type)
                .collect(),
            word_form_progression: sequence.non_silent_pre_forms.iter().rev().cloned().collect(),
        }
    }

    /// Sort candidates by frequency rank, then by the rank of the
    /// word with a する suffix stripped, then by base length. Unranked
    /// sorts last at each stage; ties keep discovery order.
    fn sort_by_likelihood(
        &self,
        mut results: Vec<DeinflectionCandidate>,
    ) -> Vec<DeinflectionCandidate> {
        results.sort_by_key(|candidate| {
            let rank = self.frequency.rank(&candidate.base);
            let suru_rank = self.suru_verb_rank(&candidate.base);
            (
                rank.is_none(),
                rank.unwrap_or(u32::MAX),
                suru_rank.is_none(),
                suru_rank.unwrap_or(u32::MAX),
                candidate.base.chars().count(),
            )
        });
        results
    }

    fn suru_verb_rank(&self, word: &str) -> Option<u32> {
        word.strip_suffix("する")
            .and_then(|stem| self.frequency.rank(stem))
    }
}

impl Default for Deinflector {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace the rule's conjugated ending with its unconjugated ending.
/// An empty conjugated ending appends, which can grow the word.
fn rewrite_ending(word: &str, rule: &DerivationRule) -> String {
    let stem = &word[..word.len() - rule.conjugated_ending.len()];
    format!("{stem}{}", rule.unconjugated_ending)
}
