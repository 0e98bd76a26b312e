use crate::types::{ConjugationStep, DeinflectionCandidate};

/// Render a candidate's derivation chain as 1-indexed steps.
///
/// The candidate stores derivations base-to-surface; the rendered chain
/// lists them in the reverse order, pairing each form label with the
/// word form recorded at that derivation.
pub fn render_chain(candidate: &DeinflectionCandidate) -> Vec<ConjugationStep> {
    if candidate.derivations.is_empty() {
        return Vec::new();
    }
    candidate
        .derivations
        .iter()
        .rev()
        .zip(candidate.word_form_progression.iter().rev())
        .enumerate()
        .map(|(i, (word_type, form))| ConjugationStep {
            step: i + 1,
            form: word_type.label().to_string(),
            result: form.clone(),
        })
        .collect()
}

/// Compact single-line rendering of a chain for terminal output.
pub fn chain_to_string(chain: &[ConjugationStep]) -> String {
    chain
        .iter()
        .map(|step| format!("{} ({})", step.result, step.form))
        .collect::<Vec<_>>()
        .join(" -> ")
}
