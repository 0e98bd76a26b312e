use std::collections::HashSet;

use serde_json::{json, Value};

use crate::deinflect::Deinflector;
use crate::output::render_chain;
use crate::segment::{SegKind, SentSeg};
use crate::types::{ConjugationStep, DeinflectionCandidate};

/// Merge conjugated verb and adjective runs in a tagged sentence.
///
/// A run starts at a verb/adjective token and greedily extends over
/// following auxiliary tokens. The concatenated run text is
/// deinflected; if a candidate survives lemma filtering, a multi-token
/// run collapses into one merged segment carrying the base form and a
/// rendered conjugation chain in `misc`. Single tokens are annotated in
/// place when their chain is non-empty. Everything else passes through
/// unchanged.
pub fn analyze_conjugations(segments: &[SentSeg], deinflector: &Deinflector) -> Vec<SentSeg> {
    let mut out = Vec::with_capacity(segments.len());
    let mut i = 0;

    while i < segments.len() {
        let segment = &segments[i];

        let SegKind::Token { idx: head_idx, .. } = segment.inner else {
            out.push(segment.clone());
            i += 1;
            continue;
        };
        if !is_conjugable_token(segment) {
            out.push(segment.clone());
            i += 1;
            continue;
        }

        let run_len = conjugation_run_length(segments, i);
        let run = &segments[i..i + run_len];
        let combined_text: String = run.iter().map(|s| s.text.as_str()).collect();

        let candidates = deinflector.unconjugate(&combined_text);
        let candidates = filter_by_run_lemmas(candidates, run);

        match candidates.first() {
            Some(best) if run_len > 1 => {
                let chain = render_chain(best);
                out.push(merged_segment(run, head_idx, &combined_text, best, &chain));
                i += run_len;
            }
            Some(best) => {
                let chain = render_chain(best);
                if chain.is_empty() {
                    out.push(segment.clone());
                } else {
                    out.push(annotated_segment(segment, &combined_text, best, &chain, run_len));
                }
                i += 1;
            }
            None => {
                out.push(segment.clone());
                i += 1;
            }
        }
    }

    out
}

/// Whether a token can head a conjugation run.
fn is_conjugable_token(segment: &SentSeg) -> bool {
    let upos = segment.attributes.upos.as_deref().unwrap_or("");
    let xpos = segment.attributes.xpos.as_deref().unwrap_or("");

    if matches!(upos, "VERB" | "AUX" | "ADJ") {
        return true;
    }
    xpos.contains("動詞") || xpos.contains("形容詞") || xpos.contains("助動詞")
}

/// Whether a token can continue a conjugation run.
fn is_auxiliary_token(segment: &SentSeg) -> bool {
    if !segment.is_token() {
        return false;
    }
    let upos = segment.attributes.upos.as_deref().unwrap_or("");
    let xpos = segment.attributes.xpos.as_deref().unwrap_or("");

    if matches!(upos, "AUX" | "SCONJ") {
        return true;
    }
    xpos.contains("助動詞") || xpos.contains("助詞") || xpos.contains("動詞-非自立")
}

/// Length of the run starting at `start`: the head token plus every
/// immediately following auxiliary token.
fn conjugation_run_length(segments: &[SentSeg], start: usize) -> usize {
    let mut len = 1;
    while start + len < segments.len() && is_auxiliary_token(&segments[start + len]) {
        len += 1;
    }
    len
}

/// Keep candidates whose base matches a lemma the tagger assigned to
/// some token of the run. When that filter removes everything, the
/// original list stands; the tagger's lemmatization is not trusted that
/// far.
fn filter_by_run_lemmas(
    candidates: Vec<DeinflectionCandidate>,
    run: &[SentSeg],
) -> Vec<DeinflectionCandidate> {
    if candidates.is_empty() {
        return candidates;
    }

    let run_lemmas: HashSet<&str> = run
        .iter()
        .filter(|seg| seg.is_token())
        .filter_map(|seg| seg.attributes.lemma.as_deref())
        .collect();

    let filtered: Vec<DeinflectionCandidate> = candidates
        .iter()
        .filter(|candidate| run_lemmas.contains(candidate.base.as_str()))
        .cloned()
        .collect();

    if filtered.is_empty() {
        candidates
    } else {
        filtered
    }
}

fn chain_value(chain: &[ConjugationStep]) -> Value {
    Value::Array(
        chain
            .iter()
            .map(|step| {
                json!({
                    "step": step.step,
                    "form": step.form,
                    "result": step.result,
                })
            })
            .collect(),
    )
}

/// Collapse a multi-token run into one token segment spanning it. The
/// head token donates its tags; the candidate donates the lemma.
fn merged_segment(
    run: &[SentSeg],
    head_idx: usize,
    combined_text: &str,
    best: &DeinflectionCandidate,
    chain: &[ConjugationStep],
) -> SentSeg {
    let head = &run[0];
    let mut misc = head.attributes.misc.clone();
    misc.insert("conjugation_base".to_string(), json!(best.base));
    misc.insert("conjugation_chain".to_string(), chain_value(chain));
    misc.insert("conjugation_sequence_length".to_string(), json!(run.len()));
    misc.insert("conjugation_combined_text".to_string(), json!(combined_text));

    SentSeg {
        sentence_idx: head.sentence_idx,
        text: combined_text.to_string(),
        start_char: head.start_char,
        end_char: run[run.len() - 1].end_char,
        inner: SegKind::Token {
            idx: head_idx,
            orthography: combined_text.to_lowercase(),
        },
        attributes: crate::segment::SegAttributes {
            lemma: Some(best.base.clone()),
            upos: head.attributes.upos.clone(),
            xpos: head.attributes.xpos.clone(),
            dependency: head.attributes.dependency.clone(),
            misc,
        },
    }
}

/// Annotate a single conjugated token in place, keeping the tagger's
/// lemma.
fn annotated_segment(
    segment: &SentSeg,
    combined_text: &str,
    best: &DeinflectionCandidate,
    chain: &[ConjugationStep],
    run_len: usize,
) -> SentSeg {
    let mut annotated = segment.clone();
    annotated
        .attributes
        .misc
        .insert("conjugation_base".to_string(), json!(best.base));
    annotated
        .attributes
        .misc
        .insert("conjugation_chain".to_string(), chain_value(chain));
    annotated
        .attributes
        .misc
        .insert("conjugation_sequence_length".to_string(), json!(run_len));
    annotated
        .attributes
        .misc
        .insert("conjugation_combined_text".to_string(), json!(combined_text));
    annotated
}
