// End-to-end checks for conjugation analysis over tagged sentence
// segments: run merging, misc augmentation, and pass-through behavior.

use serde_json::json;

use jp_deinflect_lib::{
    analyze_conjugations, Deinflector, SegAttributes, SegKind, SentSeg,
};

fn token(idx: usize, text: &str, lemma: &str, upos: &str, xpos: &str, start: usize) -> SentSeg {
    SentSeg::token(
        0,
        idx,
        text,
        start,
        start + text.chars().count(),
        SegAttributes {
            lemma: Some(lemma.to_string()),
            upos: Some(upos.to_string()),
            xpos: Some(xpos.to_string()),
            ..SegAttributes::default()
        },
    )
}

#[test]
fn merges_negative_past_run_into_one_segment() {
    // 言わ + なかった, the way a morphological tagger splits it.
    let segments = vec![
        token(1, "私", "私", "PRON", "代名詞", 0),
        token(2, "は", "は", "ADP", "助詞-係助詞", 1),
        token(3, "言わ", "言う", "VERB", "動詞-一般", 2),
        token(4, "なかった", "ない", "AUX", "助動詞", 4),
        SentSeg::punctuation(0, "。", 8, 9),
    ];
    let deinflector = Deinflector::new();

    let out = analyze_conjugations(&segments, &deinflector);
    assert_eq!(out.len(), 4);
    assert_eq!(out[0], segments[0]);
    assert_eq!(out[1], segments[1]);
    assert_eq!(out[3], segments[4]);

    let merged = &out[2];
    assert_eq!(merged.text, "言わなかった");
    assert_eq!(merged.start_char, 2);
    assert_eq!(merged.end_char, 8);
    assert_eq!(merged.attributes.lemma.as_deref(), Some("言う"));
    assert_eq!(merged.attributes.upos.as_deref(), Some("VERB"));
    assert_eq!(merged.attributes.xpos.as_deref(), Some("動詞-一般"));
    match &merged.inner {
        SegKind::Token { idx, orthography } => {
            assert_eq!(*idx, 3);
            assert_eq!(orthography, "言わなかった");
        }
        other => panic!("expected a token segment, got {other:?}"),
    }

    let misc = &merged.attributes.misc;
    assert_eq!(misc.get("conjugation_base"), Some(&json!("言う")));
    assert_eq!(misc.get("conjugation_sequence_length"), Some(&json!(2)));
    assert_eq!(
        misc.get("conjugation_combined_text"),
        Some(&json!("言わなかった"))
    );
    let chain = misc
        .get("conjugation_chain")
        .and_then(|v| v.as_array())
        .expect("merged segment must carry a chain");
    assert_eq!(chain.len(), 2);
    assert_eq!(chain[0]["step"], json!(1));
    assert_eq!(chain[0]["result"], json!("言わなかった"));
    assert_eq!(chain[1]["step"], json!(2));
    assert_eq!(chain[1]["result"], json!("言わない"));
}

#[test]
fn sconj_te_continues_a_run() {
    // 食べ + て + いる: the te particle is SCONJ, いる is non-independent.
    let segments = vec![
        token(1, "食べ", "食べる", "VERB", "動詞-一般", 0),
        token(2, "て", "て", "SCONJ", "助詞-接続助詞", 2),
        token(3, "いる", "いる", "VERB", "動詞-非自立可能", 3),
    ];
    let deinflector = Deinflector::new();

    let out = analyze_conjugations(&segments, &deinflector);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].text, "食べている");
    assert_eq!(out[0].attributes.lemma.as_deref(), Some("食べる"));
    assert_eq!(
        out[0].attributes.misc.get("conjugation_sequence_length"),
        Some(&json!(3))
    );
}

#[test]
fn falls_back_to_unfiltered_candidates_when_lemmas_mismatch() {
    // The tagger's lemma is not among the engine's bases; the engine's
    // own ranking then decides.
    let segments = vec![token(1, "読んだ", "よむ", "VERB", "動詞-一般", 0)];
    let deinflector = Deinflector::new();

    let out = analyze_conjugations(&segments, &deinflector);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].attributes.lemma.as_deref(), Some("よむ"));
    assert_eq!(
        out[0].attributes.misc.get("conjugation_base"),
        Some(&json!("読む"))
    );
}

#[test]
fn unrecognized_tokens_pass_through_untouched() {
    let segments = vec![
        token(1, "コーヒー", "コーヒー", "NOUN", "名詞-普通名詞", 0),
        SentSeg::whitespace(0, " ", 4, 5),
        token(2, "です", "です", "AUX", "助動詞", 5),
    ];
    let deinflector = Deinflector::new();

    let out = analyze_conjugations(&segments, &deinflector);
    assert_eq!(out[0], segments[0]);
    assert_eq!(out[1], segments[1]);
}

#[test]
fn analysis_does_not_mutate_its_input() {
    let segments = vec![
        token(1, "言わ", "言う", "VERB", "動詞-一般", 0),
        token(2, "なかった", "ない", "AUX", "助動詞", 2),
    ];
    let before = segments.clone();
    let deinflector = Deinflector::new();

    let _ = analyze_conjugations(&segments, &deinflector);
    assert_eq!(segments, before);
}
