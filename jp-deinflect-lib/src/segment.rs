use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What kind of span a segment covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegKind {
    /// A tokenizer-produced token.
    Token { idx: usize, orthography: String },
    Whitespace,
    Punctuation,
}

/// Tagger-assigned attributes of a segment. All fields are optional:
/// non-token segments carry none of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
    /// Universal POS tag (VERB, AUX, ADJ, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upos: Option<String>,
    /// Language-specific POS tag (動詞, 助動詞, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpos: Option<String>,
    /// Dependency head index and relation label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency: Option<(u32, String)>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub misc: BTreeMap<String, Value>,
}

/// One span of a tagged sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentSeg {
    pub sentence_idx: usize,
    pub text: String,
    pub start_char: usize,
    pub end_char: usize,
    pub inner: SegKind,
    pub attributes: SegAttributes,
}

impl SentSeg {
    pub fn is_token(&self) -> bool {
        matches!(self.inner, SegKind::Token { .. })
    }

    /// A token segment with the given tags. Character offsets are the
    /// caller's concern.
    pub fn token(
        sentence_idx: usize,
        idx: usize,
        text: &str,
        start_char: usize,
        end_char: usize,
        attributes: SegAttributes,
    ) -> Self {
        Self {
            sentence_idx,
            text: text.to_string(),
            start_char,
            end_char,
            inner: SegKind::Token {
                idx,
                orthography: text.to_lowercase(),
            },
            attributes,
        }
    }

    pub fn whitespace(sentence_idx: usize, text: &str, start_char: usize, end_char: usize) -> Self {
        Self {
            sentence_idx,
            text: text.to_string(),
            start_char,
            end_char,
            inner: SegKind::Whitespace,
            attributes: SegAttributes::default(),
        }
    }

    pub fn punctuation(sentence_idx: usize, text: &str, start_char: usize, end_char: usize) -> Self {
        Self {
            sentence_idx,
            text: text.to_string(),
            start_char,
            end_char,
            inner: SegKind::Punctuation,
            attributes: SegAttributes::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_segments_round_trip_through_json() {
        let mut attributes = SegAttributes {
            lemma: Some("言う".to_string()),
            upos: Some("VERB".to_string()),
            xpos: Some("動詞-一般".to_string()),
            dependency: Some((0, "root".to_string())),
            misc: BTreeMap::new(),
        };
        attributes
            .misc
            .insert("reading".to_string(), Value::String("イッ".to_string()));
        let seg = SentSeg::token(0, 1, "言っ", 0, 2, attributes);

        let json = serde_json::to_string(&seg).unwrap();
        let back: SentSeg = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seg);
    }

    #[test]
    fn non_token_segments_have_no_attributes() {
        let seg = SentSeg::whitespace(0, " ", 5, 6);
        assert!(!seg.is_token());
        assert_eq!(seg.attributes, SegAttributes::default());
    }
}
