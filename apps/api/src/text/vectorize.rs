//! Fixed-length sequence vectorization over the fitted tokenizer vocabulary.
//!
//! Mirrors the tokenizer the models were trained with: whitespace-split words
//! are looked up in `word_index`, unknown words map to the out-of-vocabulary
//! id, sequences longer than `max_length` keep their trailing ids, and
//! shorter ones are front-padded with the filler id.

use std::collections::HashMap;

use serde::Deserialize;

/// Filler id used for padding; id 0 is reserved and never assigned to a word.
pub const PAD_ID: i64 = 0;

/// Token-id sequence of the vectorizer's fixed dimension.
pub type FeatureVector = Vec<i64>;

/// On-disk vectorizer state: the fitted `word_index` plus an optional
/// explicit out-of-vocabulary id.
#[derive(Debug, Deserialize)]
struct VocabFile {
    word_index: HashMap<String, i64>,
    #[serde(default)]
    oov_index: Option<i64>,
}

#[derive(Debug)]
pub struct SequenceVectorizer {
    vocab: HashMap<String, i64>,
    oov_index: i64,
    max_length: usize,
}

impl SequenceVectorizer {
    pub fn new(vocab: HashMap<String, i64>, oov_index: i64, max_length: usize) -> Self {
        Self {
            vocab,
            oov_index,
            max_length,
        }
    }

    /// Parses vectorizer state from its JSON artifact. The out-of-vocabulary
    /// id comes from the explicit `oov_index` field when present, then from a
    /// `<OOV>` vocabulary entry, then defaults to 1 (the id the original
    /// tokenizer reserves for its oov token).
    pub fn from_json(raw: &str, max_length: usize) -> Result<Self, serde_json::Error> {
        let file: VocabFile = serde_json::from_str(raw)?;
        let oov_index = file
            .oov_index
            .or_else(|| file.word_index.get("<OOV>").copied())
            .unwrap_or(1);
        Ok(Self::new(file.word_index, oov_index, max_length))
    }

    /// Output dimension; constant for the lifetime of the loaded artifact.
    pub fn dimension(&self) -> usize {
        self.max_length
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Encodes normalized text into exactly `max_length` token ids. Overlong
    /// input keeps the trailing ids; short or empty input is front-padded
    /// with `PAD_ID`, so the degenerate all-filler vector is a valid output,
    /// never an error.
    pub fn vectorize(&self, text: &str) -> FeatureVector {
        let ids: Vec<i64> = text
            .split_whitespace()
            .map(|word| self.vocab.get(word).copied().unwrap_or(self.oov_index))
            .collect();

        let mut out = vec![PAD_ID; self.max_length];
        let keep = ids.len().min(self.max_length);
        out[self.max_length - keep..].copy_from_slice(&ids[ids.len() - keep..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vectorizer() -> SequenceVectorizer {
        let vocab = HashMap::from([
            ("python".to_string(), 2),
            ("developer".to_string(), 3),
            ("data".to_string(), 4),
            ("engineer".to_string(), 5),
        ]);
        SequenceVectorizer::new(vocab, 1, 6)
    }

    #[test]
    fn test_fixed_dimension_regardless_of_input_length() {
        let vectorizer = test_vectorizer();
        for text in ["", "python", "python developer data engineer python developer data"] {
            assert_eq!(vectorizer.vectorize(text).len(), 6, "input {text:?}");
        }
    }

    #[test]
    fn test_pads_at_front() {
        let vectorizer = test_vectorizer();
        assert_eq!(vectorizer.vectorize("python developer"), vec![0, 0, 0, 0, 2, 3]);
    }

    #[test]
    fn test_truncates_keeping_trailing_ids() {
        let vectorizer = test_vectorizer();
        let out = vectorizer.vectorize("python developer data engineer python developer data engineer");
        assert_eq!(out, vec![4, 5, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unknown_words_map_to_oov() {
        let vectorizer = test_vectorizer();
        assert_eq!(vectorizer.vectorize("rust wizard"), vec![0, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_empty_text_is_all_filler() {
        let vectorizer = test_vectorizer();
        assert_eq!(vectorizer.vectorize(""), vec![PAD_ID; 6]);
    }

    #[test]
    fn test_from_json_defaults_oov_to_one() {
        let vectorizer =
            SequenceVectorizer::from_json(r#"{"word_index": {"python": 2}}"#, 4).unwrap();
        assert_eq!(vectorizer.vectorize("unknown"), vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_from_json_honors_explicit_oov_index() {
        let raw = r#"{"word_index": {"python": 2}, "oov_index": 9}"#;
        let vectorizer = SequenceVectorizer::from_json(raw, 4).unwrap();
        assert_eq!(vectorizer.vectorize("unknown"), vec![0, 0, 0, 9]);
    }

    #[test]
    fn test_from_json_reads_oov_token_entry() {
        let raw = r#"{"word_index": {"<OOV>": 3, "python": 2}}"#;
        let vectorizer = SequenceVectorizer::from_json(raw, 4).unwrap();
        assert_eq!(vectorizer.vectorize("unknown python"), vec![0, 0, 3, 2]);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(SequenceVectorizer::from_json("not json", 4).is_err());
        assert!(SequenceVectorizer::from_json(r#"{"oov_index": 1}"#, 4).is_err());
    }
}
