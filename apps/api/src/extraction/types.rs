//! Shared extraction types and the engine seams the orchestrator composes.

use crate::extraction::{ExtractionError, NO_TEXT_SENTINEL};

/// Which extraction route produced a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Ocr,
    Native,
}

/// Raw outcome of one extraction route, before the fallback policy runs.
#[derive(Debug, Clone)]
pub struct ExtractionAttempt {
    pub source: TextSource,
    pub text: String,
}

impl ExtractionAttempt {
    /// Fallback policy: an attempt counts only if it produced at least one
    /// non-whitespace character.
    pub fn usable(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Final extraction output handed to the pipeline. Never empty: when both
/// routes come up blank the sentinel is substituted.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub source: TextSource,
}

impl ExtractedText {
    /// Sentinel result, substituted after the native attempt (the last route
    /// tried) also yields nothing.
    pub fn sentinel() -> Self {
        Self {
            text: NO_TEXT_SENTINEL.to_string(),
            source: TextSource::Native,
        }
    }
}

impl From<ExtractionAttempt> for ExtractedText {
    fn from(attempt: ExtractionAttempt) -> Self {
        Self {
            text: attempt.text,
            source: attempt.source,
        }
    }
}

/// Recognizes text from a rendered document; consulted first.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, document: &[u8]) -> Result<String, ExtractionError>;
}

/// Reads a document's embedded text layer page-by-page.
pub trait TextLayerExtractor: Send + Sync {
    fn extract_pages(&self, document: &[u8]) -> Result<Vec<String>, ExtractionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_with_text_is_usable() {
        let attempt = ExtractionAttempt {
            source: TextSource::Ocr,
            text: "hello".to_string(),
        };
        assert!(attempt.usable());
    }

    #[test]
    fn test_empty_and_whitespace_attempts_are_not_usable() {
        for text in ["", "   ", "\n\t \n"] {
            let attempt = ExtractionAttempt {
                source: TextSource::Native,
                text: text.to_string(),
            };
            assert!(!attempt.usable(), "{text:?} must not be usable");
        }
    }

    #[test]
    fn test_sentinel_carries_the_fixed_text() {
        assert_eq!(ExtractedText::sentinel().text, NO_TEXT_SENTINEL);
    }
}
