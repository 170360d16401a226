//! Extraction orchestration: the OCR route first, the embedded text layer
//! when OCR yields nothing usable, the sentinel when both come up blank.

use tracing::debug;

use crate::extraction::{
    ExtractedText, ExtractionAttempt, ExtractionError, OcrEngine, TextLayerExtractor, TextSource,
};

pub struct DocumentExtractor {
    ocr: Box<dyn OcrEngine>,
    text_layer: Box<dyn TextLayerExtractor>,
}

impl DocumentExtractor {
    pub fn new(ocr: Box<dyn OcrEngine>, text_layer: Box<dyn TextLayerExtractor>) -> Self {
        Self { ocr, text_layer }
    }

    /// Turns raw document bytes into text. An error means the bytes could not
    /// be processed as a document at all; a document with no recoverable text
    /// succeeds with the sentinel.
    pub fn extract(&self, document: &[u8]) -> Result<ExtractedText, ExtractionError> {
        let ocr_attempt = ExtractionAttempt {
            source: TextSource::Ocr,
            text: self.ocr.recognize(document)?,
        };
        if ocr_attempt.usable() {
            return Ok(ocr_attempt.into());
        }

        debug!("OCR returned no usable text, reading embedded text layer");
        let pages = self.text_layer.extract_pages(document)?;
        let native_attempt = ExtractionAttempt {
            source: TextSource::Native,
            text: pages.join("\n").trim().to_string(),
        };
        if native_attempt.usable() {
            return Ok(native_attempt.into());
        }

        debug!("No text from either route, substituting sentinel");
        Ok(ExtractedText::sentinel())
    }
}
