//! Embedded text-layer extraction via `pdf-extract`. No rasterization; this
//! is the fallback route for documents that already carry a text layer.

use crate::extraction::{ExtractionError, TextLayerExtractor};

pub struct PdfTextLayer;

impl TextLayerExtractor for PdfTextLayer {
    fn extract_pages(&self, document: &[u8]) -> Result<Vec<String>, ExtractionError> {
        pdf_extract::extract_text_from_mem_by_pages(document)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))
    }
}
