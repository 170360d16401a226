pub mod types;

pub mod pdf;
#[cfg(feature = "ocr")]
pub mod pdfium;

pub mod ocr;
pub mod orchestrator;

pub use ocr::*;
pub use orchestrator::*;
pub use pdf::*;
pub use types::*;

use std::path::PathBuf;

use thiserror::Error;

/// Returned in place of extracted text when neither extraction route
/// produces anything usable.
pub const NO_TEXT_SENTINEL: &str = "No text extracted from PDF.";

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("PDF is password protected")]
    PdfEncrypted,

    #[error("PDF rendering failed on page {page}: {reason}")]
    PdfRendering { page: usize, reason: String },

    #[error("image encoding failed: {0}")]
    ImageProcessing(String),

    #[error("OCR engine initialization failed: {0}")]
    OcrInit(String),

    #[error("OCR processing failed: {0}")]
    OcrProcessing(String),

    #[error("tessdata not found at: {}", .0.display())]
    TessdataNotFound(PathBuf),
}
