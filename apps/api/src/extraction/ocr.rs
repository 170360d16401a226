#![allow(dead_code)]

//! OCR engines. The real Tesseract-backed engine needs system libraries
//! (PDFium, Tesseract) and only compiles with the `ocr` feature; the default
//! build wires [`DisabledOcr`], whose empty attempt sends every document to
//! the native text layer.

use crate::extraction::{ExtractionError, OcrEngine};

/// Tesseract OCR over PDFium-rendered pages.
/// Only available when compiled with the `ocr` feature flag.
#[cfg(feature = "ocr")]
pub struct TesseractOcr {
    tessdata_dir: std::path::PathBuf,
    lang: String,
}

#[cfg(feature = "ocr")]
impl TesseractOcr {
    /// Initialize with a tessdata directory. Verifies the English
    /// traineddata and the PDFium library up front so misconfiguration
    /// surfaces at startup, not on the first request.
    pub fn new(tessdata_dir: &std::path::Path) -> Result<Self, ExtractionError> {
        if !tessdata_dir.join("eng.traineddata").exists() {
            return Err(ExtractionError::TessdataNotFound(tessdata_dir.to_path_buf()));
        }
        let _ = super::pdfium::load_pdfium()?;

        Ok(Self {
            tessdata_dir: tessdata_dir.to_path_buf(),
            lang: "eng".to_string(),
        })
    }

    /// Set language(s) for recognition (e.g., "eng", "eng+fra").
    pub fn with_language(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }

    fn recognize_page(&self, png: &[u8]) -> Result<String, ExtractionError> {
        let tessdata = self
            .tessdata_dir
            .to_str()
            .ok_or_else(|| ExtractionError::OcrInit("invalid tessdata path".into()))?;

        let tess = tesseract::Tesseract::new(Some(tessdata), Some(&self.lang))
            .map_err(|e| ExtractionError::OcrInit(format!("{e:?}")))?;
        let mut tess = tess
            .set_image_from_mem(png)
            .map_err(|e| ExtractionError::OcrProcessing(format!("{e:?}")))?;
        tess.get_text()
            .map_err(|e| ExtractionError::OcrProcessing(format!("{e:?}")))
    }
}

#[cfg(feature = "ocr")]
impl OcrEngine for TesseractOcr {
    fn recognize(&self, document: &[u8]) -> Result<String, ExtractionError> {
        let pages = super::pdfium::render_pages(document)?;
        let mut texts = Vec::with_capacity(pages.len());
        for (number, png) in pages.iter().enumerate() {
            let text = self.recognize_page(png)?;
            tracing::debug!(page = number, chars = text.len(), "OCR page recognized");
            texts.push(text);
        }
        Ok(texts.join("\n"))
    }
}

/// Stand-in wired by builds without the `ocr` feature: always produces an
/// empty attempt, so extraction proceeds straight to the native text layer.
pub struct DisabledOcr;

impl OcrEngine for DisabledOcr {
    fn recognize(&self, _document: &[u8]) -> Result<String, ExtractionError> {
        Ok(String::new())
    }
}

/// Mock OCR engine for unit testing without Tesseract.
pub struct MockOcrEngine {
    pub text: String,
}

impl MockOcrEngine {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl OcrEngine for MockOcrEngine {
    fn recognize(&self, _document: &[u8]) -> Result<String, ExtractionError> {
        Ok(self.text.clone())
    }
}
